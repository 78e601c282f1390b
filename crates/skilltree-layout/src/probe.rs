//! Candidate positions for collision avoidance.
//!
//! Starting from a preferred position, candidates move right one step at a
//! time. Once a candidate would start more than `max_row_width` to the right
//! of the preferred column, the sequence wraps back to that column one row
//! further down:
//!
//! ```text
//! 0 1 2 3 ... k
//! k+1 k+2 ...
//! ```
//!
//! The sequence is infinite and strictly advances, so a search over a finite
//! set of occupied rectangles always terminates.

use crate::Point;

/// Iterator over probe positions.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    origin: Point,
    current: Point,
    step_x: f64,
    step_y: f64,
    max_row_width: f64,
    limit: Option<usize>,
    yielded: usize,
}

impl ProbeSequence {
    /// Create an infinite probe sequence.
    ///
    /// Non-positive or non-finite steps are clamped to one unit so the
    /// sequence always moves.
    pub fn new(origin: Point, step_x: f64, step_y: f64, max_row_width: f64) -> Self {
        Self {
            origin,
            current: origin,
            step_x: positive_step(step_x),
            step_y: positive_step(step_y),
            max_row_width: if max_row_width.is_finite() { max_row_width.max(0.0) } else { 0.0 },
            limit: None,
            yielded: 0,
        }
    }

    /// Stop after `count` candidates.
    pub fn take_candidates(mut self, count: usize) -> Self {
        self.limit = Some(count);
        self
    }
}

fn positive_step(step: f64) -> f64 {
    if step.is_finite() && step >= 1.0 {
        step
    } else {
        1.0
    }
}

impl Iterator for ProbeSequence {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(limit) = self.limit {
            if self.yielded >= limit {
                return None;
            }
        }

        let candidate = self.current;
        self.yielded += 1;

        let next_x = self.current.x + self.step_x;
        if next_x - self.origin.x > self.max_row_width {
            self.current = Point::new(self.origin.x, self.current.y + self.step_y);
        } else {
            self.current.x = next_x;
        }

        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.limit {
            Some(limit) => {
                let remaining = limit.saturating_sub(self.yielded);
                (remaining, Some(remaining))
            }
            None => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin() {
        let mut probe = ProbeSequence::new(Point::new(5.0, 7.0), 10.0, 20.0, 100.0);
        assert_eq!(probe.next(), Some(Point::new(5.0, 7.0)));
    }

    #[test]
    fn moves_right_then_wraps() {
        let points: Vec<_> = ProbeSequence::new(Point::ORIGIN, 10.0, 20.0, 25.0)
            .take_candidates(6)
            .collect();

        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(20.0, 0.0),
                Point::new(0.0, 20.0),
                Point::new(10.0, 20.0),
                Point::new(20.0, 20.0),
            ]
        );
    }

    #[test]
    fn zero_width_wraps_every_step() {
        let points: Vec<_> = ProbeSequence::new(Point::ORIGIN, 10.0, 20.0, 0.0)
            .take_candidates(3)
            .collect();
        assert!(points.iter().all(|p| p.x == 0.0));
        assert_eq!(points[2].y, 40.0);
    }

    #[test]
    fn degenerate_steps_still_advance() {
        let points: Vec<_> = ProbeSequence::new(Point::ORIGIN, 0.0, f64::NAN, 0.0)
            .take_candidates(3)
            .collect();
        assert_eq!(points[1], Point::new(0.0, 1.0));
        assert_eq!(points[2], Point::new(0.0, 2.0));
    }

    #[test]
    fn size_hint_respects_limit() {
        let probe = ProbeSequence::new(Point::ORIGIN, 1.0, 1.0, 10.0).take_candidates(4);
        assert_eq!(probe.size_hint(), (4, Some(4)));
        assert_eq!(probe.count(), 4);
    }
}
