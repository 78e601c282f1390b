//! Rectangles already claimed on the canvas.

use crate::{Point, ProbeSequence, Rect};

/// Every footprint placed so far, across all categories and domains.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    rects: Vec<Rect>,
}

impl Occupancy {
    /// Create an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `rect` overlaps any claimed footprint.
    pub fn collides(&self, rect: &Rect) -> bool {
        self.rects.iter().any(|r| r.overlaps(rect))
    }

    /// Claim a footprint.
    pub fn insert(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    /// First probe position whose footprint is free, then claim it.
    ///
    /// `footprint` gives the size; its origin is ignored. Returns `None` only
    /// when a bounded probe runs out of candidates.
    pub fn claim(&mut self, probe: ProbeSequence, footprint: Rect) -> Option<Point> {
        let size = Rect::new(Point::ORIGIN, footprint.width, footprint.height);
        let rect = probe
            .map(|candidate| size.translate(candidate))
            .find(|rect| !self.collides(rect))?;
        self.insert(rect);
        Some(rect.origin)
    }

    /// Bounding box of every claimed footprint.
    pub fn bounds(&self) -> Option<Rect> {
        let (first, rest) = self.rects.split_first()?;
        Some(rest.iter().fold(*first, |acc, r| acc.union(r)))
    }

    /// Claimed footprints in placement order.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Number of claimed footprints.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
