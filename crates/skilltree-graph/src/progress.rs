//! Completion progress.

use std::collections::HashSet;

use crate::{Node, NodeId};

/// Percentage (0-100, rounded) of `visible` nodes whose id is completed.
///
/// An empty visible set is 0% rather than a division by zero.
pub fn calculate_progress<'a, I>(visible: I, completed: &HashSet<NodeId>) -> u8
where
    I: IntoIterator<Item = &'a Node>,
{
    let (total, done) = visible.into_iter().fold((0usize, 0usize), |(total, done), node| {
        (total + 1, done + usize::from(completed.contains(&node.id)))
    });

    if total == 0 {
        return 0;
    }

    (100.0 * done as f64 / total as f64).round() as u8
}

/// Plain ratio with no zero guard.
///
/// `raw_ratio(x, 0.0)` is infinite (or NaN for `0/0`); callers that need a
/// bounded percentage use [`calculate_progress`] instead.
#[inline]
pub fn raw_ratio(numerator: f64, denominator: f64) -> f64 {
    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(raw: &[&str]) -> Vec<Node> {
        raw.iter().map(|&id| Node::new(id, id)).collect()
    }

    fn ids(raw: &[&str]) -> HashSet<NodeId> {
        raw.iter().map(|&s| NodeId::from(s)).collect()
    }

    #[test]
    fn empty_visible_is_zero() {
        assert_eq!(calculate_progress(&[], &ids(&["a"])), 0);
        assert_eq!(calculate_progress(&[], &HashSet::new()), 0);
    }

    #[test]
    fn subset_is_full() {
        let visible = nodes(&["a", "b"]);
        assert_eq!(calculate_progress(&visible, &ids(&["a", "b", "c"])), 100);
    }

    #[test]
    fn rounds_to_nearest() {
        let visible = nodes(&["a", "b", "c"]);
        assert_eq!(calculate_progress(&visible, &ids(&["a"])), 33);
        assert_eq!(calculate_progress(&visible, &ids(&["a", "b"])), 67);

        let visible = nodes(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        // 1/8 = 12.5 rounds up
        assert_eq!(calculate_progress(&visible, &ids(&["a"])), 13);
    }

    #[test]
    fn completed_ids_outside_visible_do_not_count() {
        let visible = nodes(&["a", "b"]);
        assert_eq!(calculate_progress(&visible, &ids(&["z"])), 0);
    }

    #[test]
    fn works_over_references() {
        let all = nodes(&["a", "b", "c", "d"]);
        let visible: Vec<&Node> = all.iter().take(2).collect();
        assert_eq!(calculate_progress(visible, &ids(&["a"])), 50);
    }

    #[test]
    fn raw_ratio_is_unguarded() {
        assert_eq!(raw_ratio(1.0, 4.0), 0.25);
        assert!(raw_ratio(3.0, 0.0).is_infinite());
        assert!(raw_ratio(0.0, 0.0).is_nan());
    }
}
