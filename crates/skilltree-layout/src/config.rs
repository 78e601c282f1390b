//! Layout dimensions.

use serde::{Deserialize, Serialize};

use crate::{Error, Point, Rect, Result};

/// Largest magnitude accepted for any distance in a [`LayoutConfig`].
///
/// Keeps every coordinate the engine produces in a range where one grid
/// step is still representable.
pub const MAX_DISTANCE: f64 = 1.0e9;

/// Fixed dimensions and gaps used by the layout engine.
///
/// Every field has a default, so a config file only needs to name the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Initial vertical cursor.
    pub top_margin: f64,
    /// Start of the first domain band.
    pub left_margin: f64,
    pub node_width: f64,
    pub node_height: f64,
    /// Minimum gap between neighbouring nodes.
    pub node_spacing: f64,
    /// Grid columns inside a domain band.
    pub columns: usize,
    /// Horizontal gap between domain bands.
    pub domain_gap: f64,
    /// Vertical gap between categories.
    pub category_gap: f64,
    /// How far right probing may drift before wrapping to the next row.
    pub max_row_width: f64,
    pub subnode_width: f64,
    pub subnode_height: f64,
    pub subnode_spacing: f64,
    /// Grid columns for the subnodes of one expanded parent.
    pub subnode_columns: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            top_margin: 100.0,
            left_margin: 100.0,
            node_width: 160.0,
            node_height: 60.0,
            node_spacing: 40.0,
            columns: 3,
            domain_gap: 80.0,
            category_gap: 120.0,
            max_row_width: 2400.0,
            subnode_width: 140.0,
            subnode_height: 40.0,
            subnode_spacing: 20.0,
            subnode_columns: 2,
        }
    }
}

impl LayoutConfig {
    /// Horizontal distance between grid columns.
    #[inline]
    pub fn step_x(&self) -> f64 {
        self.node_width + self.node_spacing
    }

    /// Vertical distance between grid rows.
    #[inline]
    pub fn step_y(&self) -> f64 {
        self.node_height + self.node_spacing
    }

    /// Horizontal distance between subnode columns.
    #[inline]
    pub fn subnode_step_x(&self) -> f64 {
        self.subnode_width + self.subnode_spacing
    }

    /// Vertical distance between subnode rows.
    #[inline]
    pub fn subnode_step_y(&self) -> f64 {
        self.subnode_height + self.subnode_spacing
    }

    /// The area every placed node reserves, parents and subnodes alike.
    pub fn footprint(&self) -> Rect {
        Rect::new(Point::ORIGIN, self.node_width, self.node_height)
    }

    /// Reject values that would make placement degenerate.
    pub fn validate(&self) -> Result<()> {
        positive("node_width", self.node_width)?;
        positive("node_height", self.node_height)?;
        positive("subnode_width", self.subnode_width)?;
        positive("subnode_height", self.subnode_height)?;
        non_negative("node_spacing", self.node_spacing)?;
        non_negative("subnode_spacing", self.subnode_spacing)?;
        non_negative("domain_gap", self.domain_gap)?;
        non_negative("category_gap", self.category_gap)?;
        non_negative("max_row_width", self.max_row_width)?;
        bounded("top_margin", self.top_margin)?;
        bounded("left_margin", self.left_margin)?;
        resolvable("left_margin", self.left_margin, self.node_width)?;
        resolvable("top_margin", self.top_margin, self.node_height)?;
        if self.columns == 0 {
            return Err(Error::InvalidConfig { field: "columns", reason: "must be at least 1" });
        }
        if self.subnode_columns == 0 {
            return Err(Error::InvalidConfig {
                field: "subnode_columns",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

fn bounded(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidConfig { field, reason: "must be finite" });
    }
    if value.abs() > MAX_DISTANCE {
        return Err(Error::InvalidConfig { field, reason: "is out of range" });
    }
    Ok(())
}

/// `size` must still move a coordinate starting at `origin`.
fn resolvable(field: &'static str, origin: f64, size: f64) -> Result<()> {
    if origin + size > origin {
        Ok(())
    } else {
        Err(Error::InvalidConfig { field, reason: "too large for the node size" })
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    bounded(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig { field, reason: "must be positive" })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    bounded(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig { field, reason: "must not be negative" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn default_subgrid_fits_footprint() {
        // Subnode cells are at least one footprint apart, so a collapsed
        // sub-grid never collides with itself.
        let config = LayoutConfig::default();
        assert!(config.subnode_step_x() >= config.node_width);
        assert!(config.subnode_step_y() >= config.node_height);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config: LayoutConfig = serde_json::from_str(r#"{"columns": 5}"#).unwrap();
        assert_eq!(config.columns, 5);
        assert_eq!(config.node_width, LayoutConfig::default().node_width);
    }

    #[test]
    fn rejects_degenerate_values() {
        let zero_width = LayoutConfig { node_width: 0.0, ..LayoutConfig::default() };
        assert!(matches!(
            zero_width.validate(),
            Err(Error::InvalidConfig { field: "node_width", .. })
        ));

        let no_columns = LayoutConfig { columns: 0, ..LayoutConfig::default() };
        assert!(no_columns.validate().is_err());

        let infinite = LayoutConfig { max_row_width: f64::INFINITY, ..LayoutConfig::default() };
        assert!(infinite.validate().is_err());

        let negative = LayoutConfig { node_spacing: -1.0, ..LayoutConfig::default() };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn rejects_margins_that_swallow_the_footprint() {
        let far = LayoutConfig { left_margin: 1e20, ..LayoutConfig::default() };
        assert!(matches!(
            far.validate(),
            Err(Error::InvalidConfig { field: "left_margin", .. })
        ));

        let deep = LayoutConfig { top_margin: -1e20, ..LayoutConfig::default() };
        assert!(deep.validate().is_err());

        let huge_gap = LayoutConfig { category_gap: 1e300, ..LayoutConfig::default() };
        assert!(huge_gap.validate().is_err());

        // Tiny nodes next to a large but accepted margin
        let tiny = LayoutConfig {
            left_margin: MAX_DISTANCE,
            node_width: 1e-9,
            ..LayoutConfig::default()
        };
        assert!(tiny.validate().is_err());

        let edge = LayoutConfig { left_margin: MAX_DISTANCE, ..LayoutConfig::default() };
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn steps() {
        let config = LayoutConfig::default();
        assert_eq!(config.step_x(), 200.0);
        assert_eq!(config.step_y(), 100.0);
        assert_eq!(config.footprint().width, 160.0);
    }
}
