//! Slot holes cut through a wall so a perpendicular panel can slide in.
//!
//! Holes reuse [`tab_count`], so their pitch always matches the tabs of
//! the mating edge.

use serde::{Deserialize, Serialize};

use super::profile::tab_count;
use super::types::{JointSettings, OutputShape, PanelOutline, Point2D, StyleHint};
use crate::error::BoxResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoleAxis {
    /// Holes lined up along x, each `thickness` tall.
    Horizontal,
    /// Holes lined up along y, each `thickness` wide.
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolePattern {
    pub axis: HoleAxis,
    /// Holes sit on odd segments when set, on even segments otherwise.
    pub odd_segments: bool,
    /// The first hole gets half the backlash lead-in, matching the half
    /// backlash on the first tab of a flush edge.
    pub stack: bool,
}

impl HolePattern {
    /// Row under the stacking lip of a wall; receives the flush tabs of a
    /// stackable bottom.
    pub const STACK_LIP_ROW: HolePattern = HolePattern {
        axis: HoleAxis::Horizontal,
        odd_segments: true,
        stack: true,
    };

    /// Column in a wall receiving the inward tabs of a divider layer.
    pub const DIVIDER_COLUMN: HolePattern = HolePattern {
        axis: HoleAxis::Vertical,
        odd_segments: false,
        stack: false,
    };

    fn holds(&self, segment: usize) -> bool {
        (segment % 2 == 1) == self.odd_segments
    }
}

/// One hole, numbered by the 1-based segment it replaces.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotHole {
    pub segment: usize,
    pub outline: PanelOutline,
}

/// Holes along `length`, relative to the start of the run.
pub fn slot_holes(
    length: f32,
    joint: &JointSettings,
    pattern: HolePattern,
) -> BoxResult<Vec<SlotHole>> {
    let (count, width) = tab_count(length, joint.tab_width, joint.thickness)?;
    let t = joint.thickness;
    let backlash = joint.backlash;
    let span = width + backlash;

    let holes = (1..=count)
        .filter(|&i| pattern.holds(i))
        .map(|i| {
            let lead = if pattern.stack && i == 1 {
                0.5 * backlash
            } else {
                backlash
            };
            let along = (i - 1) as f32 * width + lead;
            let outline = match pattern.axis {
                HoleAxis::Horizontal => PanelOutline {
                    start: Point2D::new(along, 0.0),
                    deltas: vec![
                        Point2D::new(0.0, t),
                        Point2D::new(span, 0.0),
                        Point2D::new(0.0, -t),
                        Point2D::new(-span, 0.0),
                    ],
                },
                HoleAxis::Vertical => PanelOutline {
                    start: Point2D::new(0.0, along),
                    deltas: vec![
                        Point2D::new(t, 0.0),
                        Point2D::new(0.0, span),
                        Point2D::new(-t, 0.0),
                        Point2D::new(0.0, -span),
                    ],
                },
            };
            SlotHole {
                segment: i,
                outline,
            }
        })
        .collect();

    Ok(holes)
}

/// Holes placed at `base` on the sheet. Ids are `{stem}_{segment}`.
pub fn hole_shapes(
    stem: &str,
    length: f32,
    joint: &JointSettings,
    pattern: HolePattern,
    base: Point2D,
) -> BoxResult<Vec<OutputShape>> {
    let holes = slot_holes(length, joint, pattern)?;
    Ok(holes
        .into_iter()
        .map(|hole| OutputShape {
            id: format!("{}_{}", stem, hole.segment),
            placement: base,
            polygon: hole.outline.translated(base),
            style: StyleHint::Hole,
        })
        .collect())
}
