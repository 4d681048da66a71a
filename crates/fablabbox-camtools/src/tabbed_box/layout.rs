//! Sheet layout: where each panel of a box is cut.
//!
//! The grid has four rows (horizontal plates, fronts, sides, divider
//! layers), each separated by a few thicknesses so the bounding boxes of the
//! panels never touch, whatever the box variant.

use serde::{Deserialize, Serialize};

use super::types::{BoxConfiguration, Point2D};

/// Panel-local origins on the sheet, relative to the request origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlan {
    pub bottom: Point2D,
    /// Top plate of a closed box.
    pub top: Point2D,
    /// Lid plates, in the plate row right of the top.
    pub inner_lid: Point2D,
    pub outer_lid: Point2D,
    pub front: Point2D,
    pub back: Point2D,
    pub left_side: Point2D,
    pub right_side: Point2D,
    /// First horizontal divider; the others follow below it.
    pub h_layer: Point2D,
    /// First vertical divider; the others follow below it.
    pub v_layer: Point2D,
}

impl LayoutPlan {
    pub fn new(config: &BoxConfiguration, stackable: bool) -> Self {
        let w = config.width;
        let d = config.depth;
        let h = config.height;
        let t = config.thickness;

        let plates_y = 3.0 * t;
        let walls_y = d + 6.0 * t;
        let sides_y = d + h + 12.0 * t;
        let layers_y = d + 2.0 * h + 16.0 * t;

        let lid_step = w + t;

        let mut plan = Self {
            bottom: Point2D::new(t, plates_y),
            top: Point2D::new(w + 3.0 * t, plates_y),
            inner_lid: Point2D::new(w + 3.0 * t + lid_step, plates_y),
            outer_lid: Point2D::new(w + 3.0 * t + 2.0 * lid_step, plates_y),
            front: Point2D::new(t, walls_y),
            back: Point2D::new(w + 3.0 * t, walls_y),
            left_side: Point2D::new(4.0 * t, sides_y),
            right_side: Point2D::new(d + 9.0 * t, sides_y),
            h_layer: Point2D::new(3.0 * t, layers_y),
            v_layer: Point2D::new(w + 7.0 * t, layers_y),
        };

        // Room for the lip hanging under the walls.
        if stackable {
            plan.front = plan.front.offset(0.0, t);
            plan.back = plan.back.offset(0.0, t);
            plan.left_side = plan.left_side.offset(-3.0 * t, 4.0 * t);
            plan.right_side = plan.right_side.offset(-2.0 * t, 4.0 * t);
            plan.h_layer = plan.h_layer.offset(t, 6.0 * t);
            plan.v_layer = plan.v_layer.offset(t, 6.0 * t);
        }

        plan
    }

    /// Every role with its offset.
    pub fn roles(&self) -> [(&'static str, Point2D); 10] {
        [
            ("bottom", self.bottom),
            ("top", self.top),
            ("bottom_lid", self.inner_lid),
            ("top_lid", self.outer_lid),
            ("front", self.front),
            ("back", self.back),
            ("left_side", self.left_side),
            ("right_side", self.right_side),
            ("H_layer", self.h_layer),
            ("V_layer", self.v_layer),
        ]
    }

    pub fn get(&self, role: &str) -> Option<Point2D> {
        self.roles()
            .into_iter()
            .find(|(name, _)| *name == role)
            .map(|(_, offset)| offset)
    }

    /// The plan moved to `origin` on the sheet.
    pub fn at(&self, origin: Point2D) -> Self {
        Self {
            bottom: self.bottom + origin,
            top: self.top + origin,
            inner_lid: self.inner_lid + origin,
            outer_lid: self.outer_lid + origin,
            front: self.front + origin,
            back: self.back + origin,
            left_side: self.left_side + origin,
            right_side: self.right_side + origin,
            h_layer: self.h_layer + origin,
            v_layer: self.v_layer + origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_for_reference_box() {
        let config = BoxConfiguration {
            width: 100.0,
            depth: 80.0,
            height: 50.0,
            thickness: 3.0,
            ..Default::default()
        };
        let plan = LayoutPlan::new(&config, false);
        assert_eq!(plan.bottom, Point2D::new(3.0, 9.0));
        assert_eq!(plan.top, Point2D::new(109.0, 9.0));
        assert_eq!(plan.inner_lid, Point2D::new(212.0, 9.0));
        assert_eq!(plan.get("top_lid"), Some(Point2D::new(315.0, 9.0)));
        assert_eq!(plan.front, Point2D::new(3.0, 98.0));
        assert_eq!(plan.right_side, Point2D::new(107.0, 166.0));
        assert_eq!(plan.h_layer, Point2D::new(9.0, 228.0));
        assert_eq!(plan.get("V_layer"), Some(Point2D::new(121.0, 228.0)));
        assert_eq!(plan.get("lid"), None);
        assert_eq!(plan.roles().len(), 10);
    }

    #[test]
    fn test_stackable_shifts() {
        let config = BoxConfiguration::default();
        let t = config.thickness;
        let flat = LayoutPlan::new(&config, false);
        let stacked = LayoutPlan::new(&config, true);
        assert_eq!(stacked.bottom, flat.bottom);
        assert_eq!(stacked.outer_lid, flat.outer_lid);
        assert_eq!(stacked.front, flat.front.offset(0.0, t));
        assert_eq!(stacked.left_side, flat.left_side.offset(-3.0 * t, 4.0 * t));
        assert_eq!(stacked.right_side, flat.right_side.offset(-2.0 * t, 4.0 * t));
        assert_eq!(stacked.v_layer, flat.v_layer.offset(t, 6.0 * t));
    }

    #[test]
    fn test_plan_moves_with_origin() {
        let plan = LayoutPlan::new(&BoxConfiguration::default(), false);
        let moved = plan.at(Point2D::new(10.0, -5.0));
        for ((_, a), (_, b)) in plan.roles().into_iter().zip(moved.roles()) {
            assert_eq!(b, a.offset(10.0, -5.0));
        }
    }
}
