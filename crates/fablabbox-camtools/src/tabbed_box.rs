//! Tabbed Box Maker
//!
//! Generates the cut outlines of a finger-jointed box: the six walls (or
//! five for an open box), internal divider layers with the slot holes they
//! slide into, lid plates, and the stacking lip of stackable boxes. Every
//! shape comes back in sheet coordinates, in millimetres.

pub mod holes;
pub mod layout;
pub mod panels;
pub mod profile;
pub mod rotate;
pub mod types;

pub use holes::{hole_shapes, slot_holes, HoleAxis, HolePattern, SlotHole};
pub use layout::LayoutPlan;
pub use panels::{build_outline, edge_style, outer_face, panel_shape};
pub use profile::{edge_profile, generate_tabs, tab_count, TabParameters, MIN_TAB_TO_THICKNESS};
pub use rotate::{rotate_point, rotate_profile};
pub use types::{
    BoxConfiguration, BoxVariant, DividerOffsets, EdgeDirection, EdgeStyle, JointSettings,
    LidPart, OutputShape, PanelKind, PanelOutline, PanelSpec, Point2D, StyleHint, TabProfile,
};

use tracing::{debug, info, warn};

use crate::config::BoxRequest;
use crate::error::BoxResult;

pub struct TabbedBoxMaker {
    request: BoxRequest,
    variant: BoxVariant,
}

impl TabbedBoxMaker {
    pub fn new(request: BoxRequest) -> BoxResult<Self> {
        request.validate()?;
        let variant = request
            .variant
            .with_flags(request.config.has_lid, request.config.is_stackable);
        Ok(Self { request, variant })
    }

    /// Variant after applying the lid and stacking flags of the configuration.
    pub fn variant(&self) -> BoxVariant {
        self.variant
    }

    pub fn config(&self) -> &BoxConfiguration {
        &self.request.config
    }

    /// Panel offsets on the sheet, origin included.
    pub fn plan(&self) -> LayoutPlan {
        LayoutPlan::new(&self.request.config, self.variant.is_stackable()).at(self.request.origin)
    }

    /// Distance between the bottom and the dividers. Stackable boxes keep
    /// the dividers clear of the stacked bottom.
    pub fn layer_offset(&self) -> f32 {
        let config = &self.request.config;
        if self.variant.is_stackable() && config.layer_offset < config.thickness {
            config.thickness
        } else {
            config.layer_offset
        }
    }

    /// All shapes of the box, in cutting order.
    pub fn generate(&self) -> BoxResult<Vec<OutputShape>> {
        let config = &self.request.config;
        if self.layer_offset() != config.layer_offset {
            warn!(
                requested = config.layer_offset,
                used = self.layer_offset(),
                "layer offset raised to clear the stacked bottom"
            );
        }

        self.check_edges()?;

        let plan = self.plan();
        let mut shapes = Vec::new();

        if self.variant.has_lid() {
            shapes.extend(self.lid(&plan)?);
        }

        match self.variant {
            BoxVariant::Open | BoxVariant::OpenWithCover => {
                shapes.extend(self.open_walls(&plan)?);
            }
            BoxVariant::OpenStackable => {
                shapes.extend(self.stackable_walls(&plan)?);
            }
            BoxVariant::ClosedWithTop => {
                shapes.extend(self.closed_walls(&plan)?);
            }
        }

        shapes.extend(self.dividers(&plan)?);

        info!(
            prefix = %self.request.prefix,
            variant = %self.variant,
            shapes = shapes.len(),
            "generated box"
        );
        Ok(shapes)
    }

    /// Reject tab sizes before any panel is built.
    fn check_edges(&self) -> BoxResult<()> {
        let config = &self.request.config;
        let t = config.thickness;

        tab_count(
            config.height - self.layer_offset() - t,
            config.tab_width,
            t,
        )?;

        if self.variant.is_stackable() {
            tab_count(config.width, config.tab_width, t)?;
            tab_count(config.depth, config.tab_width, t)?;
        }
        Ok(())
    }

    fn front_kind(&self) -> PanelKind {
        match self.variant {
            BoxVariant::Open | BoxVariant::OpenWithCover => PanelKind::FrontWithoutTop,
            BoxVariant::OpenStackable => PanelKind::StackableFront,
            BoxVariant::ClosedWithTop => PanelKind::FrontWithTop,
        }
    }

    fn side_kind(&self) -> PanelKind {
        match self.variant {
            BoxVariant::Open | BoxVariant::OpenWithCover => PanelKind::SideWithoutTop,
            BoxVariant::OpenStackable => PanelKind::StackableSide,
            BoxVariant::ClosedWithTop => PanelKind::SideWithTop,
        }
    }

    fn spec(&self, kind: PanelKind, width: f32, height: f32, placement: Point2D) -> PanelSpec {
        PanelSpec {
            kind,
            width,
            height,
            joint: self.request.config.joint(),
            placement,
        }
    }

    fn id(&self, role: &str) -> String {
        format!("{}_{}", self.request.prefix, role)
    }

    fn place(
        &self,
        role: &str,
        kind: PanelKind,
        width: f32,
        height: f32,
        placement: Point2D,
    ) -> BoxResult<OutputShape> {
        debug!(role, ?kind, x = placement.x, y = placement.y, "placing panel");
        panel_shape(self.id(role), &self.spec(kind, width, height, placement))
    }

    fn lid(&self, plan: &LayoutPlan) -> BoxResult<Vec<OutputShape>> {
        let c = &self.request.config;
        Ok(vec![
            self.place(
                "bottom_lid",
                PanelKind::Lid(LidPart::Inner),
                c.width,
                c.depth,
                plan.inner_lid,
            )?,
            self.place(
                "top_lid",
                PanelKind::Lid(LidPart::Outer),
                c.width,
                c.depth,
                plan.outer_lid,
            )?,
        ])
    }

    fn open_walls(&self, plan: &LayoutPlan) -> BoxResult<Vec<OutputShape>> {
        let c = &self.request.config;
        Ok(vec![
            self.place("bottom", PanelKind::Bottom, c.width, c.depth, plan.bottom)?,
            self.place("front", PanelKind::FrontWithoutTop, c.width, c.height, plan.front)?,
            self.place("back", PanelKind::FrontWithoutTop, c.width, c.height, plan.back)?,
            self.place("left_side", PanelKind::SideWithoutTop, c.depth, c.height, plan.left_side)?,
            self.place("right_side", PanelKind::SideWithoutTop, c.depth, c.height, plan.right_side)?,
        ])
    }

    fn closed_walls(&self, plan: &LayoutPlan) -> BoxResult<Vec<OutputShape>> {
        let c = &self.request.config;
        Ok(vec![
            self.place("bottom", PanelKind::Bottom, c.width, c.depth, plan.bottom)?,
            self.place("top", PanelKind::Top, c.width, c.depth, plan.top)?,
            self.place("front", PanelKind::FrontWithTop, c.width, c.height, plan.front)?,
            self.place("back", PanelKind::FrontWithTop, c.width, c.height, plan.back)?,
            self.place("left_side", PanelKind::SideWithTop, c.depth, c.height, plan.left_side)?,
            self.place("right_side", PanelKind::SideWithTop, c.depth, c.height, plan.right_side)?,
        ])
    }

    /// Walls of a stackable box, each followed by the hole row that takes
    /// the flush tabs of the bottom, one thickness under the lip.
    fn stackable_walls(&self, plan: &LayoutPlan) -> BoxResult<Vec<OutputShape>> {
        let c = &self.request.config;
        let t = c.thickness;
        let joint = c.joint();
        let front = self.front_kind();
        let side = self.side_kind();
        let walls = [
            ("front", front, c.width, plan.front),
            ("back", front, c.width, plan.back),
            ("left_side", side, c.depth, plan.left_side),
            ("right_side", side, c.depth, plan.right_side),
        ];

        let mut shapes = vec![self.place(
            "bottom",
            PanelKind::StackableBottom,
            c.width,
            c.depth,
            plan.bottom,
        )?];
        for (role, kind, length, at) in walls {
            shapes.push(self.place(role, kind, length, c.height, at)?);
            shapes.extend(hole_shapes(
                &self.id(&format!("{}_stack_hole", role)),
                length - 4.0 * t,
                &joint,
                HolePattern::STACK_LIP_ROW,
                at.offset(outer_face(kind, t) + 2.0 * t, c.height - t),
            )?);
        }
        Ok(shapes)
    }

    /// Divider layers, the hole columns they need in the walls they pierce,
    /// and the cross-lap notches where horizontal and vertical layers meet.
    fn dividers(&self, plan: &LayoutPlan) -> BoxResult<Vec<OutputShape>> {
        let c = &self.request.config;
        let t = c.thickness;
        let joint = c.joint();
        let layer_offset = self.layer_offset();
        let layer_height = c.height - layer_offset;
        let column = layer_height - t;
        let offsets = &c.divider_offsets;
        // Hole columns are centred on the offset, measured from each wall's
        // outer face.
        let side_column = outer_face(self.side_kind(), t) - t / 2.0;
        let front_column = outer_face(self.front_kind(), t) - t / 2.0;
        let notch_column = outer_face(PanelKind::Layer, t) - t / 2.0;

        let mut shapes = Vec::new();

        for (i, &offset) in offsets.horizontal.iter().enumerate() {
            for (wall, at) in [("left_side", plan.left_side), ("right_side", plan.right_side)] {
                shapes.extend(hole_shapes(
                    &self.id(&format!("{}_H_layer_{}_hole", wall, i)),
                    column,
                    &joint,
                    HolePattern::DIVIDER_COLUMN,
                    at.offset(side_column + offset, layer_offset),
                )?);
            }

            let at = plan.h_layer.offset(0.0, i as f32 * layer_height);
            shapes.push(self.place(
                &format!("Horizontal_layer_{}", i),
                PanelKind::Layer,
                c.width,
                layer_height,
                at,
            )?);

            for (j, &cross) in offsets.vertical.iter().enumerate() {
                shapes.push(self.notch(
                    &format!("Horizontal_offset_rect_{}_{}", i, j),
                    at.offset(notch_column + cross, 0.0),
                    column / 2.0,
                ));
            }
        }

        for (i, &offset) in offsets.vertical.iter().enumerate() {
            for (wall, at) in [("front", plan.front), ("back", plan.back)] {
                shapes.extend(hole_shapes(
                    &self.id(&format!("{}_V_layer_{}_hole", wall, i)),
                    column,
                    &joint,
                    HolePattern::DIVIDER_COLUMN,
                    at.offset(front_column + offset, layer_offset),
                )?);
            }

            let at = plan.v_layer.offset(0.0, i as f32 * layer_height);
            shapes.push(self.place(
                &format!("Vertical_layer_{}", i),
                PanelKind::Layer,
                c.depth,
                layer_height,
                at,
            )?);

            // Vertical layers are notched from below, horizontal ones from above.
            for (j, &cross) in offsets.horizontal.iter().enumerate() {
                shapes.push(self.notch(
                    &format!("Vertical_offset_rect_{}_{}", i, j),
                    at.offset(notch_column + cross, column / 2.0),
                    column / 2.0,
                ));
            }
        }

        Ok(shapes)
    }

    /// Thickness-wide notch of `length` letting two crossing layers interlock.
    fn notch(&self, role: &str, at: Point2D, length: f32) -> OutputShape {
        let t = self.request.config.thickness;
        let outline = PanelOutline {
            start: Point2D::ZERO,
            deltas: vec![
                Point2D::new(t, 0.0),
                Point2D::new(0.0, length),
                Point2D::new(-t, 0.0),
                Point2D::new(0.0, -length),
            ],
        };
        OutputShape {
            id: self.id(role),
            placement: at,
            polygon: outline.translated(at),
            style: StyleHint::Hole,
        }
    }
}
