//! Panel outlines.
//!
//! Every outline is walked top, right, bottom, left. Which edges carry tabs,
//! and how, is decided by [`edge_style`]; everything else is corner geometry.

use super::profile::edge_profile;
use super::rotate::rotate_point;
use super::types::{
    EdgeDirection, EdgeStyle, JointSettings, LidPart, OutputShape, PanelKind, PanelOutline,
    PanelSpec, Point2D, StyleHint, TabProfile,
};
use crate::error::BoxResult;

/// Tabs of each edge of each panel kind. `None` is a straight edge.
pub fn edge_style(kind: PanelKind, side: EdgeDirection) -> Option<EdgeStyle> {
    use EdgeDirection::*;
    use EdgeStyle::*;

    match (kind, side) {
        (PanelKind::Bottom | PanelKind::Top, _) => Some(Outward),
        (PanelKind::StackableBottom, _) => Some(OutwardFlush),

        (PanelKind::FrontWithoutTop, Top) => None,
        (PanelKind::FrontWithoutTop, Bottom) => Some(Inward),
        (PanelKind::FrontWithoutTop, Right | Left) => Some(Outward),

        (PanelKind::FrontWithTop, Top | Bottom) => Some(Inward),
        (PanelKind::FrontWithTop, Right | Left) => Some(Outward),

        (PanelKind::StackableFront, Top | Bottom) => None,
        (PanelKind::StackableFront, Right | Left) => Some(Outward),

        (PanelKind::SideWithoutTop, Top) => None,
        (PanelKind::SideWithoutTop, Bottom) => Some(InwardCutOff),
        (PanelKind::SideWithoutTop, Right | Left) => Some(Inward),

        (PanelKind::SideWithTop, Top | Bottom) => Some(InwardCutOff),
        (PanelKind::SideWithTop, Right | Left) => Some(Inward),

        (PanelKind::StackableSide | PanelKind::Layer, Top | Bottom) => None,
        (PanelKind::StackableSide | PanelKind::Layer, Right | Left) => Some(Inward),

        (PanelKind::Lid(_), _) => None,
    }
}

/// Local x of the left outer face of a panel outline. Offsets measured
/// across a panel start here.
pub fn outer_face(kind: PanelKind, thickness: f32) -> f32 {
    match kind {
        PanelKind::SideWithoutTop | PanelKind::Layer => -2.0 * thickness,
        PanelKind::StackableSide => -thickness,
        _ => 0.0,
    }
}

struct OutlineBuilder<'a> {
    kind: PanelKind,
    joint: &'a JointSettings,
    start: Point2D,
    deltas: TabProfile,
}

impl<'a> OutlineBuilder<'a> {
    fn new(spec: &'a PanelSpec, start: Point2D) -> Self {
        Self {
            kind: spec.kind,
            joint: &spec.joint,
            start,
            deltas: Vec::new(),
        }
    }

    fn line(mut self, dx: f32, dy: f32) -> Self {
        self.deltas.push(Point2D::new(dx, dy));
        self
    }

    /// Append one side of the panel, tabbed or straight per [`edge_style`].
    fn edge(mut self, side: EdgeDirection, length: f32) -> BoxResult<Self> {
        match edge_style(self.kind, side) {
            Some(style) => {
                let profile = edge_profile(length, self.joint, style, side)?;
                self.deltas.extend(profile);
            }
            None => self
                .deltas
                .push(rotate_point(Point2D::new(length, 0.0), side)),
        }
        Ok(self)
    }

    /// Straight run of `run` along x with a `lip`-wide shoulder at each end
    /// and the middle raised by `height`. Negative runs walk right to left.
    fn stack_lip(self, run: f32, lip: f32, height: f32) -> Self {
        let dir = run.signum();
        self.line(dir * lip, 0.0)
            .line(0.0, -height)
            .line(run - 2.0 * dir * lip, 0.0)
            .line(0.0, height)
            .line(dir * lip, 0.0)
    }

    fn finish(self) -> PanelOutline {
        PanelOutline {
            start: self.start,
            deltas: self.deltas,
        }
    }
}

/// Build the closed outline of a panel in its local frame.
pub fn build_outline(spec: &PanelSpec) -> BoxResult<PanelOutline> {
    use EdgeDirection::*;

    let w = spec.width;
    let h = spec.height;
    let t = spec.joint.thickness;

    let outline = match spec.kind {
        PanelKind::Bottom | PanelKind::Top => OutlineBuilder::new(spec, Point2D::ZERO)
            .edge(Top, w)?
            .edge(Right, h)?
            .edge(Bottom, w)?
            .edge(Left, h)?
            .finish(),

        // Sits inside the stacking lip: every run is 4t short and framed by
        // thickness steps at the corners.
        PanelKind::StackableBottom => OutlineBuilder::new(spec, Point2D::new(t, 0.0))
            .line(0.0, -t)
            .line(t, 0.0)
            .edge(Top, w - 4.0 * t)?
            .line(t, 0.0)
            .line(0.0, t)
            .edge(Right, h - 4.0 * t)?
            .line(0.0, t)
            .line(-t, 0.0)
            .edge(Bottom, w - 4.0 * t)?
            .line(-t, 0.0)
            .line(0.0, -t)
            .edge(Left, h - 4.0 * t)?
            .finish(),

        PanelKind::FrontWithoutTop => OutlineBuilder::new(spec, Point2D::ZERO)
            .edge(Top, w)?
            .edge(Right, h - t)?
            .edge(Bottom, w)?
            .edge(Left, h - t)?
            .finish(),

        PanelKind::FrontWithTop => OutlineBuilder::new(spec, Point2D::new(0.0, t))
            .edge(Top, w)?
            .edge(Right, h - 2.0 * t)?
            .edge(Bottom, w)?
            .edge(Left, h - 2.0 * t)?
            .finish(),

        PanelKind::StackableFront => {
            let lip = w / 10.0;
            OutlineBuilder::new(spec, Point2D::ZERO)
                .stack_lip(w, lip, t)
                .edge(Right, h - t)?
                .line(0.0, 3.0 * t)
                .stack_lip(-w, lip, t)
                .line(0.0, -3.0 * t)
                .edge(Left, h - t)?
                .finish()
        }

        PanelKind::SideWithoutTop => OutlineBuilder::new(spec, Point2D::new(-t, 0.0))
            .edge(Top, w - 2.0 * t)?
            .edge(Right, h - t)?
            .edge(Bottom, w)?
            .edge(Left, h - t)?
            .finish(),

        PanelKind::SideWithTop => OutlineBuilder::new(spec, Point2D::new(t, t))
            .edge(Top, w)?
            .edge(Right, h - 2.0 * t)?
            .edge(Bottom, w)?
            .edge(Left, h - 2.0 * t)?
            .finish(),

        PanelKind::StackableSide => {
            let lip = w / 10.0;
            let run = w - 2.0 * t;
            OutlineBuilder::new(spec, Point2D::ZERO)
                .stack_lip(run, lip, t)
                .edge(Right, h - t)?
                .line(0.0, 3.0 * t)
                .stack_lip(-run, lip, t)
                .line(0.0, -3.0 * t)
                .edge(Left, h - t)?
                .finish()
        }

        PanelKind::Layer => OutlineBuilder::new(spec, Point2D::new(-t, 0.0))
            .edge(Top, w - 2.0 * t)?
            .edge(Right, h - t)?
            .edge(Bottom, w - 2.0 * t)?
            .edge(Left, h - t)?
            .finish(),

        PanelKind::Lid(part) => {
            let inset = match part {
                LidPart::Inner => 2.0 * t,
                LidPart::Outer => 0.0,
            };
            OutlineBuilder::new(spec, Point2D::ZERO)
                .edge(Top, w - inset)?
                .edge(Right, h - inset)?
                .edge(Bottom, w - inset)?
                .edge(Left, h - inset)?
                .finish()
        }
    };

    Ok(outline)
}

/// Outline of `spec` placed on the sheet as a cut shape.
pub fn panel_shape(id: impl Into<String>, spec: &PanelSpec) -> BoxResult<OutputShape> {
    let outline = build_outline(spec)?;
    Ok(OutputShape {
        id: id.into(),
        placement: spec.placement,
        polygon: outline.translated(spec.placement),
        style: StyleHint::Cut,
    })
}
