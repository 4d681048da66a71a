//! Type definitions for the tabbed box generator

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BoxError;

/// A point or a displacement on the sheet, in millimetres. y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl std::ops::Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Point2D {
    fn add_assign(&mut self, rhs: Point2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Ordered deltas describing a walk along one edge.
pub type TabProfile = Vec<Point2D>;

/// Side of a panel a profile is drawn on. Outlines are walked top, right,
/// bottom, left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeDirection {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl From<i32> for EdgeDirection {
    fn from(value: i32) -> Self {
        match value.rem_euclid(4) {
            1 => EdgeDirection::Right,
            2 => EdgeDirection::Bottom,
            3 => EdgeDirection::Left,
            _ => EdgeDirection::Top,
        }
    }
}

impl EdgeDirection {
    pub const ALL: [EdgeDirection; 4] = [
        EdgeDirection::Top,
        EdgeDirection::Right,
        EdgeDirection::Bottom,
        EdgeDirection::Left,
    ];

    /// The next side clockwise on the sheet (a quarter turn of the profile).
    pub fn next(self) -> Self {
        EdgeDirection::from(self as i32 + 1)
    }
}

/// How the tabs of one edge are shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeStyle {
    /// Odd segments protrude. The walk starts and ends on a raised tab, so
    /// two such edges share their corner tab.
    Outward,
    /// Odd segments protrude; the walk starts and ends on the baseline.
    OutwardFlush,
    /// Even segments protrude. The walk starts and ends recessed, leaving
    /// the corner to the mating panel.
    Inward,
    /// As [`EdgeStyle::Inward`], with both end segments shortened by one
    /// thickness where a front/back already covers the corner.
    InwardCutOff,
}

impl EdgeStyle {
    pub fn inverted(self) -> bool {
        matches!(self, EdgeStyle::Inward | EdgeStyle::InwardCutOff)
    }

    pub fn first_up(self) -> bool {
        !matches!(self, EdgeStyle::OutwardFlush)
    }

    pub fn last_up(self) -> bool {
        !matches!(self, EdgeStyle::OutwardFlush)
    }

    pub fn cut_off(self) -> bool {
        matches!(self, EdgeStyle::InwardCutOff)
    }
}

/// Material and joint settings shared by every edge of a box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointSettings {
    pub thickness: f32,
    /// Target tab width; the real width is stretched so the tab count is odd.
    pub tab_width: f32,
    /// Kerf compensation: protruding segments widen by it, recessed ones narrow.
    pub backlash: f32,
}

impl Default for JointSettings {
    fn default() -> Self {
        Self {
            thickness: 3.0,
            tab_width: 10.0,
            backlash: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LidPart {
    /// Flush-fit plate sitting inside the walls.
    Inner,
    /// Cover plate overlapping the full wall thickness.
    Outer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelKind {
    Bottom,
    Top,
    StackableBottom,
    FrontWithTop,
    FrontWithoutTop,
    StackableFront,
    SideWithTop,
    SideWithoutTop,
    StackableSide,
    Layer,
    Lid(LidPart),
}

/// One panel to cut. `width` runs along the sheet x axis, `height` along y
/// (depth for horizontal panels, height for walls and layers).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub kind: PanelKind,
    pub width: f32,
    pub height: f32,
    pub joint: JointSettings,
    pub placement: Point2D,
}

/// A closed outline in panel-local coordinates: a start point followed by
/// deltas that walk back to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelOutline {
    pub start: Point2D,
    pub deltas: TabProfile,
}

impl PanelOutline {
    /// Sum of all deltas; zero for a closed outline.
    pub fn drift(&self) -> Point2D {
        self.deltas
            .iter()
            .fold(Point2D::ZERO, |acc, delta| acc + *delta)
    }

    /// Vertices in panel-local coordinates, starting at `start`.
    pub fn points(&self) -> Vec<Point2D> {
        self.translated(Point2D::ZERO)
    }

    /// Vertices moved by `offset`. The closing vertex is not repeated.
    pub fn translated(&self, offset: Point2D) -> Vec<Point2D> {
        let mut cursor = self.start + offset;
        let mut points = Vec::with_capacity(self.deltas.len() + 1);
        points.push(cursor);
        let last = self.deltas.len().saturating_sub(1);
        for (i, delta) in self.deltas.iter().enumerate() {
            cursor += *delta;
            if i == last && closes_on(cursor, points[0]) {
                break;
            }
            points.push(cursor);
        }
        points
    }
}

fn closes_on(a: Point2D, b: Point2D) -> bool {
    (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
}

/// Distances of internal dividers from the near wall.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DividerOffsets {
    /// Dividers parallel to the front, measured along the depth.
    pub horizontal: Vec<f32>,
    /// Dividers parallel to the sides, measured along the width.
    pub vertical: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxConfiguration {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub thickness: f32,
    pub tab_width: f32,
    pub backlash: f32,
    pub has_lid: bool,
    pub is_stackable: bool,
    /// Gap left between the bottom and the lower edge of the dividers.
    pub layer_offset: f32,
    pub divider_offsets: DividerOffsets,
}

impl Default for BoxConfiguration {
    fn default() -> Self {
        Self {
            width: 100.0,
            depth: 80.0,
            height: 50.0,
            thickness: 3.0,
            tab_width: 10.0,
            backlash: 0.1,
            has_lid: false,
            is_stackable: false,
            layer_offset: 0.0,
            divider_offsets: DividerOffsets::default(),
        }
    }
}

impl BoxConfiguration {
    pub fn joint(&self) -> JointSettings {
        JointSettings {
            thickness: self.thickness,
            tab_width: self.tab_width,
            backlash: self.backlash,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoxVariant {
    /// Open box without a lid.
    Open,
    /// Open box with loose flat lid plates.
    OpenWithCover,
    /// Open box with a stacking lip and lid plates.
    OpenStackable,
    /// Closed box with a tabbed top.
    ClosedWithTop,
}

impl BoxVariant {
    /// Applies the configuration's lid and stacking flags to an open box.
    pub fn with_flags(self, has_lid: bool, is_stackable: bool) -> Self {
        match self {
            BoxVariant::Open if is_stackable => BoxVariant::OpenStackable,
            BoxVariant::Open if has_lid => BoxVariant::OpenWithCover,
            BoxVariant::OpenWithCover if is_stackable => BoxVariant::OpenStackable,
            other => other,
        }
    }

    pub fn has_lid(self) -> bool {
        matches!(self, BoxVariant::OpenWithCover | BoxVariant::OpenStackable)
    }

    pub fn is_stackable(self) -> bool {
        self == BoxVariant::OpenStackable
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BoxVariant::Open => "open",
            BoxVariant::OpenWithCover => "open-with-cover",
            BoxVariant::OpenStackable => "open-stackable",
            BoxVariant::ClosedWithTop => "closed-with-top",
        }
    }
}

impl FromStr for BoxVariant {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(BoxVariant::Open),
            "open-with-cover" => Ok(BoxVariant::OpenWithCover),
            "open-stackable" => Ok(BoxVariant::OpenStackable),
            "closed-with-top" => Ok(BoxVariant::ClosedWithTop),
            other => Err(BoxError::UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for BoxVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleHint {
    /// Structural outline of a panel.
    Cut,
    /// Cut-through opening or notch inside a panel.
    Hole,
}

/// A closed polygon ready for the renderer, in sheet coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputShape {
    pub id: String,
    /// Sheet offset of the panel-local origin.
    pub placement: Point2D,
    pub polygon: Vec<Point2D>,
    pub style: StyleHint,
}

impl OutputShape {
    /// Axis-aligned bounds as (min, max).
    pub fn bounds(&self) -> (Point2D, Point2D) {
        let mut min = Point2D::new(f32::INFINITY, f32::INFINITY);
        let mut max = Point2D::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        for p in &self.polygon {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }
}
