//! # fablabbox CAM tools
//!
//! Generates laser-cuttable outlines for finger-jointed boxes.
//!
//! - **Tab profiles**: odd tab counts, kerf compensation and corner cut-offs
//!   for a single edge, rotated onto any side of a panel
//! - **Panels**: bottoms, tops, fronts, sides, stackable walls, divider
//!   layers and lid plates as closed outlines
//! - **Slot holes**: cut-throughs phase-locked with the tabs they receive
//! - **Layout**: a fixed grid placing every shape on the sheet
//!
//! Requests load from JSON or TOML via [`BoxRequest`]; [`TabbedBoxMaker`]
//! turns one into a list of [`OutputShape`]s for the renderer.

pub mod config;
pub mod error;
pub mod tabbed_box;

pub use config::BoxRequest;
pub use error::{BoxError, BoxResult, ConfigError, ConfigResult};
pub use tabbed_box::{
    BoxConfiguration, BoxVariant, DividerOffsets, EdgeDirection, EdgeStyle, JointSettings,
    LayoutPlan, LidPart, OutputShape, PanelKind, PanelSpec, Point2D, StyleHint, TabbedBoxMaker,
};
