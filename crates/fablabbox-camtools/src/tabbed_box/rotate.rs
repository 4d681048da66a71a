//! Maps canonical top-edge profiles onto the other sides of a panel.

use super::types::{EdgeDirection, Point2D, TabProfile};

/// Rotate a single delta onto `direction`.
pub fn rotate_point(p: Point2D, direction: EdgeDirection) -> Point2D {
    match direction {
        EdgeDirection::Top => p,
        EdgeDirection::Right => Point2D::new(-p.y, p.x),
        EdgeDirection::Bottom => Point2D::new(-p.x, -p.y),
        EdgeDirection::Left => Point2D::new(p.y, -p.x),
    }
}

/// Rotate every delta of a profile onto `direction`.
pub fn rotate_profile(profile: TabProfile, direction: EdgeDirection) -> TabProfile {
    if direction == EdgeDirection::Top {
        return profile;
    }
    profile
        .into_iter()
        .map(|p| rotate_point(p, direction))
        .collect()
}
