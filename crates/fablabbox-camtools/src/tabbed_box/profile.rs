//! Tab profile generation for a single edge.
//!
//! A profile is computed in the canonical top-edge frame: it advances along
//! +x and tabs protrude toward -y, away from the panel body.

use tracing::debug;

use super::rotate::rotate_profile;
use super::types::{EdgeDirection, EdgeStyle, JointSettings, Point2D, TabProfile};
use crate::error::{BoxError, BoxResult};

/// Tabs narrower than this multiple of the thickness break at the joint.
pub const MIN_TAB_TO_THICKNESS: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabParameters {
    pub edge_length: f32,
    pub target_tab_width: f32,
    pub thickness: f32,
    pub backlash: f32,
    pub inverted: bool,
    pub first_up: bool,
    pub last_up: bool,
    pub cut_off: bool,
}

impl TabParameters {
    pub fn new(edge_length: f32, joint: &JointSettings, style: EdgeStyle) -> Self {
        Self {
            edge_length,
            target_tab_width: joint.tab_width,
            thickness: joint.thickness,
            backlash: joint.backlash,
            inverted: style.inverted(),
            first_up: style.first_up(),
            last_up: style.last_up(),
            cut_off: style.cut_off(),
        }
    }
}

/// Number of segments and their real width for an edge.
///
/// The count is the largest odd number of segments no narrower than
/// `tab_width`, so both ends of an edge fall in the same phase.
pub fn tab_count(length: f32, tab_width: f32, thickness: f32) -> BoxResult<(usize, f32)> {
    let fitting = (length / tab_width).floor();
    if !fitting.is_finite() || fitting < 1.0 {
        return Err(BoxError::EdgeTooShort { length, tab_width });
    }

    let mut count = fitting as usize;
    if count % 2 == 0 {
        count -= 1;
    }

    let real_width = length / count as f32;
    let limit = thickness * MIN_TAB_TO_THICKNESS;
    if real_width <= limit {
        return Err(BoxError::InsufficientTabWidth {
            computed: real_width,
            limit,
        });
    }

    debug!(length, count, real_width, "tab count");
    Ok((count, real_width))
}

/// Build the canonical profile for one edge.
pub fn generate_tabs(params: &TabParameters) -> BoxResult<TabProfile> {
    let (count, width) = tab_count(params.edge_length, params.target_tab_width, params.thickness)?;
    let t = params.thickness;
    let backlash = params.backlash;
    let cut = if params.cut_off { t } else { 0.0 };

    // Non-inverted edges leave the baseline toward -y; inverted ones toward +y.
    let out = if params.inverted { t } else { -t };
    // Protruding segments grow by the backlash, recessed ones shrink.
    let grow = if params.inverted { -backlash } else { backlash };

    let mut path = Vec::with_capacity(count * 3);
    for i in 1..=count {
        let first = i == 1;
        let last = i == count;

        if i % 2 == 1 {
            if !(first && params.first_up) {
                path.push(Point2D::new(0.0, out));
            }

            if first && last {
                // A lone segment is both ends: both corners cut, half backlash
                // on each side cancels out.
                path.push(Point2D::new(width - 2.0 * cut, 0.0));
            } else if first || last {
                path.push(Point2D::new(width - cut + 0.5 * grow, 0.0));
            } else {
                path.push(Point2D::new(width + grow, 0.0));
            }

            if !(last && params.last_up) {
                path.push(Point2D::new(0.0, -out));
            }
        } else {
            path.push(Point2D::new(width - grow, 0.0));
        }
    }

    Ok(path)
}

/// Profile for `length` drawn on the `direction` side of a panel.
pub fn edge_profile(
    length: f32,
    joint: &JointSettings,
    style: EdgeStyle,
    direction: EdgeDirection,
) -> BoxResult<TabProfile> {
    let params = TabParameters::new(length, joint, style);
    Ok(rotate_profile(generate_tabs(&params)?, direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(length: f32, tab: f32, t: f32, backlash: f32, style: EdgeStyle) -> TabParameters {
        TabParameters::new(
            length,
            &JointSettings {
                thickness: t,
                tab_width: tab,
                backlash,
            },
            style,
        )
    }

    fn lateral(profile: &[Point2D]) -> Vec<f32> {
        profile.iter().filter(|p| p.x != 0.0).map(|p| p.x).collect()
    }

    fn perpendicular(profile: &[Point2D]) -> Vec<f32> {
        profile.iter().filter(|p| p.y != 0.0).map(|p| p.y).collect()
    }

    #[test]
    fn test_tab_count_is_odd() {
        for (length, tab) in [(96.0, 10.0), (100.0, 10.0), (50.0, 7.0), (31.0, 15.0), (12.0, 10.0)] {
            let (count, width) = tab_count(length, tab, 1.0).unwrap();
            assert_eq!(count % 2, 1, "count for {length}/{tab}");
            assert!(count >= 1);
            assert!((width * count as f32 - length).abs() < 1e-3);
        }
        assert_eq!(tab_count(100.0, 10.0, 1.0).unwrap().0, 9);
    }

    #[test]
    fn test_edge_shorter_than_tab() {
        let err = tab_count(8.0, 10.0, 1.0).unwrap_err();
        assert!(matches!(err, BoxError::EdgeTooShort { .. }));
    }

    #[test]
    fn test_width_limit_boundary() {
        // 9 / 3 = 3 segments of exactly 1.5 * 2
        let err = tab_count(9.0, 3.0, 2.0).unwrap_err();
        match err {
            BoxError::InsufficientTabWidth { computed, limit } => {
                assert_eq!(computed, 3.0);
                assert_eq!(limit, 3.0);
            }
            other => panic!("unexpected error {other:?}"),
        }

        let (count, width) = tab_count(9.3, 3.0, 2.0).unwrap();
        assert_eq!(count, 3);
        assert!(width > 3.0);
    }

    #[test]
    fn test_reference_edge() {
        let p = params(96.0, 10.0, 3.0, 0.1, EdgeStyle::Outward);
        let profile = generate_tabs(&p).unwrap();

        let lat = lateral(&profile);
        assert_eq!(lat.len(), 9);
        assert!((lat.iter().sum::<f32>() - 96.0).abs() < 1e-3);
        assert!((lat[0] - (96.0 / 9.0 + 0.05)).abs() < 1e-4);
        assert!((lat[1] - (96.0 / 9.0 - 0.1)).abs() < 1e-4);
        assert!((lat[2] - (96.0 / 9.0 + 0.1)).abs() < 1e-4);

        let perp = perpendicular(&profile);
        assert_eq!(perp.len(), 8);
        assert!(perp.iter().sum::<f32>().abs() < 1e-5);
        // The walk starts on the first tab, so it first drops to the baseline.
        assert_eq!(profile[1], Point2D::new(0.0, 3.0));
    }

    #[test]
    fn test_flush_edge_steps_out_on_every_tab() {
        let p = params(96.0, 10.0, 3.0, 0.0, EdgeStyle::OutwardFlush);
        let profile = generate_tabs(&p).unwrap();
        assert_eq!(perpendicular(&profile).len(), 10);
        assert_eq!(profile[0], Point2D::new(0.0, -3.0));
        assert_eq!(*profile.last().unwrap(), Point2D::new(0.0, 3.0));
    }

    #[test]
    fn test_inverted_edge_recesses_first() {
        let p = params(50.0, 10.0, 3.0, 0.2, EdgeStyle::Inward);
        let profile = generate_tabs(&p).unwrap();
        // 5 segments of 10 mm; ends are gaps shrunk by half the backlash.
        assert!((profile[0].x - 9.9).abs() < 1e-4);
        assert_eq!(profile[1], Point2D::new(0.0, -3.0));
        assert!((profile[2].x - 10.2).abs() < 1e-4);
        assert!((lateral(&profile).iter().sum::<f32>() - 50.0).abs() < 1e-3);
        assert!(perpendicular(&profile).iter().sum::<f32>().abs() < 1e-5);
    }

    #[test]
    fn test_cut_off_shortens_end_segments() {
        let p = params(50.0, 10.0, 3.0, 0.0, EdgeStyle::InwardCutOff);
        let profile = generate_tabs(&p).unwrap();
        let lat = lateral(&profile);
        assert!((lat[0] - 7.0).abs() < 1e-4);
        assert!((lat[lat.len() - 1] - 7.0).abs() < 1e-4);
        assert!((lat.iter().sum::<f32>() - 44.0).abs() < 1e-3);
    }

    #[test]
    fn test_backlash_widens_tabs_and_narrows_gaps() {
        let p = params(50.0, 10.0, 3.0, 0.4, EdgeStyle::Outward);
        let lat = lateral(&generate_tabs(&p).unwrap());
        // tab, gap, tab, gap, tab
        assert!((lat[0] - 10.2).abs() < 1e-4);
        assert!((lat[1] - 9.6).abs() < 1e-4);
        assert!((lat[2] - 10.4).abs() < 1e-4);
        assert!((lat[3] - 9.6).abs() < 1e-4);
        assert!((lat[4] - 10.2).abs() < 1e-4);

        let p = params(50.0, 10.0, 3.0, 0.4, EdgeStyle::Inward);
        let lat = lateral(&generate_tabs(&p).unwrap());
        // gap, tab, gap, tab, gap
        assert!((lat[0] - 9.8).abs() < 1e-4);
        assert!((lat[1] - 10.4).abs() < 1e-4);
        assert!((lat[2] - 9.6).abs() < 1e-4);
    }

    #[test]
    fn test_single_segment_edge_keeps_its_length() {
        // 20 mm with 10 mm tabs fits a single 20 mm segment.
        for style in [
            EdgeStyle::Outward,
            EdgeStyle::OutwardFlush,
            EdgeStyle::Inward,
            EdgeStyle::InwardCutOff,
        ] {
            let p = params(20.0, 10.0, 3.0, 0.1, style);
            let profile = generate_tabs(&p).unwrap();
            let expected = if style.cut_off() { 14.0 } else { 20.0 };
            assert!(
                (lateral(&profile).iter().sum::<f32>() - expected).abs() < 1e-4,
                "{style:?}"
            );
            assert!(perpendicular(&profile).iter().sum::<f32>().abs() < 1e-5);
        }
    }

    #[test]
    fn test_lateral_sum_over_many_lengths() {
        for length in [12.0, 20.0, 29.9, 30.0, 47.0, 64.0, 96.0, 133.0, 250.0] {
            for style in [EdgeStyle::Outward, EdgeStyle::InwardCutOff] {
                let p = params(length, 10.0, 3.0, 0.15, style);
                let sum: f32 = lateral(&generate_tabs(&p).unwrap()).iter().sum();
                let expected = if style.cut_off() { length - 6.0 } else { length };
                assert!((sum - expected).abs() < 1e-3, "{length} {style:?}: {sum}");
            }
        }
    }

    #[test]
    fn test_errors_propagate_from_generator() {
        let p = params(20.0, 10.0, 15.0, 0.0, EdgeStyle::Outward);
        assert!(matches!(
            generate_tabs(&p),
            Err(BoxError::InsufficientTabWidth { .. })
        ));
    }
}
