//! Pure snap-zone geometry for drag-release window placement.
//!
//! Classification is stateless: given a window rectangle and the measured
//! desktop box it answers which zone, if any, the window would lock into.
//! Corners win over sides, sides win over the full-top zone.

use serde::{Deserialize, Serialize};

use crate::model::{DesktopBox, WindowRect};

/// Proximity threshold (px) between a window edge and a desktop-box edge.
pub const SNAP_THRESHOLD: i32 = 32;

/// Named regions a dragged window can lock into near a desktop edge/corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapZone {
    Left,
    Right,
    Top,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl SnapZone {
    /// Fractional rectangle of the desktop box this zone occupies, as
    /// `(x, y, w, h)` factors.
    pub const fn fraction(self) -> (f32, f32, f32, f32) {
        match self {
            Self::Left => (0.0, 0.0, 0.5, 1.0),
            Self::Right => (0.5, 0.0, 0.5, 1.0),
            Self::Top => (0.0, 0.0, 1.0, 1.0),
            Self::TopLeft => (0.0, 0.0, 0.5, 0.5),
            Self::TopRight => (0.5, 0.0, 0.5, 0.5),
            Self::BottomLeft => (0.0, 0.5, 0.5, 0.5),
            Self::BottomRight => (0.5, 0.5, 0.5, 0.5),
        }
    }

    /// Target pixel rectangle for this zone scaled to `desktop`.
    pub fn target_rect(self, desktop: DesktopBox) -> WindowRect {
        let (fx, fy, fw, fh) = self.fraction();
        WindowRect {
            x: (desktop.width as f32 * fx) as i32,
            y: (desktop.height as f32 * fy) as i32,
            w: (desktop.width as f32 * fw) as i32,
            h: (desktop.height as f32 * fh) as i32,
        }
    }
}

/// Classifies `rect` against the edges of `desktop`.
///
/// Returns `None` when no edge is within `threshold`, and also when the
/// desktop box has no extent yet (unrendered container).
pub fn classify(rect: WindowRect, desktop: DesktopBox, threshold: i32) -> Option<SnapZone> {
    if desktop.is_empty() {
        return None;
    }

    let near_left = rect.x <= threshold;
    let near_right = rect.right() >= desktop.width - threshold;
    let near_top = rect.y <= threshold;
    let near_bottom = rect.bottom() >= desktop.height - threshold;

    if near_left && near_top {
        Some(SnapZone::TopLeft)
    } else if near_right && near_top {
        Some(SnapZone::TopRight)
    } else if near_left && near_bottom {
        Some(SnapZone::BottomLeft)
    } else if near_right && near_bottom {
        Some(SnapZone::BottomRight)
    } else if near_left {
        Some(SnapZone::Left)
    } else if near_right {
        Some(SnapZone::Right)
    } else if near_top {
        Some(SnapZone::Top)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DESKTOP: DesktopBox = DesktopBox {
        width: 1920,
        height: 1080,
    };

    fn rect(x: i32, y: i32) -> WindowRect {
        WindowRect {
            x,
            y,
            w: 800,
            h: 600,
        }
    }

    #[test]
    fn corners_take_priority_over_sides() {
        assert_eq!(
            classify(rect(5, 5), DESKTOP, SNAP_THRESHOLD),
            Some(SnapZone::TopLeft)
        );
        assert_eq!(
            classify(rect(1890 - 800, 10), DESKTOP, SNAP_THRESHOLD),
            Some(SnapZone::TopRight)
        );
        assert_eq!(
            classify(rect(0, 1080 - 600), DESKTOP, SNAP_THRESHOLD),
            Some(SnapZone::BottomLeft)
        );
        assert_eq!(
            classify(rect(1920 - 800, 1080 - 600), DESKTOP, SNAP_THRESHOLD),
            Some(SnapZone::BottomRight)
        );
    }

    #[test]
    fn sides_match_when_only_one_edge_is_close() {
        assert_eq!(
            classify(rect(10, 300), DESKTOP, SNAP_THRESHOLD),
            Some(SnapZone::Left)
        );
        assert_eq!(
            classify(rect(1920 - 800 - 10, 300), DESKTOP, SNAP_THRESHOLD),
            Some(SnapZone::Right)
        );
        assert_eq!(
            classify(rect(700, 8), DESKTOP, SNAP_THRESHOLD),
            Some(SnapZone::Top)
        );
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(
            classify(rect(SNAP_THRESHOLD, 400), DESKTOP, SNAP_THRESHOLD),
            Some(SnapZone::Left)
        );
        assert_eq!(
            classify(rect(SNAP_THRESHOLD + 1, 400), DESKTOP, SNAP_THRESHOLD),
            None
        );
    }

    #[test]
    fn interior_windows_do_not_snap() {
        assert_eq!(classify(rect(500, 200), DESKTOP, SNAP_THRESHOLD), None);
    }

    #[test]
    fn degenerate_desktop_box_never_classifies() {
        let unrendered = DesktopBox {
            width: 0,
            height: 0,
        };
        assert_eq!(classify(rect(0, 0), unrendered, SNAP_THRESHOLD), None);
    }

    #[test]
    fn zone_targets_scale_with_the_desktop_box() {
        assert_eq!(
            SnapZone::TopLeft.target_rect(DESKTOP),
            WindowRect {
                x: 0,
                y: 0,
                w: 960,
                h: 540
            }
        );
        assert_eq!(
            SnapZone::Right.target_rect(DESKTOP),
            WindowRect {
                x: 960,
                y: 0,
                w: 960,
                h: 1080
            }
        );
        assert_eq!(
            SnapZone::Top.target_rect(DESKTOP),
            WindowRect {
                x: 0,
                y: 0,
                w: 1920,
                h: 1080
            }
        );
        assert_eq!(
            SnapZone::BottomRight.target_rect(DESKTOP),
            WindowRect {
                x: 960,
                y: 540,
                w: 960,
                h: 540
            }
        );
    }
}
