//! Straight-line geometry between two contacts and measurement formatting.

use crate::model::{ContactPoint, DisplayMode};

/// Assumed physical pixel density. There is no good way of knowing the real
/// DPI — devices report 96 but most sit around 144, so we just use that.
pub const ASSUMED_DPI: f64 = 144.0;

/// Placement of a spark between two contacts: the anchor is always the
/// geometrically left endpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparkTransform {
    pub anchor: ContactPoint,
    /// Euclidean distance between the endpoints, full precision.
    pub length: f64,
    /// Rotation in degrees. Not reduced into [0, 360): a horizontal pair
    /// yields exactly 360° and oblique pairs fall in (270°, 450°). CSS
    /// `rotate()` is modular, so rendering is unaffected either way.
    pub angle_deg: f64,
}

/// Computes length and rotation for the spark spanning `p1` to `p2`.
///
/// The pair is canonicalized first: when `p1` is to the right of `p2` the
/// endpoints are swapped, so the left point anchors the spark. Two points
/// sharing an x coordinate keep their given order and get a vertical angle:
/// 90° when `p2` is below `p1` (screen coordinates, y grows downward),
/// 270° when above.
pub fn compute_transform(p1: ContactPoint, p2: ContactPoint) -> SparkTransform {
    let (a, b) = if p1.x > p2.x { (p2, p1) } else { (p1, p2) };

    let length = (b.x - a.x).hypot(b.y - a.y);

    let angle_deg = if a.x == b.x {
        if b.y > a.y { 90.0 } else { 270.0 }
    } else {
        let mut angle = 180.0 + ((b.y - a.y) / (b.x - a.x)).atan().to_degrees();
        // After the swap b is always the right endpoint.
        if b.x > a.x {
            angle += 180.0;
        }
        angle
    };

    SparkTransform {
        anchor: a,
        length,
        angle_deg,
    }
}

/// Label text for a spark of the given pixel length under the given mode.
pub fn format_measurement(length: f64, mode: DisplayMode) -> String {
    match mode {
        DisplayMode::Sparky => String::new(),
        DisplayMode::Pixels => format!("{length:.0}px"),
        DisplayMode::Centimeters => format!("{:.2}cm", length / ASSUMED_DPI * 2.54),
        DisplayMode::Inches => format!("{:.2}\u{2033}", length / ASSUMED_DPI),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> ContactPoint {
        ContactPoint { x, y }
    }

    #[test]
    fn length_is_euclidean_distance() {
        let t = compute_transform(pt(0.0, 0.0), pt(3.0, 4.0));
        assert_eq!(t.length, 5.0);
    }

    #[test]
    fn vertical_pairs_point_up_or_down() {
        let down = compute_transform(pt(5.0, 5.0), pt(5.0, 10.0));
        assert_eq!(down.angle_deg, 90.0);
        assert_eq!(down.length, 5.0);
        assert_eq!(down.anchor, pt(5.0, 5.0));

        let up = compute_transform(pt(5.0, 10.0), pt(5.0, 5.0));
        assert_eq!(up.angle_deg, 270.0);
        assert_eq!(up.length, 5.0);
    }

    #[test]
    fn horizontal_pair_is_a_full_turn() {
        // 180 + atan(0) + 180; left untouched rather than folded to 0.
        let t = compute_transform(pt(0.0, 0.0), pt(10.0, 0.0));
        assert_eq!(t.angle_deg, 360.0);
        assert_eq!(t.length, 10.0);
    }

    #[test]
    fn anchor_is_the_left_endpoint_regardless_of_order() {
        let forward = compute_transform(pt(2.0, 1.0), pt(9.0, 6.0));
        let reversed = compute_transform(pt(9.0, 6.0), pt(2.0, 1.0));
        assert_eq!(forward, reversed);
        assert_eq!(forward.anchor, pt(2.0, 1.0));
    }

    #[test]
    fn measurements_follow_the_active_mode() {
        assert_eq!(format_measurement(144.0, DisplayMode::Inches), "1.00\u{2033}");
        assert_eq!(format_measurement(144.0, DisplayMode::Centimeters), "2.54cm");
        assert_eq!(format_measurement(100.0, DisplayMode::Pixels), "100px");
        assert_eq!(format_measurement(100.0, DisplayMode::Sparky), "");
    }
}
