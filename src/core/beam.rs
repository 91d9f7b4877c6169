//! Animated beam geometry
//!
//! A beam is a curved SVG path between two anchors, drawn twice: a faint
//! static stroke and a gradient stroke whose stops slide along the path.

use rand::Rng;
use rand::seq::SliceRandom;

/// Accent colours for decorative beams without a fixed gradient
pub const ACCENT_PALETTE: [&str; 8] = [
    "#3b82f6", "#8b5cf6", "#ec4899", "#10b981", "#f59e0b", "#06b6d4", "#6366f1", "#f43f5e",
];

/// Default upward bend of a beam, in px
pub const DEFAULT_CURVATURE: f64 = 0.0;

/// A position in SVG user space
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Quadratic path from `from` to `to`. The control point sits at the
/// horizontal midpoint, `curvature` px above the start point.
pub fn beam_path(from: Point, to: Point, curvature: f64) -> String {
    let mx = (from.x + to.x) / 2.0;
    format!(
        "M {},{} Q {},{} {},{}",
        from.x,
        from.y,
        mx,
        from.y - curvature,
        to.x,
        to.y
    )
}

/// Animation timing of a beam gradient, in seconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamTiming {
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Default for BeamTiming {
    fn default() -> Self {
        Self {
            delay_s: 0.0,
            duration_s: 5.0,
        }
    }
}

impl BeamTiming {
    pub fn with_delay(delay_s: f64) -> Self {
        Self {
            delay_s,
            ..Self::default()
        }
    }

    /// Delay drawn from [0, 2) and duration from [4, 6)
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            delay_s: rng.gen_range(0.0..2.0),
            duration_s: rng.gen_range(4.0..6.0),
        }
    }
}

/// Gradient endpoints of a beam. `reverse` flips the travel direction of the
/// gradient without touching the path itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamGradient {
    pub start: &'static str,
    pub stop: &'static str,
    pub reverse: bool,
}

impl BeamGradient {
    pub const fn new(start: &'static str, stop: &'static str) -> Self {
        Self {
            start,
            stop,
            reverse: false,
        }
    }

    pub const fn reversed(self) -> Self {
        Self {
            reverse: true,
            ..self
        }
    }

    /// `x1`/`x2` animation keyframes for the linear gradient, as
    /// `(x1 values, x2 values)` `values` attribute strings
    pub fn keyframes(&self) -> (&'static str, &'static str) {
        if self.reverse {
            ("90%;-10%", "100%;0%")
        } else {
            ("10%;110%", "0%;100%")
        }
    }

    /// Random start colour from the accent palette, paired with `stop`
    pub fn random_accent<R: Rng + ?Sized>(rng: &mut R, stop: &'static str) -> Self {
        let start = ACCENT_PALETTE.choose(rng).copied().unwrap_or(ACCENT_PALETTE[0]);
        Self::new(start, stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_straight_beam_path() {
        let path = beam_path(Point::new(0.0, 10.0), Point::new(100.0, 50.0), 0.0);
        assert_eq!(path, "M 0,10 Q 50,10 100,50");
    }

    #[test]
    fn test_curved_beam_path() {
        let path = beam_path(Point::new(10.0, 100.0), Point::new(30.0, 20.0), 40.0);
        assert_eq!(path, "M 10,100 Q 20,60 30,20");
    }

    #[test]
    fn test_negative_curvature_bends_down() {
        let path = beam_path(Point::new(0.0, 0.0), Point::new(10.0, 0.0), -15.0);
        assert_eq!(path, "M 0,0 Q 5,15 10,0");
    }

    #[test]
    fn test_fractional_coordinates() {
        let path = beam_path(Point::new(310.0, 70.0), Point::new(375.0, 210.0), 0.0);
        assert_eq!(path, "M 310,70 Q 342.5,70 375,210");
    }

    #[test]
    fn test_default_timing() {
        let timing = BeamTiming::default();
        assert_eq!(timing.delay_s, 0.0);
        assert_eq!(timing.duration_s, 5.0);
        assert_eq!(BeamTiming::with_delay(1.5).delay_s, 1.5);
    }

    #[test]
    fn test_random_timing_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let timing = BeamTiming::random(&mut rng);
            assert!((0.0..2.0).contains(&timing.delay_s));
            assert!((4.0..6.0).contains(&timing.duration_s));
        }
    }

    #[test]
    fn test_reverse_only_changes_keyframes() {
        let forward = BeamGradient::new("#8b5cf6", "#f59e0b");
        let backward = forward.reversed();
        assert_eq!(forward.start, backward.start);
        assert_eq!(forward.stop, backward.stop);
        assert_ne!(forward.keyframes(), backward.keyframes());
    }

    #[test]
    fn test_random_accent_from_palette() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let gradient = BeamGradient::random_accent(&mut rng, "#3b82f6");
            assert!(ACCENT_PALETTE.contains(&gradient.start));
            assert_eq!(gradient.stop, "#3b82f6");
        }
    }

    #[test]
    fn test_midpoint() {
        let mid = Point::new(0.0, 0.0).midpoint(&Point::new(10.0, 20.0));
        assert_eq!(mid, Point::new(5.0, 10.0));
    }
}
