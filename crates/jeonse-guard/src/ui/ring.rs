use jeonse_core::RingChart;
use std::f64::consts::{FRAC_PI_2, TAU};

const ANGULAR_STEPS: usize = 360;
const RADIAL_STEPS: usize = 8;

/// Canvas coordinates of the ring, split by segment. The first segment
/// starts at twelve o'clock and runs clockwise.
#[derive(Debug, Default)]
pub(super) struct RingPoints {
    pub(super) filled: Vec<(f64, f64)>,
    pub(super) track: Vec<(f64, f64)>,
}

pub(super) fn ring_points(chart: &RingChart) -> RingPoints {
    let filled_fraction = chart.filled_fraction();
    let hole = chart.hole.clamp(0.0, 1.0);
    let mut points = RingPoints::default();
    for step in 0..ANGULAR_STEPS {
        let turn = (step as f64 + 0.5) / ANGULAR_STEPS as f64;
        let angle = FRAC_PI_2 - turn * TAU;
        let (sin, cos) = angle.sin_cos();
        let bucket = if turn < filled_fraction {
            &mut points.filled
        } else {
            &mut points.track
        };
        for ring in 0..=RADIAL_STEPS {
            let radius = hole + (1.0 - hole) * ring as f64 / RADIAL_STEPS as f64;
            bucket.push((radius * cos, radius * sin));
        }
    }
    points
}
