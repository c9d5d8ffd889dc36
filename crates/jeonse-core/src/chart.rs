//! Declarative description of the ratio ring (a two-slice donut).
//!
//! The description carries no rendering logic. A front-end turns it into
//! pixels, braille dots or anything else.

use crate::color::HexColor;
use crate::format::format_ratio_value;
use serde::Serialize;

pub const RING_HOLE: f64 = 0.7;
pub const RING_TRACK_COLOR: HexColor = HexColor::new(0xec, 0xf0, 0xf1);
pub const ANNOTATION_FONT_SIZE: u16 = 26;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingSegment {
    pub value: f64,
    pub color: HexColor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingAnnotation {
    pub text: String,
    pub color: HexColor,
    pub x: f64,
    pub y: f64,
    pub font_size: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingChart {
    pub segments: [RingSegment; 2],
    /// Inner radius as a fraction of the outer radius.
    pub hole: f64,
    pub show_legend: bool,
    pub show_slice_labels: bool,
    pub annotation: RingAnnotation,
}

impl RingChart {
    /// Share of the full turn painted by the first segment, clamped to `0..=1`.
    pub fn filled_fraction(&self) -> f64 {
        let fraction = self.segments[0].value / 100.0;
        if fraction.is_nan() {
            return 0.0;
        }
        fraction.clamp(0.0, 1.0)
    }
}

/// An undefined ratio draws as an empty ring labelled `0.0%`.
pub fn build_ring_chart(ratio: Option<f64>, color: HexColor) -> RingChart {
    let ratio = ratio.unwrap_or(0.0);
    RingChart {
        segments: [
            RingSegment {
                value: ratio,
                color,
            },
            RingSegment {
                value: 100.0 - ratio,
                color: RING_TRACK_COLOR,
            },
        ],
        hole: RING_HOLE,
        show_legend: false,
        show_slice_labels: false,
        annotation: RingAnnotation {
            text: format_ratio_value(ratio),
            color,
            x: 0.5,
            y: 0.5,
            font_size: ANNOTATION_FONT_SIZE,
        },
    }
}
