use crate::chart::{build_ring_chart, RingChart};
use crate::color::HexColor;
use crate::ratio::PriceInput;
use crate::risk::{classify_risk, RiskLevel};
use serde::Serialize;

/// Everything one "compute" action produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub input: PriceInput,
    pub ratio: Option<f64>,
    pub risk: RiskLevel,
    pub label: &'static str,
    pub color: HexColor,
    pub background: HexColor,
    pub chart: RingChart,
}

impl Assessment {
    pub fn is_defined(&self) -> bool {
        self.ratio.is_some()
    }
}

pub fn assess(input: PriceInput) -> Assessment {
    let ratio = input.ratio();
    let risk = classify_risk(ratio);
    let color = risk.color();
    Assessment {
        input,
        ratio,
        risk,
        label: risk.label(),
        color,
        background: risk.background(),
        chart: build_ring_chart(ratio, color),
    }
}
