use crate::color::HexColor;
use serde::{Deserialize, Serialize};

pub const SAFE_BELOW: f64 = 60.0;
pub const CAUTION_BELOW: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe,
    Caution,
    Danger,
    Unknown,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "Safe",
            RiskLevel::Caution => "Caution",
            RiskLevel::Danger => "Danger",
            RiskLevel::Unknown => "Unknown",
        }
    }

    pub fn color(&self) -> HexColor {
        match self {
            RiskLevel::Safe => HexColor::new(0x2e, 0xcc, 0x71),
            RiskLevel::Caution => HexColor::new(0xf1, 0xc4, 0x0f),
            RiskLevel::Danger => HexColor::new(0xe7, 0x4c, 0x3c),
            RiskLevel::Unknown => HexColor::new(0x7f, 0x8c, 0x8d),
        }
    }

    /// Pastel fill for the emphasis panel.
    pub fn background(&self) -> HexColor {
        match self {
            RiskLevel::Safe => HexColor::new(0xe8, 0xf8, 0xf2),
            RiskLevel::Caution => HexColor::new(0xff, 0xf4, 0xd6),
            RiskLevel::Danger => HexColor::new(0xff, 0xe6, 0xe6),
            RiskLevel::Unknown => HexColor::new(0xf0, 0xf0, 0xf0),
        }
    }
}

/// Bands are half-open: exactly 60.0 is `Caution`, exactly 80.0 is `Danger`.
/// There is no upper clamp.
pub fn classify_risk(ratio: Option<f64>) -> RiskLevel {
    let Some(ratio) = ratio else {
        return RiskLevel::Unknown;
    };
    if ratio < SAFE_BELOW {
        RiskLevel::Safe
    } else if ratio < CAUTION_BELOW {
        RiskLevel::Caution
    } else {
        RiskLevel::Danger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_without_ratio() {
        let level = classify_risk(None);
        assert_eq!(level, RiskLevel::Unknown);
        assert_eq!(level.label(), "Unknown");
        assert_eq!(level.color().to_string(), "#7f8c8d");
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(classify_risk(Some(0.0)).label(), "Safe");
        assert_eq!(classify_risk(Some(59.9)).label(), "Safe");
        assert_eq!(classify_risk(Some(60.0)).label(), "Caution");
        assert_eq!(classify_risk(Some(79.9)).label(), "Caution");
        assert_eq!(classify_risk(Some(80.0)).label(), "Danger");
        assert_eq!(classify_risk(Some(150.0)).label(), "Danger");
    }

    #[test]
    fn color_tables() {
        let table = [
            (RiskLevel::Safe, "#2ecc71", "#e8f8f2"),
            (RiskLevel::Caution, "#f1c40f", "#fff4d6"),
            (RiskLevel::Danger, "#e74c3c", "#ffe6e6"),
            (RiskLevel::Unknown, "#7f8c8d", "#f0f0f0"),
        ];
        for (level, color, background) in table {
            assert_eq!(level.color().to_string(), color);
            assert_eq!(level.background().to_string(), background);
        }
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&RiskLevel::Danger).expect("serialize");
        assert_eq!(json, "\"danger\"");
    }
}
