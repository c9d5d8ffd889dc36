//! Pure calculations behind the jeonse ratio calculator.
//!
//! Nothing in this crate performs I/O. The terminal front-end and the
//! one-shot JSON mode both call into these functions.

pub mod assessment;
pub mod chart;
pub mod color;
pub mod format;
pub mod ratio;
pub mod risk;
pub mod search;

pub use assessment::{assess, Assessment};
pub use chart::{build_ring_chart, RingAnnotation, RingChart, RingSegment};
pub use color::HexColor;
pub use format::{format_ratio, format_thousands};
pub use ratio::{compute_ratio, PriceInput};
pub use risk::{classify_risk, RiskLevel};
pub use search::{build_search_url, SearchEndpoint, NAVER_LAND_SEARCH};
