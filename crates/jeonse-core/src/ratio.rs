use serde::{Deserialize, Serialize};

/// The two amounts a user enters. Unsigned, so never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceInput {
    pub sale_price: u64,
    pub deposit: u64,
}

impl PriceInput {
    pub fn new(sale_price: u64, deposit: u64) -> Self {
        Self {
            sale_price,
            deposit,
        }
    }

    pub fn ratio(&self) -> Option<f64> {
        compute_ratio(self.deposit as f64, self.sale_price as f64)
    }
}

/// Deposit as a percentage of the sale price, rounded to one decimal place.
///
/// Returns `None` when `price` is zero, negative or NaN. Half-way values are
/// rounded away from zero.
pub fn compute_ratio(deposit: f64, price: f64) -> Option<f64> {
    if price.is_nan() || price <= 0.0 {
        return None;
    }
    Some(round_one_decimal(deposit / price * 100.0))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
