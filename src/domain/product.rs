use std::fmt;

use serde::{Deserialize, Serialize};

/// A single line item in the inventory.
///
/// `id` and `name` are fixed once the product is built; only the stock
/// level and the unit price can change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    quantity: u32,
    price: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }
}

impl fmt::Display for Product {
    /// Formats as `<id>: <name> - Quantity: <q>, Price: $<p>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - Quantity: {}, Price: ${}",
            self.id,
            self.name,
            self.quantity,
            format_price(self.price)
        )
    }
}

/// Shortest round-tripping decimal, always with a fractional digit.
///
/// Magnitudes in `[1e-3, 1e7)` and zero print plainly (`2.5`, `10.0`);
/// anything else uses an exponent with a `.0`-padded mantissa (`1.0E7`,
/// `1.23456789E8`, `1.0E-4`).
fn format_price(price: f64) -> String {
    if price.is_nan() {
        return "NaN".to_string();
    }
    if price.is_infinite() {
        return if price > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if price == 0.0 || (1e-3..1e7).contains(&price.abs()) {
        return format!("{price:?}");
    }

    let scientific = format!("{price:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    if mantissa.contains('.') {
        format!("{mantissa}E{exponent}")
    } else {
        format!("{mantissa}.0E{exponent}")
    }
}
