//! Proptest strategies for products and inventories.

use proptest::prelude::*;

use crate::domain::Product;
use crate::inventory::Inventory;

/// Text that exercises JSON escaping and non-ASCII case folding as well as
/// ordinary printable strings.
pub fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,12}",
        r#"["\\\n\t\x00\x1féÉßİ😀 ]{0,8}"#,
        "[a-cA-C]{1,3}",
    ]
}

pub fn price() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0f64..1.0, 0.0f64..1.0e12]
}

pub fn product() -> impl Strategy<Value = Product> {
    (text(), text(), any::<u32>(), price())
        .prop_map(|(id, name, quantity, price)| Product::new(id, name, quantity, price))
}

/// Inventories from empty up to a couple dozen products; duplicate ids
/// collapse the way `add` does.
pub fn inventory() -> impl Strategy<Value = Inventory> {
    prop::collection::vec(product(), 0..24).prop_map(Inventory::from_iter)
}
