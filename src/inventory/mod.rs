//! The in-memory product collection.
//!
//! Entries are keyed by product id and kept in insertion order. That order
//! is what `list` yields and what decides which product `search` returns
//! when several share a name.

use indexmap::IndexMap;

use crate::domain::Product;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    products: IndexMap<String, Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `product` under its own id, replacing any entry already there.
    ///
    /// A replaced entry keeps its position. Returns the product it replaced.
    pub fn add(&mut self, product: Product) -> Option<Product> {
        self.products.insert(product.id().to_string(), product)
    }

    /// Removes the product with this id, if any.
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        self.products.shift_remove(id)
    }

    /// Sets quantity and price of an existing product.
    ///
    /// Returns `None` and leaves the inventory untouched when `id` is unknown.
    pub fn update(&mut self, id: &str, quantity: u32, price: f64) -> Option<&Product> {
        let product = self.products.get_mut(id)?;
        product.set_quantity(quantity);
        product.set_price(price);
        Some(product)
    }

    /// First product whose id is exactly `term` or whose name matches it
    /// ignoring case.
    pub fn search(&self, term: &str) -> Option<&Product> {
        let folded = term.to_lowercase();
        self.products
            .values()
            .find(|product| product.id() == term || product.name().to_lowercase() == folded)
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn list(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Extend<Product> for Inventory {
    fn extend<I: IntoIterator<Item = Product>>(&mut self, iter: I) {
        for product in iter {
            self.add(product);
        }
    }
}

impl FromIterator<Product> for Inventory {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut inventory = Self::new();
        inventory.extend(iter);
        inventory
    }
}
