//! The session cart state container.
//!
//! A [`Cart`] holds at most one [`CartLine`] per product id, in first-added
//! order. Adding an already-present product increments its quantity; removing
//! deletes the whole line. Both are total functions: removing an absent id is
//! a no-op, and adding always succeeds. The total price is derived on demand,
//! never cached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Currency, Price, ProductId};

/// One cart entry: a product and the quantity selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog id of the product.
    pub product_id: ProductId,
    /// Product display name, copied at add time.
    pub name: String,
    /// Unit price, copied at add time.
    pub price: Price,
    /// Image URI, copied at add time.
    pub image: String,
    /// Category label, copied at add time.
    pub category: String,
    /// Selected quantity; at least 1 while the line exists.
    pub quantity: u32,
}

impl CartLine {
    fn new(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// The in-memory shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// If a line for the product already exists its quantity is incremented
    /// by 1 and all other fields are left unchanged; otherwise a new line
    /// with quantity 1 is appended.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::new(product));
        }
    }

    /// Remove the line for a product id entirely.
    ///
    /// A no-op when no such line exists.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product_id != id);
    }

    /// Sum of `price × quantity` across all lines.
    ///
    /// Returns the zero price for an empty cart. Recomputed on every call.
    #[must_use]
    pub fn total_price(&self) -> Price {
        let currency = self
            .lines
            .first()
            .map_or_else(Currency::default, |line| line.price.currency());
        let amount: Decimal = self
            .lines
            .iter()
            .map(|line| line.line_total().amount())
            .sum();
        Price::new(amount, currency)
    }

    /// Number of distinct product lines.
    ///
    /// This is the cart badge number: two units of one product count as 1.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines, in first-added order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i32, name: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            price: Price::from_units(price, Currency::RUB),
            image: format!("https://cdn.example.com/{id}.jpg"),
            category: "Посуда".to_owned(),
        }
    }

    #[test]
    fn test_add_same_product_twice_merges_lines() {
        let mut cart = Cart::new();
        let vase = product(1, "Ваза Сакура", 3500);

        cart.add(&vase);
        cart.add(&vase);

        assert_eq!(cart.line_count(), 1);
        let line = cart.lines().first().unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.name, "Ваза Сакура");
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(2, "Набор пиал", 4200));

        let before = cart.clone();
        cart.remove(ProductId::new(999));

        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_deletes_whole_line() {
        let mut cart = Cart::new();
        let bowl = product(5, "Чаша для чая", 2400);
        cart.add(&bowl);
        cart.add(&bowl);

        cart.remove(bowl.id);

        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Price::zero(Currency::RUB));
    }

    #[test]
    fn test_total_price_empty_cart_is_zero() {
        assert_eq!(
            Cart::new().total_price(),
            Price::zero(Currency::RUB)
        );
    }

    #[test]
    fn test_total_price_counts_quantity() {
        let mut cart = Cart::new();
        let vase = product(1, "Ваза Сакура", 3500);
        cart.add(&vase);
        cart.add(&vase);

        assert_eq!(cart.total_price().amount(), Decimal::from(7000));
    }

    #[test]
    fn test_badge_counts_lines_not_quantity() {
        let mut cart = Cart::new();
        let vase = product(1, "Ваза Сакура", 3500);
        cart.add(&vase);
        cart.add(&vase);

        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_lines_keep_first_added_order() {
        let mut cart = Cart::new();
        let bowl = product(4, "Пиала Момидзи", 1800);
        let vase = product(1, "Ваза Сакура", 3500);

        cart.add(&bowl);
        cart.add(&vase);
        cart.add(&vase);

        let ids: Vec<i32> = cart.lines().iter().map(|l| l.product_id.as_i32()).collect();
        assert_eq!(ids, vec![4, 1]);
    }

    #[test]
    fn test_mixed_cart_total() {
        let mut cart = Cart::new();
        let bowl = product(4, "Пиала Момидзи", 1800);
        let vase = product(1, "Ваза Сакура", 3500);

        cart.add(&bowl);
        cart.add(&vase);
        cart.add(&vase);

        assert_eq!(cart.total_price().amount(), Decimal::from(8800));
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_line_total() {
        let mut cart = Cart::new();
        let vase = product(1, "Ваза Сакура", 3500);
        cart.add(&vase);
        cart.add(&vase);

        let line = cart.lines().first().unwrap();
        assert_eq!(line.line_total().display(), "7000 ₽");
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut cart = Cart::new();
        cart.add(&product(3, "Чайный сервиз", 8900));

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }
}
