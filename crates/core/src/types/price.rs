//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Catalog prices are whole currency units (rubles), but the amount is kept
/// as a [`Decimal`] so that derived values (line totals, cart totals) never
/// go through floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., rubles, not kopecks).
    amount: Decimal,
    /// ISO 4217 currency code.
    currency: Currency,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a price from a whole number of currency units.
    #[must_use]
    pub fn from_units(units: i64, currency: Currency) -> Self {
        Self {
            amount: Decimal::from(units),
            currency,
        }
    }

    /// The zero price in the given currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// The price amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The price currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// This price multiplied by a quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(quantity),
            currency: self.currency,
        }
    }

    /// Format for display (e.g., "3500 ₽" or "$19.99").
    ///
    /// Ruble amounts are whole units and render without decimals, with the
    /// symbol after the amount; other currencies render symbol-first with
    /// two decimals.
    #[must_use]
    pub fn display(&self) -> String {
        match self.currency {
            Currency::RUB => format!("{} {}", self.amount.normalize(), self.currency.symbol()),
            _ => format!("{}{:.2}", self.currency.symbol(), self.amount),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    RUB,
    USD,
    EUR,
}

impl Currency {
    /// The currency symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::RUB => "₽",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// The ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::RUB => "RUB",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let price = Price::from_units(3500, Currency::RUB);
        assert_eq!(price.amount(), Decimal::from(3500));
        assert_eq!(price.currency(), Currency::RUB);
    }

    #[test]
    fn test_zero() {
        assert_eq!(Price::zero(Currency::RUB).amount(), Decimal::ZERO);
    }

    #[test]
    fn test_times() {
        let price = Price::from_units(3500, Currency::RUB);
        assert_eq!(price.times(2).amount(), Decimal::from(7000));
        assert_eq!(price.times(0).amount(), Decimal::ZERO);
    }

    #[test]
    fn test_display_rubles() {
        let price = Price::from_units(3500, Currency::RUB);
        assert_eq!(price.display(), "3500 ₽");
    }

    #[test]
    fn test_display_dollars() {
        let price = Price::from_units(19, Currency::USD);
        assert_eq!(price.display(), "$19.00");
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(Currency::RUB.code(), "RUB");
        assert_eq!(Currency::RUB.symbol(), "₽");
        assert_eq!(Currency::default(), Currency::RUB);
    }
}
