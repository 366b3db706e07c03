//! # Domain Types
//!
//! Core domain records used throughout Bodega POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌────────────────────┐    │
//! │  │    Product    │   │     User      │   │      LineItem      │    │
//! │  │  ───────────  │   │  ───────────  │   │  ────────────────  │    │
//! │  │  code (key)   │   │  id (string)  │   │  code              │    │
//! │  │  name         │   │  first_name   │   │  name (frozen)     │    │
//! │  │  inventory    │   │  last_name    │   │  quantity          │    │
//! │  │  price_cents  │   │  email        │   │  unit_price_cents  │    │
//! │  └───────────────┘   └───────────────┘   │  total_price_cents │    │
//! │                                          └────────────────────┘    │
//! │  ┌───────────────┐   ┌──────────────────────────────────────┐      │
//! │  │    TaxRate    │   │                Bill                  │      │
//! │  │  ───────────  │   │  ──────────────────────────────────  │      │
//! │  │  bps (u32)    │   │  timestamp, user, lines, total_cents │      │
//! │  │  700 = 7%     │   └──────────────────────────────────────┘      │
//! │  └───────────────┘                                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `LineItem` freezes the product's name and unit price at purchase
//! time. The bill stays consistent even if the catalog were to change
//! afterwards, and inventory on the product record is display data only —
//! a purchase never decrements it.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 700 bps = the 7% sales tax applied to every bill line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Immutable after catalog seeding; the catalog owns every instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Business identifier and catalog key (e.g. "001").
    pub code: String,

    /// Display name shown in the catalog listing and on the receipt.
    pub name: String,

    /// Units on hand. Display data only: purchases do not decrement it.
    pub inventory: i64,

    /// Unit price in cents (smallest currency unit).
    pub price_cents: i64,
}

impl Product {
    /// Creates a product record.
    pub fn new(code: impl Into<String>, name: impl Into<String>, inventory: i64, price: Money) -> Self {
        Product {
            code: code.into(),
            name: name.into(),
            inventory,
            price_cents: price.cents(),
        }
    }

    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// User
// =============================================================================

/// A registered shop user.
///
/// Created once from operator input at the start of a session; immutable
/// and never deleted for the lifetime of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier as entered by the operator. Uniqueness is not enforced.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    /// Creates a user record.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        User {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product-quantity entry within a bill.
///
/// Uses the snapshot pattern to freeze product data at purchase time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Product code at time of purchase.
    pub code: String,
    /// Product name at time of purchase (frozen).
    pub name: String,
    /// Requested quantity. Accepted unvalidated; zero or negative values
    /// flow through the arithmetic unchanged.
    pub quantity: i64,
    /// Unit price in cents at time of purchase (frozen).
    pub unit_price_cents: i64,
    /// Priced line total in cents. Starts at 0 and is written once during
    /// bill finalization.
    pub total_price_cents: i64,
}

impl LineItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the priced line total as Money.
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.total_price_cents)
    }
}

// =============================================================================
// Bill
// =============================================================================

/// The finalized, immutable summary of one purchasing session.
///
/// Produced exactly once per session by the bill builder; rendered by the
/// terminal, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    /// Wall-clock capture at finalization time, as an epoch-milliseconds
    /// string. Opaque, monotonic-enough identifier for the run.
    pub timestamp: String,

    /// The billed user, cloned from the registry at finalization.
    pub user: User,

    /// Priced line items in original purchase order.
    pub lines: Vec<LineItem>,

    /// Grand total in cents: the exact sum of the line totals.
    pub total_cents: i64,
}

impl Bill {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(700);
        assert_eq!(rate.bps(), 700);
        assert!((rate.percentage() - 7.0).abs() < 0.001);
    }

    #[test]
    fn test_product_price_accessor() {
        let product = Product::new("001", "Laptop", 25, Money::from_major(500));
        assert_eq!(product.price().cents(), 50_000);
        assert_eq!(product.price(), Money::from_major(500));
    }

    #[test]
    fn test_line_item_accessors() {
        let line = LineItem {
            code: "004".to_string(),
            name: "Book".to_string(),
            quantity: 3,
            unit_price_cents: 5_000,
            total_price_cents: 16_000,
        };
        assert_eq!(line.unit_price(), Money::from_major(50));
        assert_eq!(line.total_price(), Money::from_major(160));
    }
}
