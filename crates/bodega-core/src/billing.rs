//! # Billing Module
//!
//! The bill builder: accumulates line items for one purchasing session and
//! produces the finalized, priced bill. This is the computational core of
//! the system.
//!
//! ## Pricing Pipeline (per line, in purchase order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Line Pricing Pipeline                            │
//! │                                                                     │
//! │  unit price × quantity                                              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  quantity > 10 ? ──── yes ───► 50% off the line subtotal            │
//! │       │ no                              │                           │
//! │       ▼                                 │                           │
//! │       ◄─────────────────────────────────┘                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  + 7% tax, rounded to the nearest whole currency unit               │
//! │  (round half to even)                                               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  line total ────► grand total = exact sum of line totals            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding
//! Discount and tax are applied as one exact rational computation over
//! integer cents, rounded **once**, to the nearest whole currency unit,
//! with ties going to the even unit (banker's rounding). Rounding a single
//! time keeps the result identical to pricing the line with exact decimal
//! arithmetic; ties-to-even avoids the systematic upward bias of always
//! rounding halves up.
//!
//! ## Builder Lifecycle
//! ```text
//! Open ── add_purchase()* ──► finalize(self) ──► Bill
//! ```
//! `finalize` consumes the builder, so a finalized session cannot accept
//! further purchases or be finalized twice.

use chrono::Utc;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::money::Money;
use crate::registry::UserRegistry;
use crate::types::{Bill, LineItem, TaxRate};
use crate::{QUANTITY_DISCOUNT_BPS, QUANTITY_DISCOUNT_THRESHOLD, TAX_RATE_BPS};

// =============================================================================
// Pricing Rules
// =============================================================================

/// Checks whether a line quantity qualifies for the bulk discount.
///
/// The rule is strict: exactly 10 units pays full price.
///
/// ## Example
/// ```rust
/// use bodega_core::has_quantity_discount;
///
/// assert!(!has_quantity_discount(10));
/// assert!(has_quantity_discount(11));
/// ```
#[inline]
pub fn has_quantity_discount(quantity: i64) -> bool {
    quantity > QUANTITY_DISCOUNT_THRESHOLD
}

/// Prices one line: subtotal, bulk discount, tax, whole-unit rounding.
///
/// The whole computation is exact integer math widened to `i128`; the
/// single rounding step at the end is round-half-to-even.
///
/// ## Example
/// ```rust
/// use bodega_core::billing::price_line;
/// use bodega_core::types::TaxRate;
/// use bodega_core::Money;
///
/// let tax = TaxRate::from_bps(700);
///
/// // 5 laptops: 2500.00, no discount, 7% tax → 2675.00 exactly
/// assert_eq!(price_line(Money::from_major(500), 5, tax).cents(), 267_500);
///
/// // 15 smartphones: 4500.00 halved to 2250.00, taxed to 2407.50,
/// // tie rounds to the even unit → 2408.00
/// assert_eq!(price_line(Money::from_major(300), 15, tax).cents(), 240_800);
/// ```
pub fn price_line(unit_price: Money, quantity: i64, tax: TaxRate) -> Money {
    let subtotal = unit_price.multiply_quantity(quantity);

    let discount_bps: i128 = if has_quantity_discount(quantity) {
        QUANTITY_DISCOUNT_BPS as i128
    } else {
        0
    };

    // line = subtotal × (1 - discount) × (1 + tax), rounded to whole units.
    // Kept as a single numerator/denominator pair so only the final
    // division rounds.
    let numer = subtotal.cents() as i128 * (10_000 - discount_bps) * (10_000 + tax.bps() as i128);
    let denom: i128 = 10_000 * 10_000 * 100;

    Money::from_major(div_round_half_even(numer, denom))
}

/// Integer division rounding to the nearest quotient, ties to even.
///
/// `denom` must be positive; `numer` may be negative (negative quantities
/// propagate arithmetically through pricing).
fn div_round_half_even(numer: i128, denom: i128) -> i64 {
    let quot = numer.div_euclid(denom);
    let rem = numer.rem_euclid(denom);

    let round_up = match (rem * 2).cmp(&denom) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Equal => quot % 2 != 0,
        std::cmp::Ordering::Less => false,
    };

    (if round_up { quot + 1 } else { quot }) as i64
}

// =============================================================================
// Bill Builder
// =============================================================================

/// Accumulates line items for one purchasing session tied to one user id.
///
/// Constructed by the session driver with a borrowed catalog handle;
/// there is no global state. The builder is in the Open state until
/// [`finalize`](BillBuilder::finalize) consumes it.
#[derive(Debug)]
pub struct BillBuilder<'a> {
    catalog: &'a Catalog,
    user_id: String,
    lines: Vec<LineItem>,
}

impl<'a> BillBuilder<'a> {
    /// Opens a builder for the given user id.
    pub fn new(catalog: &'a Catalog, user_id: impl Into<String>) -> Self {
        BillBuilder {
            catalog,
            user_id: user_id.into(),
            lines: Vec::new(),
        }
    }

    /// Records a purchase request.
    ///
    /// ## Behavior
    /// - Known code: appends a line item snapshotting the product's name
    ///   and current unit price with the requested quantity. The line's
    ///   total starts at 0 and is priced at finalization.
    /// - Unknown code: the request is silently dropped. This is documented
    ///   behavior, not an oversight — no error is surfaced, only a
    ///   debug-level trace event.
    ///
    /// Buying the same code twice produces two separate lines; there is no
    /// merging. Quantity is accepted unvalidated.
    pub fn add_purchase(&mut self, code: &str, quantity: i64) {
        match self.catalog.get(code) {
            Some(product) => {
                debug!(code = %product.code, quantity, "Purchase recorded");
                self.lines.push(LineItem {
                    code: product.code.clone(),
                    name: product.name.clone(),
                    quantity,
                    unit_price_cents: product.price_cents,
                    total_price_cents: 0,
                });
            }
            None => {
                debug!(code, quantity, "Unknown product code, purchase dropped");
            }
        }
    }

    /// Number of accumulated line items.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Prices every line, resolves the user and produces the bill.
    ///
    /// Consumes the builder: the Open → Finalized transition is enforced
    /// by move semantics, so a session cannot be finalized twice.
    ///
    /// ## Errors
    /// `CoreError::UserNotFound` when the session's user id was never
    /// registered. That is an invariant violation, not a recoverable
    /// condition, so it propagates to the caller.
    pub fn finalize(self, users: &UserRegistry) -> CoreResult<Bill> {
        let tax = TaxRate::from_bps(TAX_RATE_BPS);

        let mut lines = self.lines;
        let mut total = Money::zero();
        for line in &mut lines {
            let priced = price_line(line.unit_price(), line.quantity, tax);
            line.total_price_cents = priced.cents();
            total += priced;
        }

        let user = users.find_by_id(&self.user_id)?.clone();

        debug!(
            user_id = %user.id,
            lines = lines.len(),
            total = %total,
            "Bill finalized"
        );

        Ok(Bill {
            timestamp: Utc::now().timestamp_millis().to_string(),
            user,
            lines,
            total_cents: total.cents(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::User;

    fn registry_with(id: &str) -> UserRegistry {
        let mut users = UserRegistry::new();
        users.add(User::new(id, "Ada", "Lovelace", "ada@example.com"));
        users
    }

    fn tax() -> TaxRate {
        TaxRate::from_bps(TAX_RATE_BPS)
    }

    #[test]
    fn test_discount_threshold_is_strict() {
        assert!(!has_quantity_discount(0));
        assert!(!has_quantity_discount(9));
        assert!(!has_quantity_discount(10));
        assert!(has_quantity_discount(11));
        assert!(has_quantity_discount(15));
    }

    #[test]
    fn test_price_line_no_discount() {
        // 5 laptops: 2500.00 × 1.07 = 2675.00 exactly
        let total = price_line(Money::from_major(500), 5, tax());
        assert_eq!(total, Money::from_major(2675));
    }

    #[test]
    fn test_price_line_with_discount() {
        // 15 smartphones: 4500.00 → 2250.00 → 2407.50, tie to even → 2408
        let total = price_line(Money::from_major(300), 15, tax());
        assert_eq!(total, Money::from_major(2408));
    }

    #[test]
    fn test_rounding_tie_goes_to_even_downward() {
        // 3 books: 150.00 × 1.07 = 160.50 — the even neighbor is 160
        let total = price_line(Money::from_major(50), 3, tax());
        assert_eq!(total, Money::from_major(160));
    }

    #[test]
    fn test_rounding_tie_goes_to_even_upward() {
        // 11 laptops: 5500.00 → 2750.00 → 2942.50 — the even neighbor is 2942
        let total = price_line(Money::from_major(500), 11, tax());
        assert_eq!(total, Money::from_major(2942));

        // 15 smartphones: 2407.50 — here the even neighbor is above
        let total = price_line(Money::from_major(300), 15, tax());
        assert_eq!(total, Money::from_major(2408));
    }

    #[test]
    fn test_discount_law_at_the_boundary() {
        // Exactly 10 units pays full price: 5000.00 × 1.07 = 5350.00
        let total = price_line(Money::from_major(500), 10, tax());
        assert_eq!(total, Money::from_major(5350));
    }

    #[test]
    fn test_zero_and_negative_quantities_propagate() {
        assert_eq!(price_line(Money::from_major(500), 0, tax()), Money::zero());
        // -1 laptop: -500.00 × 1.07 = -535.00
        assert_eq!(
            price_line(Money::from_major(500), -1, tax()),
            Money::from_major(-535)
        );
    }

    #[test]
    fn test_known_code_snapshots_catalog_data() {
        let catalog = Catalog::seeded();
        let users = registry_with("42");

        let mut builder = BillBuilder::new(&catalog, "42");
        builder.add_purchase("001", 5);

        let bill = builder.finalize(&users).unwrap();
        assert_eq!(bill.lines.len(), 1);

        let line = &bill.lines[0];
        assert_eq!(line.code, "001");
        assert_eq!(line.name, "Laptop");
        assert_eq!(line.quantity, 5);
        assert_eq!(line.unit_price(), catalog.get("001").unwrap().price());
        assert_eq!(line.total_price(), Money::from_major(2675));
        assert_eq!(bill.total(), Money::from_major(2675));
    }

    #[test]
    fn test_unknown_code_is_silently_dropped() {
        let catalog = Catalog::seeded();
        let users = registry_with("42");

        let mut builder = BillBuilder::new(&catalog, "42");
        builder.add_purchase("999", 3);
        assert_eq!(builder.line_count(), 0);

        let bill = builder.finalize(&users).unwrap();
        assert!(bill.lines.is_empty());
        assert!(bill.total().is_zero());
    }

    #[test]
    fn test_repeated_code_produces_separate_lines() {
        let catalog = Catalog::seeded();
        let users = registry_with("42");

        let mut builder = BillBuilder::new(&catalog, "42");
        builder.add_purchase("004", 3);
        builder.add_purchase("004", 4);

        let bill = builder.finalize(&users).unwrap();
        assert_eq!(bill.lines.len(), 2);

        // Each line is priced independently:
        // 3 books → 160.50, tie to even → 160.00
        // 4 books → 200.00 × 1.07 = 214.00 exactly
        assert_eq!(bill.lines[0].total_price(), Money::from_major(160));
        assert_eq!(bill.lines[1].total_price(), Money::from_major(214));
        assert_eq!(bill.total(), Money::from_major(374));
    }

    #[test]
    fn test_lines_keep_purchase_order() {
        let catalog = Catalog::seeded();
        let users = registry_with("42");

        let mut builder = BillBuilder::new(&catalog, "42");
        builder.add_purchase("003", 1);
        builder.add_purchase("001", 1);
        builder.add_purchase("002", 1);

        let bill = builder.finalize(&users).unwrap();
        let codes: Vec<&str> = bill.lines.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["003", "001", "002"]);
    }

    #[test]
    fn test_grand_total_is_sum_of_line_totals() {
        let catalog = Catalog::seeded();
        let users = registry_with("42");

        let mut builder = BillBuilder::new(&catalog, "42");
        builder.add_purchase("001", 5);
        builder.add_purchase("002", 15);
        builder.add_purchase("004", 3);
        builder.add_purchase("999", 7); // dropped

        let bill = builder.finalize(&users).unwrap();
        assert_eq!(bill.lines.len(), 3);

        let summed: i64 = bill.lines.iter().map(|l| l.total_price_cents).sum();
        assert_eq!(bill.total_cents, summed);
    }

    #[test]
    fn test_finalize_for_unregistered_user_fails() {
        let catalog = Catalog::seeded();
        let users = UserRegistry::new();

        let mut builder = BillBuilder::new(&catalog, "42");
        builder.add_purchase("001", 1);

        let err = builder.finalize(&users).unwrap_err();
        assert!(matches!(err, crate::CoreError::UserNotFound(id) if id == "42"));
    }

    #[test]
    fn test_bill_carries_registered_user_and_timestamp() {
        let catalog = Catalog::seeded();
        let users = registry_with("42");

        let bill = BillBuilder::new(&catalog, "42").finalize(&users).unwrap();
        assert_eq!(bill.user.id, "42");
        assert_eq!(bill.user.first_name, "Ada");

        // Epoch-milliseconds string: opaque, but numeric
        assert!(bill.timestamp.parse::<i64>().is_ok());
    }

    #[test]
    fn test_bill_serializes_for_receipt_export() {
        let catalog = Catalog::seeded();
        let users = registry_with("42");

        let mut builder = BillBuilder::new(&catalog, "42");
        builder.add_purchase("001", 5);
        let bill = builder.finalize(&users).unwrap();

        let json = serde_json::to_value(&bill).unwrap();
        assert_eq!(json["user"]["id"], "42");
        assert_eq!(json["total_cents"], 267_500);
        assert_eq!(json["lines"][0]["code"], "001");
        assert_eq!(json["lines"][0]["total_price_cents"], 267_500);
    }
}
