//! # bodega-core: Pure Business Logic for Bodega POS
//!
//! This crate is the **heart** of Bodega POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Bodega POS Architecture                        │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/terminal (console)                    │   │
//! │  │   register user ──► list catalog ──► buy loop ──► receipt   │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │ plain function calls               │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │              ★ bodega-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────────────┐   │   │
//! │  │  │  money  │ │ catalog │ │ registry │ │     billing     │   │   │
//! │  │  │  Money  │ │ Product │ │   User   │ │   BillBuilder   │   │   │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └─────────────────┘   │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (Product, User, LineItem, Bill)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The in-memory product table
//! - [`registry`] - The in-memory user registry
//! - [`billing`] - Bill builder: line accumulation, discount and tax math
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic except the single
//!    clock read that stamps a finished bill
//! 2. **No I/O**: stdin, stdout, files and network are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bodega_core::{BillBuilder, Catalog, User, UserRegistry};
//!
//! let catalog = Catalog::seeded();
//! let mut users = UserRegistry::new();
//! users.add(User::new("42", "Ada", "Lovelace", "ada@example.com"));
//!
//! let mut builder = BillBuilder::new(&catalog, "42");
//! builder.add_purchase("001", 5); // 5 laptops
//!
//! let bill = builder.finalize(&users).unwrap();
//! // 5 × 500.00 = 2500.00, no discount, 7% tax → 2675.00
//! assert_eq!(bill.total().cents(), 267_500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod catalog;
pub mod error;
pub mod money;
pub mod registry;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bodega_core::Money` instead of
// `use bodega_core::money::Money`

pub use billing::{has_quantity_discount, BillBuilder};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use registry::UserRegistry;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity above which the bulk discount kicks in.
///
/// The rule is strict: a line of exactly 10 units pays full price,
/// the 11th unit triggers the discount for the whole line.
pub const QUANTITY_DISCOUNT_THRESHOLD: i64 = 10;

/// Bulk discount in basis points (5000 = 50% off the line subtotal).
pub const QUANTITY_DISCOUNT_BPS: u32 = 5_000;

/// Sales tax in basis points (700 = 7%), applied per line after the
/// discount.
pub const TAX_RATE_BPS: u32 = 700;
