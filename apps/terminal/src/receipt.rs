//! # Console Rendering
//!
//! Text rendering for the catalog listing, the user listing and the final
//! receipt. Formatting lives here, in the app layer — the core crate only
//! produces values.

use bodega_core::{has_quantity_discount, Bill, Catalog, UserRegistry};

/// Renders the catalog listing shown before the purchase loop.
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("Available products\n");
    out.push_str("  CODE  NAME          STOCK      PRICE\n");
    for product in catalog.iter() {
        out.push_str(&format!(
            "  {:<5} {:<12} {:>5} {:>10}\n",
            product.code,
            product.name,
            product.inventory,
            product.price().to_string(),
        ));
    }
    out
}

/// Renders the registered-users listing.
pub fn render_users(users: &UserRegistry) -> String {
    let mut out = String::new();
    out.push_str("Registered users\n");
    for user in users.iter() {
        out.push_str(&format!(
            "  [{}] {} {} <{}>\n",
            user.id, user.first_name, user.last_name, user.email
        ));
    }
    out
}

/// Renders the finalized bill as a console receipt.
///
/// Discounted lines are flagged so the operator can see where the bulk
/// price applied.
pub fn render_bill(bill: &Bill) -> String {
    let mut out = String::new();
    out.push_str("========================================================\n");
    out.push_str("                 BODEGA POS - RECEIPT\n");
    out.push_str("========================================================\n");
    out.push_str(&format!("Receipt no: {}\n", bill.timestamp));
    out.push_str(&format!(
        "Customer:   {} {} (id {})\n",
        bill.user.first_name, bill.user.last_name, bill.user.id
    ));
    out.push_str("--------------------------------------------------------\n");

    if bill.lines.is_empty() {
        out.push_str("  (no purchases)\n");
    }
    for line in &bill.lines {
        let flag = if has_quantity_discount(line.quantity) {
            " -50%"
        } else {
            ""
        };
        out.push_str(&format!(
            "  {:<12} x{:<4} @ {:>9} {:>12}{}\n",
            line.name,
            line.quantity,
            line.unit_price().to_string(),
            line.total_price().to_string(),
            flag,
        ));
    }

    out.push_str("--------------------------------------------------------\n");
    out.push_str(&format!("TOTAL: {:>46}\n", bill.total().to_string()));
    out.push_str("========================================================\n");
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
