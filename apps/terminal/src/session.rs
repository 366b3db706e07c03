//! # Session Driver
//!
//! Orchestrates one interactive run:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Session Sequence                             │
//! │                                                                     │
//! │  1. Register user ── four prompts ──► UserRegistry::add             │
//! │  2. List registered users                                           │
//! │  3. List the catalog                                                │
//! │  4. Purchase loop:                                                  │
//! │       code prompt ──► quantity prompt ──► BillBuilder::add_purchase │
//! │       "Buy more products? (y/n)" ── y ──► repeat                    │
//! │  5. BillBuilder::finalize ──► receipt                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every decision is delegated to `bodega-core`; this module only reads
//! lines, parses them, and prints. Parsing failures are handled here —
//! the core assumes well-formed numbers.

use bodega_core::{Bill, BillBuilder, Catalog, CoreResult, User, UserRegistry};
use tracing::{info, warn};

use crate::prompt::Prompt;
use crate::receipt;

/// Runs one full purchasing session and returns the finalized bill.
///
/// ## Errors
/// `CoreError::UserNotFound` cannot occur in the normal flow (the only id
/// billed is the one registered moments earlier) but still propagates
/// rather than being swallowed.
pub fn run(
    catalog: &Catalog,
    users: &mut UserRegistry,
    prompt: &mut dyn Prompt,
) -> CoreResult<Bill> {
    let user = register_user(users, prompt);
    info!(user_id = %user.id, "User registered");

    print!("{}", receipt::render_users(users));
    print!("{}", receipt::render_catalog(catalog));

    let mut builder = BillBuilder::new(catalog, user.id);
    loop {
        let code = prompt.read_line("Enter the product code: ");
        let quantity_raw = prompt.read_line("Enter the quantity: ");

        match quantity_raw.trim().parse::<i64>() {
            Ok(quantity) => builder.add_purchase(code.trim(), quantity),
            // Malformed numbers never reach the core; the request is
            // skipped and the loop goes on
            Err(_) => warn!(input = %quantity_raw, "Quantity is not a number, purchase skipped"),
        }

        let more = prompt.read_line("Buy more products? (y/n): ");
        if !more.trim().eq_ignore_ascii_case("y") {
            break;
        }
    }

    if builder.line_count() == 0 {
        info!("No purchases recorded, printing an empty receipt");
    }

    builder.finalize(users)
}

/// Collects the four user fields and registers the new user.
fn register_user(users: &mut UserRegistry, prompt: &mut dyn Prompt) -> User {
    let id = prompt.read_line("Enter your identification number: ");
    let first_name = prompt.read_line("Enter your first name: ");
    let last_name = prompt.read_line("Enter your last name: ");
    let email = prompt.read_line("Enter your email: ");

    let user = User::new(
        id.trim(),
        first_name.trim(),
        last_name.trim(),
        email.trim(),
    );
    users.add(user.clone());
    user
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompt;
    use bodega_core::Money;

    #[test]
    fn test_scripted_session_produces_expected_bill() {
        let catalog = Catalog::seeded();
        let mut users = UserRegistry::new();
        let mut prompt = ScriptedPrompt::new(&[
            "42", "Ada", "Lovelace", "ada@example.com", // registration
            "001", "5", "y", // 5 laptops, continue
            "002", "15", "n", // 15 smartphones, stop
        ]);

        let bill = run(&catalog, &mut users, &mut prompt).unwrap();

        assert_eq!(bill.user.id, "42");
        assert_eq!(bill.lines.len(), 2);
        assert_eq!(bill.lines[0].total_price(), Money::from_major(2675));
        assert_eq!(bill.lines[1].total_price(), Money::from_major(2408));
        assert_eq!(bill.total(), Money::from_major(5083));

        // The user registered at the start of the run is in the registry
        assert_eq!(users.len(), 1);
        assert_eq!(users.find_by_id("42").unwrap().first_name, "Ada");
    }

    #[test]
    fn test_continue_answer_is_case_insensitive() {
        let catalog = Catalog::seeded();
        let mut users = UserRegistry::new();
        let mut prompt = ScriptedPrompt::new(&[
            "42", "Ada", "Lovelace", "ada@example.com",
            "004", "1", "Y", // uppercase still continues
            "004", "1", "q", // anything else stops
        ]);

        let bill = run(&catalog, &mut users, &mut prompt).unwrap();
        assert_eq!(bill.lines.len(), 2);
    }

    #[test]
    fn test_unknown_code_and_bad_quantity_leave_no_trace() {
        let catalog = Catalog::seeded();
        let mut users = UserRegistry::new();
        let mut prompt = ScriptedPrompt::new(&[
            "42", "Ada", "Lovelace", "ada@example.com",
            "999", "3", "y", // unknown code: dropped by the core
            "001", "five", "y", // malformed quantity: skipped by the driver
            "004", "2", "n", // one real purchase
        ]);

        let bill = run(&catalog, &mut users, &mut prompt).unwrap();
        assert_eq!(bill.lines.len(), 1);
        assert_eq!(bill.lines[0].code, "004");
        // 2 books: 100.00 × 1.07 = 107.00
        assert_eq!(bill.total(), Money::from_major(107));
    }

    #[test]
    fn test_exhausted_input_ends_with_empty_receipt() {
        let catalog = Catalog::seeded();
        let mut users = UserRegistry::new();
        // EOF right after registration: empty code, unparseable empty
        // quantity, empty "more" answer ends the loop
        let mut prompt = ScriptedPrompt::new(&["42", "Ada", "Lovelace", "ada@example.com"]);

        let bill = run(&catalog, &mut users, &mut prompt).unwrap();
        assert!(bill.lines.is_empty());
        assert!(bill.total().is_zero());
    }

    #[test]
    fn test_prompt_sequence_matches_session_order() {
        let catalog = Catalog::seeded();
        let mut users = UserRegistry::new();
        let mut prompt = ScriptedPrompt::new(&[
            "42", "Ada", "Lovelace", "ada@example.com", "001", "1", "n",
        ]);

        run(&catalog, &mut users, &mut prompt).unwrap();

        assert_eq!(
            prompt.transcript,
            vec![
                "Enter your identification number: ",
                "Enter your first name: ",
                "Enter your last name: ",
                "Enter your email: ",
                "Enter the product code: ",
                "Enter the quantity: ",
                "Buy more products? (y/n): ",
            ]
        );
    }
}
