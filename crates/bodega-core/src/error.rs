//! # Error Types
//!
//! Domain-specific error types for bodega-core.
//!
//! ## Error Philosophy
//! This system has exactly one hard failure: finalizing a bill for a user
//! id that was never registered. Everything else that can "go wrong" is a
//! normal outcome:
//!
//! - An unknown product code during a purchase is silently dropped
//!   (`Catalog::get` returns `None`, no error is raised)
//! - Malformed numeric input never reaches this crate; the terminal parses
//!   before calling in
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the id that missed)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No registered user has the given id.
    ///
    /// ## When This Occurs
    /// - `BillBuilder::finalize` resolves the session's user id against the
    ///   registry and the id is absent
    ///
    /// A bill belongs to a registered user; a session whose user was never
    /// registered cannot be billed.
    #[error("User not found: {0}")]
    UserNotFound(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
