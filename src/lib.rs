//! # Cuenta Bancaria
//!
//! An in-memory bank account model: balances with an overdraft floor and a
//! hard ceiling, garnishment (legal seizure) rates applied to money
//! movements, and process-wide aggregate statistics maintained through an
//! explicit [`Registry`].
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: monetary values are `rust_decimal`
//!   decimals, never floats
//! - **All-or-nothing operations**: every validation runs before any field
//!   is written, so a failed call leaves every account untouched
//! - **No hidden globals**: the id sequence and aggregate sums live in a
//!   [`Registry`] passed explicitly into the paths that touch them
//! - **Two error kinds**: malformed input ([`ErrorKind::InvalidArgument`])
//!   vs. invariant violations ([`ErrorKind::InvalidState`])
//!
//! ## Example
//!
//! ```
//! use cuenta_bancaria::{Account, Registry};
//! use rust_decimal_macros::dec;
//!
//! let mut registry = Registry::new();
//! let mut account =
//!     Account::open(dec!(1000.00), None, Some(dec!(-500.00)), &mut registry).unwrap();
//! account.deposit(dec!(250.00), &mut registry).unwrap();
//! assert_eq!(account.balance(), dec!(1250.00));
//! println!("{account}");
//! ```

pub mod account;
pub mod error;
pub mod money;
pub mod registry;

pub use account::Account;
pub use error::{AccountError, ErrorKind, Result};
pub use registry::{Registry, Stats};
