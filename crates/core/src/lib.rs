//! # Savebank Core
//!
//! Domain types for Savebank:
//! - [`Account`] - capability shared by every account kind
//! - [`BankAccount`] - plain checking account
//! - [`SavingsAccount`] - account with an interest rate
//! - [`AccountBook`] - ordered collection of heterogeneous accounts

pub mod account;
pub mod book;
pub mod error;
mod ledger;
pub mod savings;

pub use account::{Account, AccountKind, AccountSnapshot, BankAccount};
pub use book::AccountBook;
pub use error::{AccountError, AccountResult};
pub use savings::SavingsAccount;
