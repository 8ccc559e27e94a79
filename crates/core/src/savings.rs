//! # Savings Module
//!
//! `SavingsAccount` - a bank account that also carries an interest rate and
//! can credit interest onto its balance.

use crate::account::{Account, AccountKind};
use crate::error::{AccountError, AccountResult};
use crate::ledger::Ledger;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// Tài khoản tiết kiệm
///
/// Deposit, withdraw and balance behave exactly like
/// [`BankAccount`](crate::BankAccount); the rate is fixed at creation.
///
/// # Examples
/// ```
/// use savebank_core::{Account, SavingsAccount};
/// use rust_decimal_macros::dec;
///
/// let mut savings = SavingsAccount::new("S2001", dec!(2000), dec!(0.05)).unwrap();
/// savings.deposit(dec!(500)).unwrap();
/// savings.add_interest().unwrap();
/// assert_eq!(savings.balance(), dec!(2625));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsAccount {
    ledger: Ledger,
    rate: Decimal,
}

impl SavingsAccount {
    /// Tạo tài khoản tiết kiệm. `rate` is fractional (0.05 = 5%) and must
    /// be `>= 0`.
    pub fn new(
        id: impl Into<String>,
        initial_balance: Decimal,
        rate: Decimal,
    ) -> AccountResult<Self> {
        if rate < Decimal::ZERO {
            return Err(AccountError::InvalidRate(rate));
        }

        Ok(Self {
            ledger: Ledger::open(id, initial_balance)?,
            rate,
        })
    }

    /// Lãi suất
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Cộng lãi: `balance += balance * rate`.
    ///
    /// Returns the interest credited (zero for a zero rate or balance).
    /// Fails with `Overflow`, balance unchanged, if the result does not fit.
    pub fn add_interest(&mut self) -> AccountResult<Decimal> {
        self.ledger.accrue(self.rate)
    }
}

impl Account for SavingsAccount {
    fn id(&self) -> &str {
        self.ledger.id()
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Savings
    }

    fn balance(&self) -> Decimal {
        self.ledger.balance()
    }

    fn deposit(&mut self, amount: Decimal) -> AccountResult<()> {
        self.ledger.deposit(amount).map(|_| ())
    }

    fn withdraw(&mut self, amount: Decimal) -> AccountResult<()> {
        self.ledger.withdraw(amount).map(|_| ())
    }

    fn opened_at(&self) -> DateTime<Utc> {
        self.ledger.opened_at()
    }

    fn rate(&self) -> Option<Decimal> {
        Some(self.rate)
    }
}

impl fmt::Display for SavingsAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} (rate {})",
            self.kind(),
            self.id(),
            self.balance(),
            self.rate
        )
    }
}
