//! # Ledger Module
//!
//! Shared balance state embedded by every account kind. All balance
//! mutation rules live here so `BankAccount` and `SavingsAccount` cannot
//! drift apart.

use crate::error::{AccountError, AccountResult};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Identifier + balance of a single account.
///
/// The balance is never negative: the opening balance is checked on
/// construction and withdrawals beyond the available funds are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    id: String,
    balance: Decimal,
    opened_at: DateTime<Utc>,
}

impl Ledger {
    /// Mở ledger mới với số dư ban đầu
    pub fn open(id: impl Into<String>, opening_balance: Decimal) -> AccountResult<Self> {
        let id = id.into();
        if opening_balance < Decimal::ZERO {
            tracing::warn!(account = %id, %opening_balance, "Negative opening balance rejected");
            return Err(AccountError::InvalidArgument(format!(
                "opening balance must not be negative: {opening_balance}"
            )));
        }

        tracing::debug!(account = %id, %opening_balance, "Account opened");
        Ok(Self {
            id,
            balance: opening_balance,
            opened_at: Utc::now(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Credit `amount`, returning the new balance.
    pub fn deposit(&mut self, amount: Decimal) -> AccountResult<Decimal> {
        if amount <= Decimal::ZERO {
            tracing::warn!(account = %self.id, %amount, "Deposit rejected");
            return Err(AccountError::non_positive("deposit", amount));
        }

        let Some(balance) = self.balance.checked_add(amount) else {
            tracing::warn!(account = %self.id, %amount, "Deposit overflows balance");
            return Err(AccountError::Overflow(format!(
                "deposit of {amount} onto {}",
                self.balance
            )));
        };

        self.balance = balance;
        tracing::debug!(account = %self.id, %amount, balance = %self.balance, "Deposit");
        Ok(self.balance)
    }

    /// Debit `amount`, returning the new balance.
    pub fn withdraw(&mut self, amount: Decimal) -> AccountResult<Decimal> {
        if let Err(err) = self.check_withdraw(amount) {
            tracing::warn!(account = %self.id, %amount, error = %err, "Withdrawal rejected");
            return Err(err);
        }

        self.balance -= amount;
        tracing::debug!(account = %self.id, %amount, balance = %self.balance, "Withdrawal");
        Ok(self.balance)
    }

    fn check_withdraw(&self, amount: Decimal) -> AccountResult<()> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::non_positive("withdraw", amount));
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        Ok(())
    }

    /// Cộng lãi: `balance += balance * rate`. Returns the interest credited.
    ///
    /// A negative rate is rejected; on overflow the balance is unchanged.
    pub(crate) fn accrue(&mut self, rate: Decimal) -> AccountResult<Decimal> {
        if rate < Decimal::ZERO {
            return Err(AccountError::InvalidRate(rate));
        }

        let accrued = self
            .balance
            .checked_mul(rate)
            .and_then(|interest| Some((interest, self.balance.checked_add(interest)?)));
        let Some((interest, balance)) = accrued else {
            tracing::warn!(account = %self.id, %rate, "Interest accrual overflows balance");
            return Err(AccountError::Overflow(format!(
                "interest at rate {rate} on {}",
                self.balance
            )));
        };

        self.balance = balance;
        tracing::debug!(account = %self.id, %rate, %interest, balance = %self.balance, "Interest accrued");
        Ok(interest)
    }
}
