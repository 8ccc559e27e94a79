//! # Account Module
//!
//! Định nghĩa `Account` - the capability shared by every account kind -
//! and `BankAccount`, the plain checking account.

use crate::error::AccountResult;
use crate::ledger::Ledger;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Loại tài khoản
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Tài khoản thanh toán
    Checking,
    /// Tài khoản tiết kiệm (có lãi)
    Savings,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Checking => "checking",
            AccountKind::Savings => "savings",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Common account capability: deposit, withdraw, read balance.
///
/// Any account kind can be used wherever an `Account` is expected,
/// including as `Box<dyn Account>` inside an [`AccountBook`](crate::AccountBook).
pub trait Account: fmt::Debug {
    fn id(&self) -> &str;

    fn kind(&self) -> AccountKind;

    /// Số dư hiện tại (no side effects)
    fn balance(&self) -> Decimal;

    /// Gửi tiền. Fails with `InvalidArgument` if `amount <= 0`.
    fn deposit(&mut self, amount: Decimal) -> AccountResult<()>;

    /// Rút tiền. Fails with `InvalidArgument` if `amount <= 0` and with
    /// `InsufficientFunds` if `amount > balance`; the balance is unchanged
    /// on failure.
    fn withdraw(&mut self, amount: Decimal) -> AccountResult<()>;

    fn opened_at(&self) -> DateTime<Utc>;

    /// Interest rate, for kinds that accrue interest.
    fn rate(&self) -> Option<Decimal> {
        None
    }

    fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            id: self.id().to_string(),
            kind: self.kind(),
            balance: self.balance(),
            rate: self.rate(),
            opened_at: self.opened_at(),
        }
    }
}

/// Read-only, serializable view of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub id: String,
    pub kind: AccountKind,
    pub balance: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    pub opened_at: DateTime<Utc>,
}

/// Tài khoản ngân hàng cơ bản
///
/// # Examples
/// ```
/// use savebank_core::{Account, BankAccount};
/// use rust_decimal_macros::dec;
///
/// let mut account = BankAccount::new("A1001", dec!(1000)).unwrap();
/// account.deposit(dec!(500)).unwrap();
/// account.withdraw(dec!(300)).unwrap();
/// assert_eq!(account.balance(), dec!(1200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccount {
    ledger: Ledger,
}

impl BankAccount {
    /// Tạo tài khoản mới. A negative `initial_balance` is rejected with
    /// `InvalidArgument`; zero is allowed.
    pub fn new(id: impl Into<String>, initial_balance: Decimal) -> AccountResult<Self> {
        Ok(Self {
            ledger: Ledger::open(id, initial_balance)?,
        })
    }
}

impl Account for BankAccount {
    fn id(&self) -> &str {
        self.ledger.id()
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Checking
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
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.kind(), self.id(), self.balance())
    }
}
