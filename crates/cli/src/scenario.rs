//! The demonstration scenario: a checking account, a savings account, and a
//! polymorphic read-back through an `AccountBook`.

use crate::config::ScenarioConfig;
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use savebank_core::{Account, AccountBook, BankAccount, SavingsAccount};
use std::fmt;

/// One console line: `"<label>: <balance>"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceLine {
    pub label: &'static str,
    pub balance: Decimal,
}

impl BalanceLine {
    fn new(label: &'static str, balance: Decimal) -> Self {
        Self { label, balance }
    }
}

impl fmt::Display for BalanceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.balance.normalize())
    }
}

/// Kết quả chạy kịch bản
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub lines: Vec<BalanceLine>,
    pub book: AccountBook,
}

impl ScenarioOutcome {
    /// Balance lines, one per row
    pub fn render_text(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }

    /// Pretty JSON array of account snapshots
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.book.snapshots())
    }
}

pub fn run(config: &ScenarioConfig) -> Result<ScenarioOutcome> {
    let mut lines = Vec::new();

    // Checking: deposit then withdraw
    let checking_cfg = &config.checking;
    let mut checking = BankAccount::new(&checking_cfg.id, checking_cfg.opening_balance)
        .with_context(|| format!("Failed to open account {}", checking_cfg.id))?;
    checking
        .deposit(checking_cfg.deposit)
        .with_context(|| format!("Deposit to {} failed", checking_cfg.id))?;
    checking
        .withdraw(checking_cfg.withdraw)
        .with_context(|| format!("Withdrawal from {} failed", checking_cfg.id))?;
    tracing::info!(account = checking.id(), balance = %checking.balance(), "Checking scenario done");
    lines.push(BalanceLine::new("Final Balance", checking.balance()));

    // Savings: deposit then accrue interest
    let savings_cfg = &config.savings;
    let mut savings = SavingsAccount::new(
        &savings_cfg.id,
        savings_cfg.opening_balance,
        savings_cfg.rate,
    )
    .with_context(|| format!("Failed to open savings account {}", savings_cfg.id))?;
    savings
        .deposit(savings_cfg.deposit)
        .with_context(|| format!("Deposit to {} failed", savings_cfg.id))?;
    let interest = savings
        .add_interest()
        .with_context(|| format!("Interest accrual on {} failed", savings_cfg.id))?;
    tracing::info!(account = savings.id(), %interest, balance = %savings.balance(), "Savings scenario done");
    lines.push(BalanceLine::new("Final Balance", savings.balance()));

    // Polymorphism check
    let mut book = AccountBook::new();
    book.open(checking)?;
    book.open(savings)?;
    for account in book.iter() {
        lines.push(BalanceLine::new("Account Balance", account.balance()));
    }

    Ok(ScenarioOutcome { lines, book })
}
