//! # Book Module
//!
//! `AccountBook` - an ordered, heterogeneous collection of accounts
//! addressed only through the [`Account`] capability.

use crate::account::{Account, AccountSnapshot};
use crate::error::{AccountError, AccountResult};
use rust_decimal::Decimal;

/// Sổ tài khoản
#[derive(Debug, Default)]
pub struct AccountBook {
    accounts: Vec<Box<dyn Account>>,
}

impl AccountBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account. Ids are unique within a book.
    pub fn open<A: Account + 'static>(&mut self, account: A) -> AccountResult<()> {
        self.open_boxed(Box::new(account))
    }

    pub fn open_boxed(&mut self, account: Box<dyn Account>) -> AccountResult<()> {
        if self.contains(account.id()) {
            return Err(AccountError::DuplicateAccount(account.id().to_string()));
        }

        tracing::debug!(account = account.id(), kind = %account.kind(), "Account added to book");
        self.accounts.push(account);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.accounts.iter().any(|a| a.id() == id)
    }

    pub fn get(&self, id: &str) -> Option<&dyn Account> {
        self.accounts
            .iter()
            .find(|a| a.id() == id)
            .map(|a| a.as_ref())
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut dyn Account> {
        let account = self.accounts.iter_mut().find(|a| a.id() == id)?;
        Some(account.as_mut())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Account> {
        self.accounts.iter().map(|a| a.as_ref() as &dyn Account)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// `(id, balance)` pairs in insertion order
    pub fn balances(&self) -> Vec<(&str, Decimal)> {
        self.iter().map(|a| (a.id(), a.balance())).collect()
    }

    pub fn total_balance(&self) -> Decimal {
        self.iter().map(|a| a.balance()).sum()
    }

    pub fn snapshots(&self) -> Vec<AccountSnapshot> {
        self.iter().map(|a| a.snapshot()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BankAccount, SavingsAccount};
    use rust_decimal_macros::dec;

    fn sample_book() -> AccountBook {
        let mut book = AccountBook::new();
        book.open(BankAccount::new("A1001", dec!(1200)).unwrap())
            .unwrap();
        book.open(SavingsAccount::new("S2001", dec!(2625), dec!(0.05)).unwrap())
            .unwrap();
        book
    }

    #[test]
    fn test_balances_in_insertion_order() {
        let book = sample_book();
        assert_eq!(book.len(), 2);
        assert_eq!(
            book.balances(),
            vec![("A1001", dec!(1200)), ("S2001", dec!(2625))]
        );
        assert_eq!(book.total_balance(), dec!(3825));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut book = sample_book();
        let result = book.open(BankAccount::new("S2001", dec!(1)).unwrap());
        assert_eq!(
            result,
            Err(AccountError::DuplicateAccount("S2001".to_string()))
        );
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_get_and_mutate_through_capability() {
        let mut book = sample_book();

        let savings: &mut dyn Account = book.get_mut("S2001").unwrap();
        savings.withdraw(dec!(625)).unwrap();
        savings.deposit(dec!(25)).unwrap();
        assert_eq!(book.get("S2001").unwrap().balance(), dec!(2025));

        assert!(book.get("missing").is_none());
        assert!(book.get_mut("missing").is_none());
    }

    #[test]
    fn test_empty_book() {
        let book = AccountBook::new();
        assert!(book.is_empty());
        assert_eq!(book.total_balance(), Decimal::ZERO);
        assert!(book.snapshots().is_empty());
    }

    #[test]
    fn test_snapshots_report_rate() {
        let book = sample_book();
        let snapshots = book.snapshots();
        assert_eq!(snapshots[0].rate, None);
        assert_eq!(snapshots[1].rate, Some(dec!(0.05)));
    }
}
