//! Client-side payee cache.
//!
//! The server owns the payee list. The cache is seeded from the page
//! bootstrap document and changes only at explicit points: `insert` after a
//! confirmed create and `remove` after a confirmed delete.

use crate::{Payee, PayeeId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayeeCache {
    payees: Vec<Payee>,
}

impl PayeeCache {
    pub fn new(payees: Vec<Payee>) -> Self {
        Self { payees }
    }

    pub fn payees(&self) -> &[Payee] {
        &self.payees
    }

    pub fn iter(&self) -> impl Iterator<Item = &Payee> {
        self.payees.iter()
    }

    pub fn get(&self, id: PayeeId) -> Option<&Payee> {
        self.payees.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.payees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payees.is_empty()
    }

    /// Append a payee, or replace the entry with the same id.
    pub fn insert(&mut self, payee: Payee) {
        match self.payees.iter_mut().find(|p| p.id == payee.id) {
            Some(existing) => *existing = payee,
            None => self.payees.push(payee),
        }
    }

    pub fn remove(&mut self, id: PayeeId) -> Option<Payee> {
        let index = self.payees.iter().position(|p| p.id == id)?;
        Some(self.payees.remove(index))
    }

}

/// Trim a user-typed payee name; `None` when nothing is left.
pub fn normalize_payee_name(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
