//! Insertion-ordered allocation ledger

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::amount::FixedPointAmount;

/// Accumulated airdrop amount for one address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Lowercase `0x`-prefixed address
    pub address: String,
    /// Sum of all tokens bought and bonus tokens for the address
    pub amount: FixedPointAmount,
}

/// Deduplicated mapping from address to allocation that remembers first-seen order
///
/// Entries live in a vector in insertion order; a hash index maps each address
/// to its slot so repeats are folded into the existing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationLedger {
    entries: Vec<Allocation>,
    index: HashMap<String, usize>,
}

impl AllocationLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `address`, inserting it at the end if it is new.
    ///
    /// Returns `true` when the address was already present.
    pub fn credit(&mut self, address: String, amount: FixedPointAmount) -> bool {
        match self.index.get(&address) {
            Some(&slot) => {
                self.entries[slot].amount += amount;
                true
            }
            None => {
                self.index.insert(address.clone(), self.entries.len());
                self.entries.push(Allocation { address, amount });
                false
            }
        }
    }

    /// Amount allocated to an address
    pub fn get(&self, address: &str) -> Option<&FixedPointAmount> {
        self.index
            .get(address)
            .map(|&slot| &self.entries[slot].amount)
    }

    pub fn contains(&self, address: &str) -> bool {
        self.index.contains_key(address)
    }

    /// Number of distinct addresses
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All allocations in first-seen order
    pub fn entries(&self) -> &[Allocation] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Allocation> {
        self.entries.iter()
    }

    /// Sum of every allocation
    pub fn total(&self) -> FixedPointAmount {
        self.entries.iter().map(|a| &a.amount).sum()
    }
}

impl<'a> IntoIterator for &'a AllocationLedger {
    type Item = &'a Allocation;
    type IntoIter = std::slice::Iter<'a, Allocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
