// hookchain/src/core/ledger.rs

//! Defines the `Ledger<R>` returned by every hook run.

use super::control::RunOutcome;
use std::ops::Deref;

/// Ordered record of the values returned by the callbacks of one run, plus whether
/// the run was halted.
///
/// A fresh ledger is created at the start of each run and handed to the caller on
/// return. It derefs to a slice of the recorded values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger<R> {
  chain: Vec<R>,
  halted: bool,
}

impl<R> Ledger<R> {
  pub fn new() -> Self {
    Self {
      chain: Vec::new(),
      halted: false,
    }
  }

  /// Appends a callback's return value.
  pub fn push(&mut self, value: R) {
    self.chain.push(value);
  }

  /// Marks the run as halted. Calling it again has no further effect.
  pub fn halt(&mut self) -> &mut Self {
    self.halted = true;
    self
  }

  /// Returns true if a callback halted the chain, i.e. not all callbacks ran.
  pub fn is_halted(&self) -> bool {
    self.halted
  }

  pub fn is_not_halted(&self) -> bool {
    !self.halted
  }

  pub fn outcome(&self) -> RunOutcome {
    if self.halted {
      RunOutcome::Halted
    } else {
      RunOutcome::Completed
    }
  }

  /// The recorded values, in callback order.
  pub fn chain(&self) -> &[R] {
    &self.chain
  }

  pub fn into_chain(self) -> Vec<R> {
    self.chain
  }
}

impl<R> Default for Ledger<R> {
  fn default() -> Self {
    Self::new()
  }
}

impl<R> Deref for Ledger<R> {
  type Target = [R];

  fn deref(&self) -> &[R] {
    &self.chain
  }
}

impl<R> Extend<R> for Ledger<R> {
  fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
    self.chain.extend(iter);
  }
}
