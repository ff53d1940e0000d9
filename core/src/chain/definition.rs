// hookchain/src/chain/definition.rs

//! Contains the `Chain<S, A, R, Err>` struct, its `HookOptions`, and the methods for
//! building and inspecting it.

use crate::core::callback::{Block, Callback, Delegate};
use crate::error::HookError;
use std::fmt;
use std::ops::Deref;
use std::slice;

/// Configuration of a chain, fixed when the chain is created.
///
/// ```ignore
/// let options = HookOptions::new("around_eating").around(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookOptions {
  /// Name of the hook. Delegates are called with it.
  pub name: String,
  /// Halt the run as soon as a callback returns a falsey value.
  pub halts_on_falsey: bool,
  /// Run callbacks nested around a terminal block instead of one after another.
  pub around: bool,
}

impl HookOptions {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      halts_on_falsey: false,
      around: false,
    }
  }

  pub fn halts_on_falsey(mut self, halts_on_falsey: bool) -> Self {
    self.halts_on_falsey = halts_on_falsey;
    self
  }

  pub fn around(mut self, around: bool) -> Self {
    self.around = around;
    self
  }
}

impl From<&str> for HookOptions {
  fn from(name: &str) -> Self {
    HookOptions::new(name)
  }
}

impl From<String> for HookOptions {
  fn from(name: String) -> Self {
    HookOptions::new(name)
  }
}

/// An ordered sequence of callbacks for one hook.
///
/// - `S` is the scope the callbacks run against.
/// - `A` is the argument type passed to every callback (may be unsized, e.g. `[String]`).
/// - `R` is the value each callback returns; it is recorded in the `Ledger`.
/// - `Err` is the callbacks' error type. It must be `From<HookError>` to run the chain,
///   so the chain's own failures can be reported in it.
///
/// Callbacks run in the order they were appended. A chain is built once and then run
/// any number of times; runs only read it.
pub struct Chain<S, A: ?Sized, R, Err = HookError> {
  pub(crate) options: HookOptions,
  pub(crate) callbacks: Vec<Callback<S, A, R, Err>>,
}

impl<S, A: ?Sized, R, Err> Chain<S, A, R, Err> {
  /// Creates an empty chain. Accepts a `HookOptions` or just the hook name.
  pub fn new(options: impl Into<HookOptions>) -> Self {
    Self {
      options: options.into(),
      callbacks: Vec::new(),
    }
  }

  pub fn name(&self) -> &str {
    &self.options.name
  }

  pub fn options(&self) -> &HookOptions {
    &self.options
  }

  pub fn is_around(&self) -> bool {
    self.options.around
  }

  pub fn halts_on_falsey(&self) -> bool {
    self.options.halts_on_falsey
  }

  // --- Appending Callbacks ---

  /// Adds a callback to the end of the chain.
  pub fn append(&mut self, callback: Callback<S, A, R, Err>) -> &mut Self {
    self.callbacks.push(callback);
    self
  }

  /// Appends a callback that invokes `operation` on the scope.
  pub fn append_named(&mut self, operation: impl Into<String>) -> &mut Self {
    self.append(Callback::named(operation))
  }

  /// Appends a closure that runs with the scope as its context.
  pub fn append_inline<F>(&mut self, f: F) -> &mut Self
  where
    F: Fn(&mut S, &A, Option<Block<'_, S, R, Err>>) -> Result<R, Err> + Send + Sync + 'static,
  {
    self.append(Callback::inline(f))
  }

  /// Appends an object whose `call_hook` is invoked with this chain's name.
  pub fn append_delegate(&mut self, delegate: impl Delegate<S, A, R, Err> + 'static) -> &mut Self {
    self.append(Callback::delegate(delegate))
  }

  // --- Inspection ---

  pub fn len(&self) -> usize {
    self.callbacks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.callbacks.is_empty()
  }

  pub fn iter(&self) -> slice::Iter<'_, Callback<S, A, R, Err>> {
    self.callbacks.iter()
  }

  pub fn callbacks(&self) -> &[Callback<S, A, R, Err>] {
    &self.callbacks
  }

  /// Labels of the registered callbacks, in run order.
  pub fn labels(&self) -> Vec<String> {
    self.callbacks.iter().map(Callback::label).collect()
  }
}

impl<S, A: ?Sized, R, Err> Deref for Chain<S, A, R, Err> {
  type Target = [Callback<S, A, R, Err>];

  fn deref(&self) -> &Self::Target {
    &self.callbacks
  }
}

impl<'c, S, A: ?Sized, R, Err> IntoIterator for &'c Chain<S, A, R, Err> {
  type Item = &'c Callback<S, A, R, Err>;
  type IntoIter = slice::Iter<'c, Callback<S, A, R, Err>>;

  fn into_iter(self) -> Self::IntoIter {
    self.callbacks.iter()
  }
}

impl<S, A: ?Sized, R, Err> Extend<Callback<S, A, R, Err>> for Chain<S, A, R, Err> {
  fn extend<I: IntoIterator<Item = Callback<S, A, R, Err>>>(&mut self, iter: I) {
    self.callbacks.extend(iter);
  }
}

// Cloning copies the descriptor list; closure and delegate payloads are shared.
impl<S, A: ?Sized, R, Err> Clone for Chain<S, A, R, Err> {
  fn clone(&self) -> Self {
    Self {
      options: self.options.clone(),
      callbacks: self.callbacks.clone(),
    }
  }
}

impl<S, A: ?Sized, R, Err> fmt::Debug for Chain<S, A, R, Err> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Chain")
      .field("options", &self.options)
      .field("callbacks", &self.callbacks)
      .finish()
  }
}
