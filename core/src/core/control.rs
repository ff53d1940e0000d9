// hookchain/src/core/control.rs

//! Defines signals for controlling chain flow and the outcome of a hook run.

/// Signal a callback can return to explicitly continue or halt a chain.
///
/// Only meaningful for chains built with `halts_on_falsey`; other chains record it
/// like any other value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookControl {
  /// Keep running the remaining callbacks.
  Continue,
  /// Halt the chain. The halting callback's value is not recorded.
  Halt,
}

/// Outcome of a full hook run, as reported by `Ledger::outcome`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
  /// No callback halted the chain. In around mode this includes runs that stopped
  /// early because a callback never invoked its continuation.
  Completed,
  /// A callback returned a falsey value on a `halts_on_falsey` chain.
  Halted,
}

/// Truthiness of a callback's return value, consulted by `halts_on_falsey` chains.
///
/// Boolean `false`, `Option::None` and `HookControl::Halt` are falsey. Every other
/// built-in value, including `()`, zero and the empty string, is not.
pub trait Falsey {
  fn is_falsey(&self) -> bool;
}

impl Falsey for bool {
  fn is_falsey(&self) -> bool {
    !*self
  }
}

impl<T> Falsey for Option<T> {
  fn is_falsey(&self) -> bool {
    self.is_none()
  }
}

impl Falsey for HookControl {
  fn is_falsey(&self) -> bool {
    matches!(self, HookControl::Halt)
  }
}

impl<T: Falsey + ?Sized> Falsey for &T {
  fn is_falsey(&self) -> bool {
    (**self).is_falsey()
  }
}

macro_rules! never_falsey {
  ($($ty:ty),* $(,)?) => {
    $(
      impl Falsey for $ty {
        fn is_falsey(&self) -> bool {
          false
        }
      }
    )*
  };
}

never_falsey!(
  (),
  str,
  String,
  char,
  i8,
  i16,
  i32,
  i64,
  i128,
  isize,
  u8,
  u16,
  u32,
  u64,
  u128,
  usize,
  f32,
  f64,
);

impl<T> Falsey for Vec<T> {
  fn is_falsey(&self) -> bool {
    false
  }
}
