// hookchain/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
  #[error("Hook '{hook}' runs around a block, but no block was given")]
  InvalidInvocation { hook: String },

  #[error("Operation '{operation}' is not defined on scope {scope}")]
  UnknownOperation { operation: String, scope: &'static str },

  #[error("Hook not defined: {hook}")]
  UnknownHook { hook: String },

  #[error("Hook already defined: {hook}")]
  DuplicateHook { hook: String },

  #[error("Terminal block of hook '{hook}' failed and cannot be invoked again")]
  TerminalFailed { hook: String },

  #[error("Error in user-provided callback. Source: {source}")]
  HandlerError {
    #[source]
    source: AnyhowError,
  },
}

// Lets callbacks written against `anyhow` use `?` directly inside a chain whose
// error type is `HookError`.
impl From<AnyhowError> for HookError {
  fn from(err: AnyhowError) -> Self {
    HookError::HandlerError { source: err }
  }
}

pub type HookResult<T, E = HookError> = std::result::Result<T, E>;
