pub mod callback;
pub mod control;
pub mod ledger;

// Re-export key types for easier access from other modules (and lib.rs)
pub use callback::{Block, Callback, Delegate, InlineFn, OperationFn, Operations, Scope};
pub use control::{Falsey, HookControl, RunOutcome};
pub use ledger::Ledger;
