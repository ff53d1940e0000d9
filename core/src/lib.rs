// src/lib.rs

//! hookchain: an ordered callback-chain engine for Rust.
//!
//! A hook is a named chain of callbacks run against a scope. hookchain offers:
//!  - Three kinds of callbacks: named operations on the scope, inline closures that
//!    take the scope as their context, and delegate objects answering for the hook.
//!  - A `Ledger` of every callback's return value for each run.
//!  - Halting on the first falsey result (`halts_on_falsey`).
//!  - Around hooks, where each callback wraps the rest of the chain and a terminal
//!    block through an explicit continuation.
//!  - A `HookSet` registry for defining hooks by name and running them later.

pub mod chain;
pub mod core;
pub mod error;
pub mod registry;

// --- Re-exports for the Public API ---

// Core types that users will interact with frequently
pub use crate::core::callback::{Block, Callback, Delegate, InlineFn, OperationFn, Operations, Scope};
pub use crate::core::control::{Falsey, HookControl, RunOutcome};
pub use crate::core::ledger::Ledger;

// The Chain struct and its configuration
pub use crate::chain::definition::{Chain, HookOptions};

pub use crate::error::{HookError, HookResult};

// The registry of named hooks
pub use crate::registry::HookSet;

/*
    Core Workflow:
    1. Pick a scope type `S` and implement `Scope<A, R, Err>` for it. Route
       `call_operation` through an `Operations` table if you register named operations;
       otherwise an empty impl is enough.
    2. Create a `Chain::<S, A, R, Err>::new(HookOptions::new("before_save"))`, optionally
       with `.halts_on_falsey(true)` or `.around(true)`.
    3. Append callbacks with `.append_named()`, `.append_inline()` or `.append_delegate()`.
    4. Call `chain.run(&mut scope, &args, block)` and inspect the returned `Ledger`.
       Around chains need a block: it is the terminal the callbacks wrap.
    5. For hooks defined by name, use a `HookSet`: `define_hook`, `add_callback`, `run_hook`.
*/
