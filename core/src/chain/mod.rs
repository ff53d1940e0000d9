// hookchain/src/chain/mod.rs

//! Defines the `Chain<S, A, R, Err>` struct, its construction, and execution logic.

pub mod definition;
pub mod execution;

// Re-export the main Chain struct
pub use definition::{Chain, HookOptions};
