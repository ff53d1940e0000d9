// hookchain/src/registry.rs

//! Defines `HookSet`, a registry of named hooks. Hooks are defined once during setup,
//! callbacks are attached to them by name, and the set then runs them by name.

use crate::chain::definition::{Chain, HookOptions};
use crate::core::callback::{Block, Callback, Scope};
use crate::core::control::Falsey;
use crate::core::ledger::Ledger;
use crate::error::{HookError, HookResult};

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use tracing::{event, instrument, Level};

/// A set of named hooks sharing one scope, argument, result and error type.
///
/// This is the registration layer for chains: the host defines its hooks
/// (`define_hook`), attaches callbacks to them (`add_callback`), and later runs them
/// (`run_hook`). A forked set starts as a copy of its parent, the way a subtype
/// inherits the hooks of its parent type.
///
/// A run works on a snapshot of the hook taken when it starts. Callbacks may run other
/// hooks of the same set, define hooks or add callbacks; additions show up on the next
/// run.
pub struct HookSet<S, A: ?Sized, R, Err = HookError> {
  hooks: RwLock<HashMap<String, Chain<S, A, R, Err>>>,
}

impl<S, A: ?Sized, R, Err> HookSet<S, A, R, Err> {
  /// Creates a new, empty set.
  pub fn new() -> Self {
    Self {
      hooks: RwLock::new(HashMap::new()),
    }
  }

  /// Defines a hook. Fails with `HookError::DuplicateHook` if the name is taken.
  pub fn define_hook(&self, options: impl Into<HookOptions>) -> HookResult<()> {
    let options = options.into();
    let mut hooks = self.hooks.write();
    if hooks.contains_key(&options.name) {
      return Err(HookError::DuplicateHook { hook: options.name });
    }
    event!(
      Level::DEBUG,
      hook = %options.name,
      around = options.around,
      halts_on_falsey = options.halts_on_falsey,
      "Hook defined."
    );
    hooks.insert(options.name.clone(), Chain::new(options));
    Ok(())
  }

  /// Defines several hooks with default options.
  pub fn define_hooks<I, N>(&self, names: I) -> HookResult<()>
  where
    I: IntoIterator<Item = N>,
    N: Into<String>,
  {
    for name in names {
      self.define_hook(HookOptions::new(name))?;
    }
    Ok(())
  }

  /// Appends `callback` to the hook named `hook`.
  pub fn add_callback(&self, hook: &str, callback: Callback<S, A, R, Err>) -> HookResult<()> {
    let mut hooks = self.hooks.write();
    let chain = hooks.get_mut(hook).ok_or_else(|| HookError::UnknownHook {
      hook: hook.to_string(),
    })?;
    event!(Level::DEBUG, %hook, callback = %callback.label(), "Callback added.");
    chain.append(callback);
    Ok(())
  }

  /// Snapshot of the callbacks registered for `hook`, in run order.
  pub fn callbacks_for_hook(&self, hook: &str) -> HookResult<Vec<Callback<S, A, R, Err>>> {
    self
      .hooks
      .read()
      .get(hook)
      .map(|chain| chain.callbacks().to_vec())
      .ok_or_else(|| HookError::UnknownHook {
        hook: hook.to_string(),
      })
  }

  pub fn options_for_hook(&self, hook: &str) -> HookResult<HookOptions> {
    self
      .hooks
      .read()
      .get(hook)
      .map(|chain| chain.options().clone())
      .ok_or_else(|| HookError::UnknownHook {
        hook: hook.to_string(),
      })
  }

  pub fn is_defined(&self, hook: &str) -> bool {
    self.hooks.read().contains_key(hook)
  }

  /// Names of all defined hooks, sorted.
  pub fn hook_names(&self) -> Vec<String> {
    let mut names: Vec<String> = self.hooks.read().keys().cloned().collect();
    names.sort_unstable();
    names
  }

  /// Returns an independent copy of this set. Hooks and callbacks added to either
  /// copy afterwards are not seen by the other.
  pub fn fork(&self) -> Self {
    Self {
      hooks: RwLock::new(self.hooks.read().clone()),
    }
  }
}

impl<S, A, R, Err> HookSet<S, A, R, Err>
where
  A: ?Sized,
  S: Scope<A, R, Err>,
  R: Falsey + Clone,
  Err: From<HookError>,
{
  /// Runs the hook named `hook`. See `Chain::run`.
  #[instrument(name = "HookSet::run_hook", skip_all, fields(hook = %hook))]
  pub fn run_hook(&self, hook: &str, scope: &mut S, args: &A, block: Option<Block<'_, S, R, Err>>) -> Result<Ledger<R>, Err> {
    // The lock is released before any callback runs.
    let chain = {
      let hooks = self.hooks.read();
      hooks.get(hook).cloned().ok_or_else(|| {
        Err::from(HookError::UnknownHook {
          hook: hook.to_string(),
        })
      })?
    };
    chain.run(scope, args, block)
  }

  /// Same as `run_hook`, taking the block as a closure.
  pub fn run_hook_with<F>(&self, hook: &str, scope: &mut S, args: &A, mut block: F) -> Result<Ledger<R>, Err>
  where
    F: FnMut(&mut S) -> Result<R, Err>,
  {
    self.run_hook(hook, scope, args, Some(Block::new(&mut block)))
  }
}

impl<S, A: ?Sized, R, Err> Default for HookSet<S, A, R, Err> {
  fn default() -> Self {
    Self::new()
  }
}

impl<S, A: ?Sized, R, Err> fmt::Debug for HookSet<S, A, R, Err> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("HookSet").field("hooks", &self.hook_names()).finish()
  }
}
