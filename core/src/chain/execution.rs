// hookchain/src/chain/execution.rs

//! Contains `Chain::run()`, which dispatches every callback of a chain against a scope
//! and records what they return. Sequential chains run callbacks one after another;
//! around chains nest each callback inside the previous one through a continuation.

use crate::chain::definition::Chain;
use crate::core::callback::{Block, Callback, Scope};
use crate::core::control::Falsey;
use crate::core::ledger::Ledger;
use crate::error::HookError;
use tracing::{event, instrument, span, Level};

impl<S, A, R, Err> Chain<S, A, R, Err>
where
  A: ?Sized,
  S: Scope<A, R, Err>,
  R: Falsey + Clone,
  Err: From<HookError>,
{
  /// Runs every callback of the chain against `scope` and returns the `Ledger` of
  /// their results.
  ///
  /// In a sequential chain `block` is optional and forwarded to every callback as is.
  /// In an around chain it is required: it is the terminal block the callbacks wrap,
  /// and running without one fails with `HookError::InvalidInvocation` before any
  /// callback executes.
  ///
  /// Any error returned by a callback is passed through unchanged and the partial
  /// ledger is dropped.
  #[instrument(
    name = "Chain::run",
    skip_all,
    fields(
      hook = %self.options.name,
      around = self.options.around,
      halts_on_falsey = self.options.halts_on_falsey,
      num_callbacks = self.callbacks.len(),
    )
  )]
  pub fn run(&self, scope: &mut S, args: &A, block: Option<Block<'_, S, R, Err>>) -> Result<Ledger<R>, Err> {
    event!(Level::DEBUG, "Hook run starting.");

    if !self.options.around {
      return self.run_sequential(scope, args, block);
    }

    match block {
      Some(terminal) => self.run_around(scope, args, terminal),
      None => Err(Err::from(HookError::InvalidInvocation {
        hook: self.options.name.clone(),
      })),
    }
  }

  /// Same as `run`, taking the block as a closure.
  pub fn run_with<F>(&self, scope: &mut S, args: &A, mut block: F) -> Result<Ledger<R>, Err>
  where
    F: FnMut(&mut S) -> Result<R, Err>,
  {
    self.run(scope, args, Some(Block::new(&mut block)))
  }

  fn run_sequential(&self, scope: &mut S, args: &A, mut block: Option<Block<'_, S, R, Err>>) -> Result<Ledger<R>, Err> {
    let mut ledger = Ledger::new();

    for (callback_idx, callback) in self.callbacks.iter().enumerate() {
      let forwarded = block.as_mut().map(|b| b.reborrow());
      let value = self.dispatch(callback_idx, callback, scope, args, forwarded)?;

      if self.halts_on(&value) {
        event!(Level::DEBUG, callback_index = callback_idx, "Chain halted by a falsey result.");
        ledger.halt();
        return Ok(ledger);
      }
      ledger.push(value);
    }

    event!(Level::DEBUG, recorded = ledger.len(), "Hook run completed.");
    Ok(ledger)
  }

  fn run_around(&self, scope: &mut S, args: &A, terminal: Block<'_, S, R, Err>) -> Result<Ledger<R>, Err> {
    let mut run = AroundRun {
      chain: self,
      args,
      terminal: Terminal::Pending(terminal),
      slots: Vec::with_capacity(self.callbacks.len()),
      halted_with: None,
    };

    // The value the outermost callback (or, for an empty chain, the terminal block)
    // returns is already recorded in its slot.
    run.invoke_from(0, scope)?;

    if matches!(run.terminal, Terminal::Pending(_)) && run.halted_with.is_none() {
      event!(Level::DEBUG, "Around chain stopped before reaching the terminal block.");
    }
    let ledger = run.into_ledger();
    event!(Level::DEBUG, recorded = ledger.len(), halted = ledger.is_halted(), "Hook run completed.");
    Ok(ledger)
  }

  fn dispatch(
    &self,
    callback_idx: usize,
    callback: &Callback<S, A, R, Err>,
    scope: &mut S,
    args: &A,
    block: Option<Block<'_, S, R, Err>>,
  ) -> Result<R, Err> {
    let callback_span = span!(
      Level::DEBUG,
      "callback_dispatch",
      callback_index = callback_idx,
      kind = callback.kind()
    );
    let _callback_span_guard = callback_span.enter();
    event!(Level::TRACE, has_block = block.is_some(), "Dispatching callback.");

    match callback {
      Callback::NamedOperation(operation) => scope.call_operation(operation, args, block),
      Callback::InlineClosure(f) => f(scope, args, block),
      Callback::Delegate(delegate) => delegate.call_hook(&self.options.name, scope, args, block),
    }
  }

  fn halts_on(&self, value: &R) -> bool {
    self.options.halts_on_falsey && value.is_falsey()
  }
}

// --- Around Mode ---

enum Terminal<'t, S, R, Err> {
  Pending(Block<'t, S, R, Err>),
  Fired(R),
  Failed,
}

/// State of one around-mode run.
///
/// Each dispatch reserves a slot when it starts, so results come out in chain order
/// even though inner callbacks return before outer ones. Once a callback halts the
/// chain, `halted_with` holds its value and continuations stop dispatching.
struct AroundRun<'r, 't, S, A: ?Sized, R, Err> {
  chain: &'r Chain<S, A, R, Err>,
  args: &'r A,
  terminal: Terminal<'t, S, R, Err>,
  slots: Vec<Option<R>>,
  halted_with: Option<R>,
}

impl<S, A, R, Err> AroundRun<'_, '_, S, A, R, Err>
where
  A: ?Sized,
  S: Scope<A, R, Err>,
  R: Falsey + Clone,
  Err: From<HookError>,
{
  /// Runs the chain from `callback_idx` on. Past the last callback this fires the
  /// terminal block. After a halt it dispatches nothing and hands back the halting
  /// value.
  fn invoke_from(&mut self, callback_idx: usize, scope: &mut S) -> Result<R, Err> {
    if let Some(halting) = &self.halted_with {
      event!(Level::TRACE, callback_index = callback_idx, "Chain already halted, skipping continuation.");
      return Ok(halting.clone());
    }

    let chain = self.chain;
    let args = self.args;

    let Some(callback) = chain.callbacks.get(callback_idx) else {
      return self.fire_terminal(scope);
    };

    let slot = self.slots.len();
    self.slots.push(None);

    let value = {
      let mut next = |scope: &mut S| self.invoke_from(callback_idx + 1, scope);
      chain.dispatch(callback_idx, callback, scope, args, Some(Block::new(&mut next)))?
    };

    if chain.halts_on(&value) {
      event!(Level::DEBUG, callback_index = callback_idx, "Chain halted by a falsey result.");
      if self.halted_with.is_none() {
        self.halted_with = Some(value.clone());
      }
    } else {
      self.slots[slot] = Some(value.clone());
    }
    Ok(value)
  }

  /// Fires the terminal block at most once per run. Later calls get the first result.
  fn fire_terminal(&mut self, scope: &mut S) -> Result<R, Err> {
    match std::mem::replace(&mut self.terminal, Terminal::Failed) {
      Terminal::Pending(mut terminal) => {
        event!(Level::TRACE, depth = self.slots.len(), "Firing terminal block.");
        let value = terminal.call(scope)?;
        self.terminal = Terminal::Fired(value.clone());
        Ok(value)
      }
      Terminal::Fired(value) => {
        event!(Level::TRACE, "Terminal block already fired, reusing its result.");
        self.terminal = Terminal::Fired(value.clone());
        Ok(value)
      }
      Terminal::Failed => Err(Err::from(HookError::TerminalFailed {
        hook: self.chain.options.name.clone(),
      })),
    }
  }

  fn into_ledger(self) -> Ledger<R> {
    let mut ledger = Ledger::new();
    ledger.extend(self.slots.into_iter().flatten());
    if self.halted_with.is_some() {
      ledger.halt();
    }
    ledger
  }
}
