// hookchain/src/core/callback.rs

//! Defines the callback descriptors a chain is made of, the `Block` passed to them,
//! and the two dispatch seams (`Scope` for named operations, `Delegate` for hook objects).

use crate::error::HookError;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

// --- Block / Continuation ---

/// A borrowed callable handed to callbacks as their block.
///
/// In a sequential chain this is the caller's block, forwarded unchanged to every
/// callback. In an around chain it is the continuation: calling it runs the rest of
/// the chain and, past the last callback, the terminal block.
///
/// The scope is passed back in on every call because the callback holding the block
/// also holds the only mutable borrow of it.
pub struct Block<'a, S, R, Err> {
  inner: &'a mut (dyn FnMut(&mut S) -> Result<R, Err> + 'a),
}

impl<'a, S, R, Err> Block<'a, S, R, Err> {
  pub fn new(f: &'a mut (dyn FnMut(&mut S) -> Result<R, Err> + 'a)) -> Self {
    Self { inner: f }
  }

  /// Invokes the block against `scope` and returns what it returns.
  pub fn call(&mut self, scope: &mut S) -> Result<R, Err> {
    (self.inner)(scope)
  }

  /// Borrows this block for a shorter lifetime, so it can be passed on without
  /// giving it up.
  pub fn reborrow(&mut self) -> Block<'_, S, R, Err> {
    Block { inner: &mut *self.inner }
  }
}

impl<S, R, Err> fmt::Debug for Block<'_, S, R, Err> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Block { .. }")
  }
}

// --- Dispatch Seams ---

/// A value callbacks run against.
///
/// `call_operation` is how a `Callback::NamedOperation` reaches the scope. Scopes that
/// never register named operations can rely on the default, which reports the
/// operation as unknown:
///
/// ```ignore
/// impl Scope<(), bool, HookError> for Person {}
/// ```
pub trait Scope<A: ?Sized, R, Err: From<HookError>>: Sized {
  fn call_operation(&mut self, operation: &str, args: &A, block: Option<Block<'_, Self, R, Err>>) -> Result<R, Err> {
    let _ = (args, block);
    Err(Err::from(HookError::UnknownOperation {
      operation: operation.to_string(),
      scope: std::any::type_name::<Self>(),
    }))
  }
}

/// An object registered on a chain that answers for the chain's hook.
///
/// `hook` is the name of the chain being run, so one delegate type can serve several
/// hooks and branch on the name.
pub trait Delegate<S, A: ?Sized, R, Err>: Send + Sync {
  fn call_hook(&self, hook: &str, scope: &mut S, args: &A, block: Option<Block<'_, S, R, Err>>) -> Result<R, Err>;

  /// Name shown when the chain is inspected.
  fn label(&self) -> String {
    std::any::type_name::<Self>().to_string()
  }
}

// Lets a caller keep a handle on a delegate after registering it.
impl<S, A: ?Sized, R, Err, D> Delegate<S, A, R, Err> for Arc<D>
where
  D: Delegate<S, A, R, Err> + ?Sized,
{
  fn call_hook(&self, hook: &str, scope: &mut S, args: &A, block: Option<Block<'_, S, R, Err>>) -> Result<R, Err> {
    (**self).call_hook(hook, scope, args, block)
  }

  fn label(&self) -> String {
    (**self).label()
  }
}

// --- Callback Descriptors ---

/// Type alias for an inline callback.
///
/// The scope is the closure's execution context and comes first, followed by the run
/// arguments and the block (present when the caller supplied one, and always present
/// in around mode).
pub type InlineFn<S, A: ?Sized, R, Err> =
  Arc<dyn Fn(&mut S, &A, Option<Block<'_, S, R, Err>>) -> Result<R, Err> + Send + Sync>;

/// One registered callback. The order in which callbacks are appended to a chain is
/// the order they run in.
pub enum Callback<S, A: ?Sized, R, Err> {
  /// Invoke the named operation on the scope.
  NamedOperation(String),
  /// Invoke the closure with the scope as its context.
  InlineClosure(InlineFn<S, A, R, Err>),
  /// Invoke the delegate's method for the chain's hook, passing the scope.
  Delegate(Arc<dyn Delegate<S, A, R, Err>>),
}

impl<S, A: ?Sized, R, Err> Callback<S, A, R, Err> {
  pub fn named(operation: impl Into<String>) -> Self {
    Callback::NamedOperation(operation.into())
  }

  pub fn inline<F>(f: F) -> Self
  where
    F: Fn(&mut S, &A, Option<Block<'_, S, R, Err>>) -> Result<R, Err> + Send + Sync + 'static,
  {
    Callback::InlineClosure(Arc::new(f))
  }

  pub fn delegate(delegate: impl Delegate<S, A, R, Err> + 'static) -> Self {
    Callback::Delegate(Arc::new(delegate))
  }

  /// Human-readable name used when listing a chain's callbacks.
  pub fn label(&self) -> String {
    match self {
      Callback::NamedOperation(name) => name.clone(),
      Callback::InlineClosure(_) => "<inline>".to_string(),
      Callback::Delegate(delegate) => delegate.label(),
    }
  }

  pub(crate) fn kind(&self) -> &'static str {
    match self {
      Callback::NamedOperation(_) => "named_operation",
      Callback::InlineClosure(_) => "inline_closure",
      Callback::Delegate(_) => "delegate",
    }
  }
}

// Manual impls: the payloads are Arcs, so no bounds on S, A, R or Err are needed.
impl<S, A: ?Sized, R, Err> Clone for Callback<S, A, R, Err> {
  fn clone(&self) -> Self {
    match self {
      Callback::NamedOperation(name) => Callback::NamedOperation(name.clone()),
      Callback::InlineClosure(f) => Callback::InlineClosure(Arc::clone(f)),
      Callback::Delegate(delegate) => Callback::Delegate(Arc::clone(delegate)),
    }
  }
}

impl<S, A: ?Sized, R, Err> fmt::Debug for Callback<S, A, R, Err> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Callback::NamedOperation(name) => f.debug_tuple("NamedOperation").field(name).finish(),
      Callback::InlineClosure(_) => f.write_str("InlineClosure(..)"),
      Callback::Delegate(delegate) => f.debug_tuple("Delegate").field(&delegate.label()).finish(),
    }
  }
}

// --- Operation Table ---

/// Signature of an operation stored in an `Operations` table. Inherent methods with
/// the shape `fn(&mut self, &A, Option<Block<..>>) -> Result<R, Err>` coerce to it.
pub type OperationFn<S, A: ?Sized, R, Err> = fn(&mut S, &A, Option<Block<'_, S, R, Err>>) -> Result<R, Err>;

/// A name-to-function table a `Scope` can route `call_operation` through.
///
/// ```ignore
/// impl Scope<(), bool, HookError> for Person {
///   fn call_operation(&mut self, op: &str, args: &(), block: Option<Block<'_, Self, bool, HookError>>) -> HookResult<bool> {
///     PERSON_OPERATIONS.call(self, op, args, block)
///   }
/// }
/// ```
pub struct Operations<S, A: ?Sized, R, Err> {
  table: HashMap<String, OperationFn<S, A, R, Err>>,
}

impl<S, A: ?Sized, R, Err> Operations<S, A, R, Err> {
  pub fn new() -> Self {
    Self { table: HashMap::new() }
  }

  /// Builder form of `register`.
  pub fn with(mut self, name: impl Into<String>, operation: OperationFn<S, A, R, Err>) -> Self {
    self.register(name, operation);
    self
  }

  /// Registers `operation` under `name`, replacing any earlier registration.
  pub fn register(&mut self, name: impl Into<String>, operation: OperationFn<S, A, R, Err>) {
    self.table.insert(name.into(), operation);
  }

  pub fn contains(&self, name: &str) -> bool {
    self.table.contains_key(name)
  }

  /// Registered names, sorted.
  pub fn names(&self) -> Vec<&str> {
    let mut names: Vec<&str> = self.table.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
  }

  pub fn call(&self, scope: &mut S, name: &str, args: &A, block: Option<Block<'_, S, R, Err>>) -> Result<R, Err>
  where
    Err: From<HookError>,
  {
    match self.table.get(name) {
      Some(operation) => operation(scope, args, block),
      None => Err(Err::from(HookError::UnknownOperation {
        operation: name.to_string(),
        scope: std::any::type_name::<S>(),
      })),
    }
  }
}

impl<S, A: ?Sized, R, Err> Default for Operations<S, A, R, Err> {
  fn default() -> Self {
    Self::new()
  }
}
