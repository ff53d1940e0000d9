// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use hookchain::{Block, Delegate, HookError, Operations, Scope};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracing::Level;

pub type Args = [&'static str];
pub type Out = Option<String>;

// --- Common Scope ---
#[derive(Clone, Debug, Default)]
pub struct TestScope {
  pub log: Vec<String>,
  pub depth: usize,
  pub depth_at_terminal: Option<usize>,
  pub terminal_calls: usize,
}

impl TestScope {
  fn wash_hands(&mut self, _args: &Args, _block: Option<Block<'_, Self, Out, TestError>>) -> Result<Out, TestError> {
    self.log.push("wash_hands".to_string());
    Ok(Some("washed_hands".to_string()))
  }

  fn locate_food(&mut self, _args: &Args, _block: Option<Block<'_, Self, Out, TestError>>) -> Result<Out, TestError> {
    self.log.push("locate_food".to_string());
    Ok(None)
  }

  fn sit_down(&mut self, _args: &Args, _block: Option<Block<'_, Self, Out, TestError>>) -> Result<Out, TestError> {
    self.log.push("sit_down".to_string());
    Ok(Some("sat_down".to_string()))
  }

  fn echo_args(&mut self, args: &Args, _block: Option<Block<'_, Self, Out, TestError>>) -> Result<Out, TestError> {
    self.log.push("echo_args".to_string());
    Ok(Some(args.join(",")))
  }

  // Calls the block once if there is one, like a method that yields.
  fn yield_block(&mut self, _args: &Args, block: Option<Block<'_, Self, Out, TestError>>) -> Result<Out, TestError> {
    self.log.push("yield_block".to_string());
    match block {
      Some(mut block) => {
        self.depth += 1;
        let value = block.call(self);
        self.depth -= 1;
        value
      }
      None => Ok(Some("no_block".to_string())),
    }
  }

  fn explode(&mut self, _args: &Args, _block: Option<Block<'_, Self, Out, TestError>>) -> Result<Out, TestError> {
    self.log.push("explode".to_string());
    Err(TestError::Callback("explode".to_string()))
  }
}

pub static TEST_OPERATIONS: Lazy<Operations<TestScope, Args, Out, TestError>> = Lazy::new(|| {
  Operations::new()
    .with("wash_hands", TestScope::wash_hands)
    .with("locate_food", TestScope::locate_food)
    .with("sit_down", TestScope::sit_down)
    .with("echo_args", TestScope::echo_args)
    .with("yield_block", TestScope::yield_block)
    .with("explode", TestScope::explode)
});

impl Scope<Args, Out, TestError> for TestScope {
  fn call_operation(
    &mut self,
    operation: &str,
    args: &Args,
    block: Option<Block<'_, Self, Out, TestError>>,
  ) -> Result<Out, TestError> {
    TEST_OPERATIONS.call(self, operation, args, block)
  }
}

// A scope with no named operations at all.
#[derive(Clone, Debug, Default)]
pub struct PlainScope {
  pub visits: Vec<usize>,
}

impl Scope<(), bool, HookError> for PlainScope {}

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)] // Clone, PartialEq, Eq for assertions
pub enum TestError {
  #[error("Hook framework error: {0}")]
  Hook(String), // Store as String for Eq comparison

  #[error("Test callback failed: {0}")]
  Callback(String),
}

impl From<HookError> for TestError {
  fn from(he: HookError) -> Self {
    TestError::Hook(format!("{:?}", he))
  }
}

// --- Common Delegate ---

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelegateCall {
  pub hook: String,
  pub args: Vec<String>,
  pub had_block: bool,
}

/// Records every call and yields to the block when one is given.
#[derive(Debug, Default)]
pub struct RecordingDelegate {
  pub calls: Mutex<Vec<DelegateCall>>,
}

impl RecordingDelegate {
  pub fn calls(&self) -> Vec<DelegateCall> {
    self.calls.lock().clone()
  }
}

impl Delegate<TestScope, Args, Out, TestError> for RecordingDelegate {
  fn call_hook(
    &self,
    hook: &str,
    scope: &mut TestScope,
    args: &Args,
    block: Option<Block<'_, TestScope, Out, TestError>>,
  ) -> Result<Out, TestError> {
    self.calls.lock().push(DelegateCall {
      hook: hook.to_string(),
      args: args.iter().map(|a| a.to_string()).collect(),
      had_block: block.is_some(),
    });
    scope.log.push(format!("delegate:{hook}"));
    match block {
      Some(mut block) => {
        scope.depth += 1;
        let value = block.call(scope);
        scope.depth -= 1;
        value
      }
      None => Ok(Some(format!("delegated:{hook}"))),
    }
  }

  fn label(&self) -> String {
    "RecordingDelegate".to_string()
  }
}

// --- Common Callback Creators ---

/// Inline callback that logs `name` and returns it.
pub fn logging_callback(
  name: &'static str,
) -> impl Fn(&mut TestScope, &Args, Option<Block<'_, TestScope, Out, TestError>>) -> Result<Out, TestError> + Send + Sync + 'static
{
  move |scope, _args, _block| {
    scope.log.push(name.to_string());
    Ok(Some(name.to_string()))
  }
}

/// Inline callback for around chains: logs `name`, calls the continuation once and
/// returns `name`.
pub fn wrapping_callback(
  name: &'static str,
) -> impl Fn(&mut TestScope, &Args, Option<Block<'_, TestScope, Out, TestError>>) -> Result<Out, TestError> + Send + Sync + 'static
{
  move |scope, _args, block| {
    scope.log.push(format!("{name}:enter"));
    if let Some(mut next) = block {
      scope.depth += 1;
      next.call(scope)?;
      scope.depth -= 1;
    }
    scope.log.push(format!("{name}:exit"));
    Ok(Some(name.to_string()))
  }
}

/// Terminal block that counts its calls and remembers the nesting depth it ran at.
pub fn counting_terminal(scope: &mut TestScope) -> Result<Out, TestError> {
  scope.terminal_calls += 1;
  scope.depth_at_terminal = Some(scope.depth);
  scope.log.push("terminal".to_string());
  Ok(Some("terminal".to_string()))
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::TRACE)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
