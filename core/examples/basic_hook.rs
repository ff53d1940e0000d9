// hookchain/examples/basic_hook.rs

use hookchain::{Block, Chain, HookError, HookOptions, HookResult, Operations, Scope};
use once_cell::sync::Lazy;
use tracing::info;

// 1. Define the Scope the callbacks run against
#[derive(Debug, Default)]
struct Person {
  log: Vec<String>,
  has_food: bool,
}

// 2. Give it the operations named callbacks refer to
impl Person {
  fn wash_hands(&mut self, _args: &(), _block: Option<Block<'_, Self, bool, HookError>>) -> HookResult<bool> {
    self.log.push("washed hands".to_string());
    Ok(true)
  }

  fn locate_food(&mut self, _args: &(), _block: Option<Block<'_, Self, bool, HookError>>) -> HookResult<bool> {
    self.log.push("looked for food".to_string());
    Ok(self.has_food)
  }

  fn sit_down(&mut self, _args: &(), _block: Option<Block<'_, Self, bool, HookError>>) -> HookResult<bool> {
    self.log.push("sat down".to_string());
    Ok(true)
  }
}

static PERSON_OPERATIONS: Lazy<Operations<Person, (), bool, HookError>> = Lazy::new(|| {
  Operations::new()
    .with("wash_hands", Person::wash_hands)
    .with("locate_food", Person::locate_food)
    .with("sit_down", Person::sit_down)
});

impl Scope<(), bool, HookError> for Person {
  fn call_operation(&mut self, operation: &str, args: &(), block: Option<Block<'_, Self, bool, HookError>>) -> HookResult<bool> {
    PERSON_OPERATIONS.call(self, operation, args, block)
  }
}

fn main() -> Result<(), HookError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Hook Example ---");

  // 3. Create the chain and append callbacks in the order they should run
  let mut before_eating = Chain::<Person, (), bool>::new(HookOptions::new("before_eating").halts_on_falsey(true));
  before_eating
    .append_named("wash_hands")
    .append_named("locate_food")
    .append_named("sit_down");
  info!(callbacks = ?before_eating.labels(), "Chain defined.");

  // 4. Run it for a person with food, then for one without
  for has_food in [true, false] {
    let mut person = Person {
      has_food,
      ..Default::default()
    };
    let ledger = before_eating.run(&mut person, &(), None)?;

    // 5. Inspect the results
    if ledger.is_halted() {
      info!(recorded = ledger.len(), log = ?person.log, "before_eating was halted.");
    } else {
      info!(recorded = ledger.len(), log = ?person.log, "before_eating completed.");
    }
  }

  Ok(())
}
