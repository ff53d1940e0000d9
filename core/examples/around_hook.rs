// hookchain/examples/around_hook.rs

use hookchain::{Block, Chain, Delegate, HookError, HookOptions, Scope};
use tracing::info;

#[derive(Debug, Default)]
struct Kitchen {
  log: Vec<String>,
}

impl Scope<(), bool, HookError> for Kitchen {}

// A delegate answering for the hook it is registered on.
struct Hygiene;

impl Delegate<Kitchen, (), bool, HookError> for Hygiene {
  fn call_hook(
    &self,
    hook: &str,
    kitchen: &mut Kitchen,
    _args: &(),
    block: Option<Block<'_, Kitchen, bool, HookError>>,
  ) -> Result<bool, HookError> {
    kitchen.log.push(format!("{hook}: wash hands"));
    let ate = match block {
      Some(mut next) => next.call(kitchen)?,
      None => false,
    };
    kitchen.log.push(format!("{hook}: do dishes"));
    Ok(ate)
  }
}

fn main() -> Result<(), HookError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();
  info!("--- Around Hook Example ---");

  let mut around_eating = Chain::<Kitchen, (), bool>::new(HookOptions::new("around_eating").around(true));
  around_eating.append_delegate(Hygiene);
  around_eating.append_inline(|kitchen, _, block| {
    kitchen.log.push("light candles".to_string());
    let ate = match block {
      Some(mut next) => next.call(kitchen)?,
      None => false,
    };
    kitchen.log.push("blow out candles".to_string());
    Ok(ate)
  });

  let mut kitchen = Kitchen::default();
  let ledger = around_eating.run_with(&mut kitchen, &(), |kitchen: &mut Kitchen| {
    kitchen.log.push("eat".to_string());
    Ok(true)
  })?;

  for line in &kitchen.log {
    info!("{}", line);
  }
  info!(results = ?ledger.chain(), halted = ledger.is_halted(), "around_eating finished.");

  // Around hooks need something to wrap.
  match around_eating.run(&mut kitchen, &(), None) {
    Err(e) => info!("Running without a block fails: {}", e),
    Ok(_) => unreachable!("around hooks require a block"),
  }

  Ok(())
}
