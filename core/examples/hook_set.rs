// hookchain/examples/hook_set.rs

use hookchain::{Callback, HookError, HookOptions, HookSet, Scope};
use tracing::info;

#[derive(Debug, Default)]
struct Order {
  total_cents: u64,
  notes: Vec<String>,
}

impl Scope<str, bool, HookError> for Order {}

fn main() -> Result<(), HookError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Hook Set Example ---");

  // 1. Define the hooks once, during setup
  let base: HookSet<Order, str, bool> = HookSet::new();
  base.define_hook(HookOptions::new("before_checkout").halts_on_falsey(true))?;
  base.define_hook("after_checkout")?;

  base.add_callback(
    "before_checkout",
    Callback::inline(|order: &mut Order, _, _| Ok(order.total_cents > 0)),
  )?;
  base.add_callback(
    "after_checkout",
    Callback::inline(|order: &mut Order, customer: &str, _| {
      order.notes.push(format!("receipt sent to {customer}"));
      Ok(true)
    }),
  )?;

  // 2. A forked set inherits every hook and can extend them without touching the base
  let premium = base.fork();
  premium.add_callback(
    "after_checkout",
    Callback::inline(|order: &mut Order, customer: &str, _| {
      order.notes.push(format!("loyalty points for {customer}"));
      Ok(true)
    }),
  )?;

  // 3. Run hooks by name
  for (label, hooks) in [("base", &base), ("premium", &premium)] {
    let mut order = Order {
      total_cents: 4_200,
      ..Default::default()
    };
    let before = hooks.run_hook("before_checkout", &mut order, "ada", None)?;
    if before.is_not_halted() {
      hooks.run_hook("after_checkout", &mut order, "ada", None)?;
    }
    info!(set = label, notes = ?order.notes, "Checkout finished.");
  }

  let mut empty = Order::default();
  let ledger = base.run_hook("before_checkout", &mut empty, "bob", None)?;
  info!(halted = ledger.is_halted(), "Empty order checkout.");

  Ok(())
}
