// tests/ledger_tests.rs
use hookchain::{Ledger, RunOutcome};

#[test]
fn test_ledger_defaults_to_not_halted() {
  let ledger: Ledger<i32> = Ledger::new();
  assert!(!ledger.is_halted());
  assert!(ledger.is_not_halted());
  assert!(ledger.is_empty());
  assert_eq!(ledger.outcome(), RunOutcome::Completed);
}

#[test]
fn test_ledger_halt_is_idempotent_and_chainable() {
  let mut ledger: Ledger<i32> = Ledger::default();
  ledger.halt().halt();
  assert!(ledger.is_halted());
  assert!(!ledger.is_not_halted());
  assert_eq!(ledger.outcome(), RunOutcome::Halted);
}

#[test]
fn test_ledger_keeps_values_in_push_order() {
  let mut ledger = Ledger::new();
  ledger.push("washed_hands");
  ledger.push("located_food");
  ledger.push("sat_down");

  assert_eq!(ledger.len(), 3);
  assert_eq!(ledger.chain(), &["washed_hands", "located_food", "sat_down"]);
  assert_eq!(ledger[1], "located_food");
  assert_eq!(ledger.first(), Some(&"washed_hands"));

  // Halting keeps what was recorded so far.
  ledger.halt();
  assert_eq!(ledger.into_chain(), vec!["washed_hands", "located_food", "sat_down"]);
}
