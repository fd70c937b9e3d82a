// The fresh-variable-id counter is process-wide mutable state, so this is
// marked #[serial] against any other test that also resets/reads it.

use kanren::{reset_ids, LogicVar};
use serial_test::serial;

#[test]
#[serial]
fn fresh_never_reuses_an_id_within_a_process() {
    reset_ids();
    let a = LogicVar::fresh("$A");
    let b = LogicVar::fresh("$B");
    let c = LogicVar::fresh("$C");
    assert_ne!(a.id, b.id);
    assert_ne!(b.id, c.id);
    assert_ne!(a.id, c.id);
}

#[test]
#[serial]
fn reset_ids_restarts_the_counter() {
    reset_ids();
    let first = LogicVar::fresh("$X").id;
    reset_ids();
    let second = LogicVar::fresh("$X").id;
    assert_eq!(first, second);
}
