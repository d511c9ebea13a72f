//! Fixed scenarios every implementation must reproduce exactly.

use super::common::{all_lists, assert_all_agree, filled, script, SCENARIO_A, SCENARIO_B, SCENARIO_C};
use seqcheck::{ArrayList, IndexedSequence, LinkedList, Outcome, SequenceError, Value, VecOracle};

#[test]
fn test_scenario_a_interleaved_inserts() {
    let outcomes = assert_all_agree(&script(SCENARIO_A));
    assert_eq!(outcomes.last(), Some(&Outcome::Success(Some(3))));

    for mut list in all_lists() {
        super::common::apply_all(list.as_mut(), &script(SCENARIO_A));
        assert_eq!(list.contents(), vec![3, 5, 7], "{}", list.name());
    }
}

#[test]
fn test_scenario_b_remove_past_end() {
    let outcomes = assert_all_agree(&script(SCENARIO_B));
    assert_eq!(outcomes, vec![Outcome::Success(None), Outcome::IndexError]);

    for mut list in all_lists() {
        super::common::apply_all(list.as_mut(), &script(SCENARIO_B));
        assert_eq!(list.contents(), vec![1], "{}", list.name());
    }
}

#[test]
fn test_scenario_c_negative_get_on_empty() {
    let outcomes = assert_all_agree(&script(SCENARIO_C));
    assert_eq!(outcomes, vec![Outcome::IndexError]);
}

#[test]
fn test_index_error_carries_position_and_size() {
    let mut array = filled(ArrayList::<Value>::new(), &[1, 2, 3]);
    let mut linked = filled(LinkedList::<Value>::new(), &[1, 2, 3]);

    let expected = Err(SequenceError::Index { index: 3, size: 3 });
    assert_eq!(array.remove(3), expected);
    assert_eq!(linked.remove(3), expected);

    let expected = Err(SequenceError::Index { index: 4, size: 3 });
    assert_eq!(array.add(4, 0), expected);
    assert_eq!(linked.add(4, 0), expected);
}

#[test]
fn test_add_at_every_position() {
    let base: Vec<Value> = vec![10, 20, 30, 40];
    for position in 0..=base.len() {
        let mut expected = base.clone();
        expected.insert(position, 99);

        let mut array = filled(ArrayList::<Value>::new(), &base);
        let mut linked = filled(LinkedList::<Value>::new(), &base);
        array.add(position as i64, 99).unwrap();
        linked.add(position as i64, 99).unwrap();

        assert_eq!(array.contents(), expected, "array add at {}", position);
        assert_eq!(linked.contents(), expected, "linked add at {}", position);
        assert_eq!(array.get(position as i64), Ok(&99));
        assert_eq!(linked.get(position as i64), Ok(&99));
    }
}

#[test]
fn test_remove_at_every_position() {
    let base: Vec<Value> = vec![10, 20, 30, 40];
    for position in 0..base.len() {
        let mut expected = base.clone();
        let removed = expected.remove(position);

        let mut array = filled(ArrayList::<Value>::new(), &base);
        let mut linked = filled(LinkedList::<Value>::new(), &base);
        assert_eq!(array.remove(position as i64), Ok(removed));
        assert_eq!(linked.remove(position as i64), Ok(removed));
        assert_eq!(array.contents(), expected);
        assert_eq!(linked.contents(), expected);
    }
}

#[test]
fn test_set_keeps_size() {
    for mut list in all_lists() {
        list.add(0, 1).unwrap();
        list.add(1, 2).unwrap();
        assert_eq!(list.set(1, 20), Ok(2));
        assert_eq!(list.size(), 2);
        assert_eq!(list.get(1), Ok(&20));
    }
}

#[test]
fn test_allocation_limit_is_symmetric() {
    let ops = script("add 0 1; add 0 2; add 2 3; add 1 4; size; remove 0; add 0 5");
    let mut array = ArrayList::<Value>::with_max_len(3);
    let mut linked = LinkedList::<Value>::with_max_len(3);

    let a = super::common::apply_all(&mut array, &ops);
    let l = super::common::apply_all(&mut linked, &ops);
    assert_eq!(a, l);
    assert_eq!(a[3], Outcome::AllocationError);
    assert_eq!(a[6], Outcome::Success(None));
    assert_eq!(array.contents(), linked.contents());
}

#[test]
fn test_oracle_matches_vec_semantics() {
    let mut oracle = filled(VecOracle::<Value>::new(), &[1, 2, 3]);
    oracle.remove(0).unwrap();
    oracle.add(2, 4).unwrap();
    assert_eq!(oracle.as_slice(), &[2, 3, 4]);
}
