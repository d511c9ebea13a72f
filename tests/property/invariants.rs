//! Structural invariants checked after every operation.

use super::common::filled;
use super::{index_strategy, operations_strategy, value_strategy};
use proptest::prelude::*;
use seqcheck::{
    validate_array_list, validate_linked_list, ArrayList, IndexedSequence, LinkedList, Outcome,
    Value,
};

// ============================================================================
// VALIDATORS
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: the array list's buffer stays well formed.
    #[test]
    fn prop_array_list_structure(ops in operations_strategy(150)) {
        let mut list = ArrayList::<Value>::new();
        for op in &ops {
            op.apply(&mut list);
            prop_assert!(validate_array_list(&list).is_ok(), "after {}", op);
            prop_assert!(list.size() <= list.capacity());
        }
    }

    /// Property: the linked list's chain and free list stay well formed.
    #[test]
    fn prop_linked_list_structure(ops in operations_strategy(150)) {
        let mut list = LinkedList::<Value>::new();
        for op in &ops {
            op.apply(&mut list);
            prop_assert!(validate_linked_list(&list).is_ok(), "after {}", op);
        }
    }
}

// ============================================================================
// SINGLE-OPERATION PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: a successful add grows by one and places the value at its index.
    #[test]
    fn prop_add_places_value(
        values in prop::collection::vec(value_strategy(), 0..30),
        index in index_strategy(),
        value in value_strategy(),
    ) {
        for mut list in [
            Box::new(filled(ArrayList::<Value>::new(), &values)) as Box<dyn IndexedSequence<Value>>,
            Box::new(filled(LinkedList::<Value>::new(), &values)),
        ] {
            let before = list.size();
            match list.add(index, value) {
                Ok(()) => {
                    prop_assert!(index >= 0 && index as usize <= before);
                    prop_assert_eq!(list.size(), before + 1);
                    prop_assert_eq!(list.get(index), Ok(&value));
                }
                Err(_) => {
                    prop_assert!(index < 0 || index as usize > before);
                    prop_assert_eq!(list.contents(), values.clone());
                }
            }
        }
    }

    /// Property: remove returns the element get would have returned.
    #[test]
    fn prop_remove_returns_get(
        values in prop::collection::vec(value_strategy(), 0..30),
        index in index_strategy(),
    ) {
        for mut list in [
            Box::new(filled(ArrayList::<Value>::new(), &values)) as Box<dyn IndexedSequence<Value>>,
            Box::new(filled(LinkedList::<Value>::new(), &values)),
        ] {
            let seen = list.get(index).copied();
            let removed = list.remove(index);
            prop_assert_eq!(removed, seen);
            if removed.is_ok() {
                prop_assert_eq!(list.size(), values.len() - 1);
            } else {
                prop_assert_eq!(list.size(), values.len());
            }
        }
    }

    /// Property: set replaces in place and hands back the old element.
    #[test]
    fn prop_set_swaps_element(
        values in prop::collection::vec(value_strategy(), 1..30),
        value in value_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let index = pick.index(values.len());
        for mut list in [
            Box::new(filled(ArrayList::<Value>::new(), &values)) as Box<dyn IndexedSequence<Value>>,
            Box::new(filled(LinkedList::<Value>::new(), &values)),
        ] {
            let op = seqcheck::Operation::Set { index: index as i64, value };
            prop_assert_eq!(op.apply(list.as_mut()), Outcome::Success(Some(values[index])));
            prop_assert_eq!(list.size(), values.len());
            prop_assert_eq!(list.get(index as i64), Ok(&value));
        }
    }
}
