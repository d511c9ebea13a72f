//! Buffer growth and arena reuse.

use seqcheck::{
    grown_capacity, validate_array_list, validate_linked_list, ArrayList, IndexedSequence,
    LinkedList, Value,
};

#[test]
fn test_growth_rule() {
    assert_eq!(grown_capacity(0), 2);
    assert_eq!(grown_capacity(1), 2);
    assert_eq!(grown_capacity(2), 4);
    assert_eq!(grown_capacity(48), 96);
    assert_eq!(grown_capacity(usize::MAX), usize::MAX);
}

#[test]
fn test_capacity_only_changes_on_overflow() {
    let mut list = ArrayList::<Value>::new();
    let mut last = list.capacity();
    for i in 0..100 {
        let before = list.size();
        list.add(0, i).unwrap();
        if before < last {
            assert_eq!(list.capacity(), last, "grew while room remained");
        } else {
            assert_eq!(list.capacity(), grown_capacity(last));
        }
        last = list.capacity();
        validate_array_list(&list).unwrap();
    }
}

#[test]
fn test_capacity_never_shrinks_on_drain() {
    let mut list = ArrayList::<Value>::new();
    for i in 0..20 {
        list.add(i, i).unwrap();
    }
    let peak = list.capacity();
    while !list.is_empty() {
        list.remove(0).unwrap();
        assert_eq!(list.capacity(), peak);
    }
    validate_array_list(&list).unwrap();
}

#[test]
fn test_linked_list_reuses_freed_nodes() {
    let mut list = LinkedList::<Value>::new();
    for i in 0..8 {
        list.add(i, i).unwrap();
    }
    for _ in 0..8 {
        list.remove(0).unwrap();
    }
    assert_eq!(list.free_slots(), 8);

    for i in 0..8 {
        list.add(0, i).unwrap();
    }
    assert_eq!(list.free_slots(), 0);
    assert_eq!(list.contents(), vec![7, 6, 5, 4, 3, 2, 1, 0]);
    validate_linked_list(&list).unwrap();
}

#[test]
fn test_max_len_zero_rejects_every_add() {
    let mut array = ArrayList::<Value>::with_max_len(0);
    let mut linked = LinkedList::<Value>::with_max_len(0);
    assert!(array.add(0, 1).is_err());
    assert!(linked.add(0, 1).is_err());
    assert_eq!(array.capacity(), 0);
    assert!(array.is_empty());
    assert!(linked.is_empty());
}
