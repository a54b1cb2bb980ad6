//! insert, remove_at and remove by value.

use super::common::{assert_list_eq, list_of, DropCounter};
use dynlist::{DynamicArrayList, ListError, Operation};

#[test]
fn insert_moves_existing_items() {
    let mut list = list_of(&["1", "2", "3"]);
    list.insert(1, "87").unwrap();
    assert_list_eq(&list, &["1", "87", "2", "3"]);
}

#[test]
fn insert_at_count_appends() {
    let mut list = list_of(&["1", "3", "5", "7"]);
    list.insert(4, "42").unwrap();
    assert_list_eq(&list, &["1", "3", "5", "7", "42"]);
    assert_eq!(list.capacity(), 8);
}

#[test]
fn insert_at_front() {
    let mut list = list_of(&[2, 3]);
    list.insert(0, 1).unwrap();
    assert_list_eq(&list, &[1, 2, 3]);
}

#[test]
fn insert_into_empty_list() {
    let mut list = DynamicArrayList::new();
    list.insert(0, "only").unwrap();
    assert_list_eq(&list, &["only"]);
}

#[test]
fn insert_rejects_index_past_count() {
    for invalid_index in [2, 8] {
        let mut list: DynamicArrayList<Option<String>> = DynamicArrayList::new();
        let err = list.insert(invalid_index, None).unwrap_err();
        assert_eq!(
            err,
            ListError::IndexOutOfRange {
                operation: Operation::Insert,
                index: invalid_index,
                len: 0,
            }
        );
    }
}

#[test]
fn remove_at_removes_items() {
    let mut words = list_of(&["Foo", "Bar", "Baz"]);
    assert_eq!(words.remove_at(1), Ok("Bar"));
    assert_list_eq(&words, &["Foo", "Baz"]);

    let mut numbers = list_of(&[1, 2, 3, 4, 5]);
    assert_eq!(numbers.remove_at(3), Ok(4));
    assert_list_eq(&numbers, &[1, 2, 3, 5]);

    let mut last = list_of(&["Hello", "World", "Foo", "What's up?"]);
    assert_eq!(last.remove_at(3), Ok("What's up?"));
    assert_list_eq(&last, &["Hello", "World", "Foo"]);
}

#[test]
fn remove_at_first_element() {
    let mut list = list_of(&[1, 2, 3]);
    assert_eq!(list.remove_at(0), Ok(1));
    assert_list_eq(&list, &[2, 3]);
}

#[test]
fn remove_at_rejects_invalid_index() {
    for invalid_index in [2, 10] {
        let mut list: DynamicArrayList<String> = DynamicArrayList::new();
        assert!(matches!(
            list.remove_at(invalid_index),
            Err(ListError::IndexOutOfRange {
                operation: Operation::RemoveAt,
                ..
            })
        ));
    }

    let mut list = list_of(&[1, 2]);
    assert!(list.remove_at(2).is_err());
    assert_list_eq(&list, &[1, 2]);
}

#[test]
fn remove_at_hands_back_ownership() {
    let (counters, drops) = DropCounter::batch(3);
    let mut list: DynamicArrayList<_> = counters.into_iter().collect();

    let removed = list.remove_at(1).unwrap();
    assert_eq!(drops.get(), 0);
    drop(removed);
    assert_eq!(drops.get(), 1);
    assert_eq!(list.len(), 2);
    assert_eq!(list.verify(), Ok(()));
}

#[test]
fn remove_by_value() {
    let mut words = list_of(&["1", "2", "3"]);
    assert!(words.remove(&"3"));
    assert_list_eq(&words, &["1", "2"]);

    let mut numbers = list_of(&[33, 44, 55]);
    assert!(!numbers.remove(&66));
    assert_list_eq(&numbers, &[33, 44, 55]);
}

#[test]
fn remove_by_value_takes_first_occurrence_only() {
    let mut flags = list_of(&[false, true, false, false]);
    assert!(flags.remove(&false));
    assert_list_eq(&flags, &[true, false, false]);
}
