//! Forward iteration over the logical elements.

use super::common::list_of;
use dynlist::DynamicArrayList;

#[test]
fn list_is_iterable_with_for_loop() {
    let items = ["Hello", "World", "Foo"];
    let list = list_of(&items);

    let mut index = 0;
    for item in &list {
        assert_eq!(*item, items[index]);
        index += 1;
    }
    assert_eq!(index, items.len());
}

#[test]
fn list_is_iterable_through_generic_iterator() {
    fn collect_all<'a, I: IntoIterator<Item = &'a u32>>(items: I) -> Vec<u32> {
        items.into_iter().copied().collect()
    }

    let list = list_of(&[76, 103, 105]);
    assert_eq!(collect_all(&list), [76, 103, 105]);
}

#[test]
fn two_passes_yield_the_same_sequence() {
    let list = list_of(&[1, 2, 3, 4, 5]);
    let first: Vec<_> = list.iter().collect();
    let second: Vec<_> = list.iter().collect();
    assert_eq!(first, second);
}

#[test]
fn iteration_stops_at_count() {
    let mut list = DynamicArrayList::with_capacity(8).unwrap();
    list.extend([1, 2, 3]);
    assert_eq!(list.iter().len(), 3);
    assert_eq!(list.iter().last(), Some(&3));
}

#[test]
fn iteration_after_removal_reflects_new_state() {
    let mut list = list_of(&["a", "b", "c"]);
    list.remove_at(0).unwrap();
    let remaining: Vec<_> = list.iter().copied().collect();
    assert_eq!(remaining, ["b", "c"]);
}

#[test]
fn collects_and_extends() {
    let mut list: DynamicArrayList<i32> = (1..=3).collect();
    list.extend(&[4, 5]);
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
    assert_eq!(list, vec![1, 2, 3, 4, 5]);
}
