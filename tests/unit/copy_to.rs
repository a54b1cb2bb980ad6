//! copy_to into caller-provided destinations.

use super::common::list_of;
use dynlist::{DynamicArrayList, ListError};

#[test]
fn copies_into_exact_destination() {
    let list = list_of(&["1", "2"]);
    let mut target = [""; 2];
    list.copy_to(&mut target[..], 0).unwrap();
    assert_eq!(target, ["1", "2"]);
}

#[test]
fn copies_into_larger_destination() {
    let list = list_of(&[Some("1"), Some("2")]);
    let mut target = [None; 4];
    list.copy_to(&mut target[..], 0).unwrap();
    assert_eq!(target, [Some("1"), Some("2"), None, None]);
}

#[test]
fn copies_at_offset() {
    let list = list_of(&[3, 4, 5]);
    let mut target = [1, 2, 0, 0, 0];
    list.copy_to(&mut target[..], 2).unwrap();
    assert_eq!(target, [1, 2, 3, 4, 5]);
}

#[test]
fn rejects_absent_destination() {
    let list: DynamicArrayList<i32> = DynamicArrayList::new();
    assert_eq!(
        list.copy_to(None::<&mut [i32]>, 0),
        Err(ListError::NullTarget {
            parameter: "destination"
        })
    );
}

#[test]
fn rejects_offset_past_destination_end() {
    let list: DynamicArrayList<i32> = DynamicArrayList::new();
    let mut target = [0; 4];
    assert!(matches!(
        list.copy_to(&mut target[..], 5),
        Err(ListError::InvalidArgument {
            parameter: "dest_offset",
            ..
        })
    ));
}

#[test]
fn rejects_destination_that_is_too_small() {
    let numbers = list_of(&[1, 2, 3]);
    let mut small = [1];
    assert_eq!(
        numbers.copy_to(&mut small[..], 0),
        Err(ListError::InsufficientCapacity {
            available: 1,
            required: 3
        })
    );
    assert_eq!(small, [1]);

    let words = list_of(&[Some("Foo"), Some("Bar")]);
    let mut target = [Some("1"), Some("2"), None];
    assert_eq!(
        words.copy_to(&mut target[..], 2),
        Err(ListError::InsufficientCapacity {
            available: 1,
            required: 2
        })
    );
    assert_eq!(target, [Some("1"), Some("2"), None]);
}

#[test]
fn empty_list_copies_nothing() {
    let list: DynamicArrayList<i32> = DynamicArrayList::new();
    let mut target = [9, 9];
    list.copy_to(&mut target[..], 2).unwrap();
    assert_eq!(target, [9, 9]);
}
