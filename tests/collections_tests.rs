use fluent_stream::array;
use fluent_stream::iterator::{size, ArrayIterable};
use fluent_stream::set::{MapSet, Set};
use fluent_stream::stream::from_iterable;
use fluent_stream::{Iterable, Present};

#[test]
fn test_array_map() {
    let input = vec![1, 2, 3];
    assert_eq!(array::map(&input, |v| v * 2), vec![2, 4, 6]);
    assert_eq!(array::map(&input, |v| v.to_string()), vec!["1", "2", "3"]);
}

#[test]
fn test_array_filter() {
    let input: Vec<i32> = (1..=10).collect();
    assert_eq!(array::filter(&input, |v| v % 2 == 0), vec![2, 4, 6, 8, 10]);
    assert_eq!(array::filter(&Vec::<i32>::new(), |_| true), Vec::<i32>::new());
    assert_eq!(array::filter(&input, |_| false), Vec::<i32>::new());
}

#[test]
fn test_set_add_remove_contains() {
    let mut set = MapSet::new();
    assert!(set.is_empty());
    set.add("a");
    set.add("b");
    set.add("a");
    assert_eq!(set.len(), 2);
    assert!(set.contains(&"a"));
    set.remove(&"a");
    assert!(!set.contains(&"a"));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_set_add_all_and_contains_all() {
    let mut set = MapSet::new();
    set.add_all(&ArrayIterable(vec![1, 2, 3, 4]));
    assert_eq!(set.len(), 4);
    assert!(set.contains_all(&vec![2, 4]));
    assert!(!set.contains_all(&vec![2, 5]));
    assert!(set.contains_all(&Vec::<i32>::new()));
}

#[test]
fn test_set_cursor_feeds_stream() {
    let set: MapSet<i32> = (1..=10).collect();
    assert_eq!(size(&set.cursor()), Present(10));

    let mut evens = from_iterable(&set).filter(|v| v % 2 == 0).to_vec();
    evens.sort();
    assert_eq!(evens, vec![2, 4, 6, 8, 10]);
}

#[test]
fn test_set_for_each() {
    let set: MapSet<i32> = (1..=5).collect();
    let mut total = 0;
    set.for_each(|v| total += v);
    assert_eq!(total, 15);
}
