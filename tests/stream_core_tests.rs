use fluent_stream::iterator::{self, size, ArrayIterable};
use fluent_stream::stream::{self, from_iterable, map_array};
use fluent_stream::{stream_of, BufferConfig, Cursor, Empty, FluentError, Present, Stream};
use std::cell::RefCell;

fn one_to_ten() -> Vec<i32> {
    (1..=10).collect()
}

fn is_even(v: &i32) -> bool {
    v % 2 == 0
}

#[test]
fn test_skip() {
    assert_eq!(Stream::from_vec(one_to_ten()).skip(5).to_vec(), vec![6, 7, 8, 9, 10]);
    assert_eq!(Stream::from_vec(one_to_ten()).skip(11).to_vec(), Vec::<i32>::new());
    assert_eq!(Stream::from_vec(one_to_ten()).skip(0).count(), 10);
}

#[test]
fn test_skip_size() {
    assert_eq!(size(&Stream::from_vec(one_to_ten()).skip(5).iterator()), Present(5));
    assert_eq!(size(&Stream::from_vec(one_to_ten()).skip(11).iterator()), Present(0));
    assert_eq!(size(&Stream::from_iter(1..=10).skip(5).iterator()), Empty);
}

#[test]
fn test_skip_stops_early_on_short_source() {
    let mut cursor = Stream::from_vec(vec![1, 2]).skip(3).iterator();
    assert_eq!(cursor.next(), Empty);
    assert_eq!(cursor.next(), Empty);
}

#[test]
fn test_limit() {
    assert_eq!(Stream::from_vec(one_to_ten()).limit(5).to_vec(), vec![1, 2, 3, 4, 5]);
    assert_eq!(Stream::from_vec(one_to_ten()).limit(12).to_vec(), one_to_ten());
    assert_eq!(Stream::from_vec(one_to_ten()).limit(0).count(), 0);
}

#[test]
fn test_limit_size() {
    assert_eq!(size(&Stream::from_vec(one_to_ten()).limit(5).iterator()), Present(5));
    assert_eq!(size(&Stream::from_vec(one_to_ten()).limit(12).iterator()), Present(10));
}

#[test]
fn test_limit_does_not_pull_past_max() {
    let pulled = RefCell::new(Vec::new());
    let taken = Stream::from_vec(one_to_ten())
        .peek(|v| pulled.borrow_mut().push(*v))
        .limit(3)
        .to_vec();
    assert_eq!(taken, vec![1, 2, 3]);
    assert_eq!(*pulled.borrow(), vec![1, 2, 3]);
}

#[test]
fn test_filter() {
    let evens = Stream::from_vec(one_to_ten()).filter(is_even).to_vec();
    assert_eq!(evens, vec![2, 4, 6, 8, 10]);
    assert_eq!(evens.len(), one_to_ten().len() / 2);
    assert!(evens.iter().all(is_even));
}

#[test]
fn test_filter_has_no_size() {
    assert_eq!(size(&Stream::from_vec(one_to_ten()).filter(is_even).iterator()), Empty);
}

#[test]
fn test_map_same_type() {
    let doubled = Stream::from_vec(one_to_ten()).map(|v| v * 2).to_vec();
    assert_eq!(doubled, vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20]);
}

#[test]
fn test_map_heterogeneous() {
    let expected = vec![false, true, false, true, false, true, false, true, false, true];
    let mapped = stream::map(Stream::from_vec(one_to_ten()), |v| is_even(&v)).to_vec();
    assert_eq!(mapped, expected);
    assert_eq!(map_array(one_to_ten(), |v| v % 2 == 0).to_vec(), expected);
}

#[test]
fn test_map_and_peek_keep_size() {
    assert_eq!(size(&Stream::from_vec(one_to_ten()).map(|v| v + 1).iterator()), Present(10));
    assert_eq!(size(&Stream::from_vec(one_to_ten()).peek(|_| {}).iterator()), Present(10));
    assert_eq!(
        size(&Stream::from_vec(one_to_ten()).filter(is_even).map(|v| v + 1).iterator()),
        Empty
    );
}

#[test]
fn test_peek_sees_every_element() {
    let seen = RefCell::new(Vec::new());
    let out = Stream::from_vec(one_to_ten()).peek(|v| seen.borrow_mut().push(*v)).to_vec();
    assert_eq!(out, one_to_ten());
    assert_eq!(*seen.borrow(), one_to_ten());
}

#[test]
fn test_take_while_stops_at_first_failure() {
    let taken = Stream::from_vec(vec![1, 2, 3, 10, 4, 5]).take_while(|v| *v < 5).to_vec();
    assert_eq!(taken, vec![1, 2, 3]);

    let mut cursor = Stream::from_vec(vec![1, 2, 3, 10, 4, 5]).take_while(|v| *v < 5).iterator();
    for _ in 0..3 {
        assert!(cursor.next().is_present());
    }
    assert_eq!(cursor.next(), Empty);
    assert_eq!(cursor.next(), Empty);
    assert_eq!(size(&cursor), Empty);
}

#[test]
fn test_for_each_index_and_order() {
    let mut seen = Vec::new();
    Stream::from_vec(one_to_ten()).for_each(|i, v| seen.push((i, v)));
    let expected: Vec<(usize, i32)> = one_to_ten().into_iter().enumerate().collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_terminal_operations_observe_all_elements() {
    assert_eq!(Stream::from_vec(one_to_ten()).count(), 10);
    assert_eq!(Stream::from_vec(one_to_ten()).to_vec(), one_to_ten());
    assert_eq!(Stream::from_iter(1..=10).to_vec(), one_to_ten());
    assert_eq!(Stream::from_iter(1..=10).count(), 10);
}

#[test]
fn test_to_vec_known_size_preallocates() {
    let out = Stream::from_vec(one_to_ten()).to_vec();
    assert_eq!(out.capacity(), 10);

    let unknown = Stream::from_iter(1..=3).with_buffer(BufferConfig { initial_capacity: 64 }).to_vec();
    assert_eq!(unknown, vec![1, 2, 3]);
    assert!(unknown.capacity() >= 64);
}

#[test]
fn test_constructors() {
    assert_eq!(stream_of![1, 2, 3].to_vec(), vec![1, 2, 3]);
    assert_eq!(stream_of![7].to_vec(), vec![7]);
    assert_eq!(Stream::from_vec(Vec::<i32>::new()).count(), 0);
    assert_eq!(from_iterable(&ArrayIterable(one_to_ten())).count(), 10);
    assert_eq!(from_iterable(&one_to_ten()).count(), 10);
    assert_eq!(Stream::from_cursor(iterator::single("x")).to_vec(), vec!["x"]);
}

#[test]
fn test_single_use_iterator_is_exhausted() {
    let mut cursor = Stream::from_vec(one_to_ten()).iterator();
    while cursor.next().is_present() {}
    assert_eq!(Stream::from_cursor(&mut cursor).count(), 0);
}

#[test]
fn test_into_iterator() {
    let total: i32 = Stream::from_vec(one_to_ten()).filter(is_even).into_iter().sum();
    assert_eq!(total, 30);
}

#[test]
fn test_pipeline_composition() {
    let out = Stream::from_iter(1..=100)
        .filter(is_even)
        .map(|v| v * 3)
        .skip(2)
        .limit(4)
        .to_vec();
    assert_eq!(out, vec![18, 24, 30, 36]);
    assert!(!Stream::from_vec(one_to_ten()).is_parallel());
}

#[test]
fn test_try_for_each_reports_panic() {
    let result = Stream::from_vec(one_to_ten()).try_for_each(|_, v| {
        if v == 4 {
            panic!("bad element {}", v);
        }
    });
    assert_eq!(result, Err(FluentError::WorkerPanicked { message: "bad element 4".to_string() }));
    assert_eq!(Stream::from_vec(one_to_ten()).try_count(), Ok(10));
    assert_eq!(Stream::from_vec(one_to_ten()).try_to_vec(), Ok(one_to_ten()));
}
