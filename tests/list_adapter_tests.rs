//! Integration tests for the list view and its bidirectional iterator.

use iterw::iterable::{Direction, IterableError, IterableW, ListView};
use iterw::sequence::{Reiterable, Stream};
use rstest::{fixture, rstest};

#[fixture]
fn tens() -> ListView<i32> {
    IterableW::wrap(vec![10, 20, 30]).to_standard_list()
}

// =============================================================================
// Bidirectional Traversal
// =============================================================================

#[rstest]
fn list_iter_walks_forward_then_back(tens: ListView<i32>) {
    let mut cursor = tens.list_iter();
    assert_eq!(cursor.next_index(), 0);
    assert_eq!(cursor.previous_index(), None);

    let mut forward = Vec::new();
    while cursor.has_next() {
        forward.push(cursor.try_next().unwrap());
    }
    assert_eq!(forward, vec![10, 20, 30]);
    assert_eq!(cursor.next_index(), 3);
    assert_eq!(cursor.previous_index(), Some(2));

    let mut backward = Vec::new();
    while cursor.has_previous() {
        backward.push(cursor.try_previous().unwrap());
    }
    assert_eq!(backward, vec![30, 20, 10]);
    assert_eq!(cursor.next_index(), 0);
    assert_eq!(cursor.previous_index(), None);
}

#[rstest]
fn list_iter_reports_boundaries(tens: ListView<i32>) {
    let mut cursor = tens.list_iter();
    assert_eq!(
        cursor.try_previous(),
        Err(IterableError::NoSuchElement { direction: Direction::Backward })
    );
    cursor.by_ref().for_each(drop);
    assert_eq!(
        cursor.try_next(),
        Err(IterableError::NoSuchElement { direction: Direction::Forward })
    );
}

#[rstest]
#[case(0, Some(10))]
#[case(2, Some(30))]
#[case(3, None)]
fn list_iter_at_positions_before_index(tens: ListView<i32>, #[case] index: usize, #[case] next: Option<i32>) {
    let mut cursor = tens.list_iter_at(index).unwrap();
    assert_eq!(cursor.next_index(), index);
    assert_eq!(cursor.next(), next);
}

#[rstest]
fn list_iter_at_past_the_end_fails(tens: ListView<i32>) {
    assert!(matches!(
        tens.list_iter_at(4),
        Err(IterableError::IndexOutOfRange { index: 4, length: Some(3) })
    ));
}

// =============================================================================
// Immutability
// =============================================================================

#[rstest]
fn rejected_mutations_leave_the_list_unchanged(tens: ListView<i32>) {
    assert!(!tens.add(40));
    assert!(!tens.retain_all(&[10]));
    assert!(matches!(tens.clear(), Err(IterableError::UnsupportedOperation { operation: "clear" })));
    assert!(matches!(tens.set(0, 1), Err(IterableError::UnsupportedOperation { operation: "set" })));
    assert!(matches!(tens.insert(1, 15), Err(IterableError::UnsupportedOperation { .. })));
    assert!(matches!(tens.remove_at(0), Err(IterableError::UnsupportedOperation { .. })));

    let mut cursor = tens.list_iter();
    assert!(cursor.add(5).is_err());
    assert_eq!(tens.to_vec(), vec![10, 20, 30]);
}

#[rstest]
fn derived_views_leave_the_shared_source_untouched() {
    let source = std::rc::Rc::new(vec!['x', 'y', 'z']);
    let wrapper = IterableW::from_shared(source.clone());
    let list = wrapper.map(|c| c.to_ascii_uppercase()).to_standard_list();

    assert_eq!(list.to_vec(), vec!['X', 'Y', 'Z']);
    assert_eq!(*source, vec!['x', 'y', 'z']);
}

// =============================================================================
// Infinite Sources
// =============================================================================

#[rstest]
fn infinite_source_supports_prefix_queries() {
    let naturals = IterableW::wrap(Reiterable(0_u64..)).to_standard_list();
    assert!(!naturals.is_empty());
    assert_eq!(naturals.get(1_000), Ok(1_000));
    assert!(naturals.contains(&42));
    assert_eq!(naturals.index_of(&7), Some(7));
    assert_eq!(naturals.sub_list(5, 8).unwrap().to_vec(), vec![5, 6, 7]);

    let mut cursor = naturals.list_iter_at(10).unwrap();
    assert!(cursor.has_next());
    assert_eq!(cursor.try_previous(), Ok(9));
}

#[rstest]
fn zips_against_infinite_stream_terminate() {
    let letters = IterableW::wrap(vec!["a", "b", "c"]);
    let squares = IterableW::wrap(Stream::range_from(1)).map(|n| n * n);
    assert_eq!(
        letters.zip(squares).to_vec(),
        vec![("a", 1), ("b", 4), ("c", 9)]
    );
}
