//! Property-based tests for `Stream` and `Zipper`.
//!
//! - **Monoid**: `append` is associative with `empty` as identity
//! - **Laziness**: transformations agree with their eager `Vec` counterparts
//! - **Zipper**: moving anywhere and rebuilding yields the same sequence

use iterw::sequence::{Stream, Zipper};
use iterw::typeclass::{Applicative, Monoid, Semigroup};
use proptest::prelude::*;

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..24)
}

// =============================================================================
// Monoid Laws
// =============================================================================

proptest! {
    /// Associativity: (a ++ b) ++ c == a ++ (b ++ c)
    #[test]
    fn prop_append_associativity_law(a in small_vec(), b in small_vec(), c in small_vec()) {
        let (a, b, c): (Stream<i32>, Stream<i32>, Stream<i32>) = (a.into(), b.into(), c.into());
        let left = a.append(&b).append(&c);
        let right = a.append(&b.append(&c));
        prop_assert_eq!(left, right);
    }

    /// Identity: empty ++ a == a == a ++ empty
    #[test]
    fn prop_append_identity_law(elements in small_vec()) {
        let stream: Stream<i32> = elements.into();
        prop_assert_eq!(Stream::empty().combine(stream.clone()), stream.clone());
        prop_assert_eq!(stream.clone().combine(<Stream<i32> as Monoid>::empty()), stream);
    }
}

// =============================================================================
// Agreement with Vec
// =============================================================================

proptest! {
    #[test]
    fn prop_take_and_drop_partition(elements in small_vec(), count in 0..30_usize) {
        let stream: Stream<i32> = elements.clone().into();
        let split = count.min(elements.len());

        prop_assert_eq!(stream.take(count).to_vec(), elements[..split].to_vec());
        prop_assert_eq!(stream.drop_first(count).to_vec(), elements[split..].to_vec());
        prop_assert_eq!(stream.take(count).append(&stream.drop_first(count)), stream);
    }

    #[test]
    fn prop_get_matches_indexing(elements in small_vec(), index in 0..30_usize) {
        let stream: Stream<i32> = elements.clone().into();
        prop_assert_eq!(stream.get(index), elements.get(index).copied());
    }

    #[test]
    fn prop_from_iterator_matches_from_vec(elements in small_vec()) {
        let lazy = Stream::from_iterator(elements.clone());
        let eager: Stream<i32> = elements.into();
        prop_assert_eq!(lazy, eager);
    }

    #[test]
    fn prop_map2_is_cartesian(left in prop::collection::vec(0..10_i32, 0..6), right in prop::collection::vec(0..10_i32, 0..6)) {
        let expected: Vec<i32> = left.iter().flat_map(|a| right.iter().map(move |b| a * 10 + b)).collect();
        let left: Stream<i32> = left.into();
        let result = left.map2(Stream::from(right), |a, b| a * 10 + b);
        prop_assert_eq!(result.to_vec(), expected);
    }
}

// =============================================================================
// Zipper Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_zipper_round_trip(elements in prop::collection::vec(any::<i32>(), 1..24), target in 0..24_usize) {
        let stream: Stream<i32> = elements.clone().into();
        let zipper = Zipper::from_stream(&stream).expect("non-empty stream");
        match zipper.move_to(target) {
            Some(moved) => {
                prop_assert!(target < elements.len());
                prop_assert_eq!(*moved.focus(), elements[target]);
                prop_assert_eq!(moved.to_stream().to_vec(), elements.clone());
                prop_assert_eq!(moved.at_end(), target + 1 == elements.len());
            }
            None => prop_assert!(target >= elements.len()),
        }
    }
}
