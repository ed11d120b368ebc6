#![cfg(feature = "serde")]

//! Integration tests for serde support in iterw.
//!
//! Streams serialize as plain sequences, so they interoperate with `Vec`.

use iterw::iterable::IterableW;
use iterw::sequence::Stream;
use rstest::rstest;

#[rstest]
fn test_stream_json_roundtrip() {
    let stream: Stream<i32> = (1..=10).collect();
    let json = serde_json::to_string(&stream).unwrap();
    let restored: Stream<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(stream, restored);
}

#[rstest]
fn test_stream_serializes_as_array() {
    let stream: Stream<&str> = vec!["a", "b"].into();
    assert_eq!(serde_json::to_string(&stream).unwrap(), r#"["a","b"]"#);
    assert_eq!(serde_json::to_string(&Stream::<i32>::empty()).unwrap(), "[]");
}

#[rstest]
fn test_lazy_stream_prefix_serializes() {
    let evens = Stream::range_from(0).map(|n| n * 2).take(4);
    assert_eq!(serde_json::to_string(&evens).unwrap(), "[0,2,4,6]");
}

#[rstest]
fn test_stream_nested_structures() {
    let json = "[[1,2],[],[3]]";
    let nested: Stream<Stream<i32>> = serde_json::from_str(json).unwrap();
    let flattened = IterableW::join(nested);
    assert_eq!(flattened.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn test_stream_deserialize_type_error() {
    let result: Result<Stream<i32>, _> = serde_json::from_str(r#"["x"]"#);
    assert!(result.is_err());
}
