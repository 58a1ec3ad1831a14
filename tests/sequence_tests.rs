#![cfg(feature = "sequence")]
//! Unit tests for the sequence functions across element types.
//!
//! Covers integers, strings, floats, structs and reference-identity elements,
//! plus the absent/empty distinction for `map`.

use rstest::rstest;
use seqops::prelude::*;

// =============================================================================
// contains
// =============================================================================

#[rstest]
#[case::value_in_slice(vec![1, 2, 3, 4, 5], 3, true)]
#[case::value_not_in_slice(vec![1, 2, 3, 4, 5], 6, false)]
#[case::empty_slice(vec![], 1, false)]
#[case::single_element_match(vec![42], 42, true)]
#[case::single_element_no_match(vec![42], 99, false)]
fn contains_int(#[case] sequence: Vec<i32>, #[case] value: i32, #[case] expected: bool) {
    assert_eq!(contains(sequence, &value), expected);
}

#[rstest]
#[case::value_in_slice(vec!["apple", "banana", "cherry"], "banana", true)]
#[case::value_not_in_slice(vec!["apple", "banana", "cherry"], "orange", false)]
#[case::empty_slice(vec![], "apple", false)]
#[case::single_element_match(vec!["hello"], "hello", true)]
#[case::single_element_no_match(vec!["hello"], "world", false)]
fn contains_str(
    #[case] sequence: Vec<&'static str>,
    #[case] value: &'static str,
    #[case] expected: bool,
) {
    assert_eq!(contains(sequence, &value), expected);
}

#[rstest]
fn contains_owned_and_borrowed_strings_by_str() {
    let fruits = vec![String::from("apple"), String::from("banana")];

    assert!(contains(fruits.iter().map(String::as_str), "banana"));
    assert!(fruits.contains_value("banana"));
    assert!(!fruits.contains_value("orange"));
    assert!(contains(fruits, "apple"));
}

#[rstest]
#[case::value_in_slice(vec![1.1, 2.2, 3.3], 2.2, true)]
#[case::value_not_in_slice(vec![1.1, 2.2, 3.3], 4.4, false)]
#[case::empty_slice(vec![], 1.1, false)]
#[case::single_element_match(vec![42.0], 42.0, true)]
#[case::single_element_no_match(vec![42.0], 99.9, false)]
fn contains_f64(#[case] sequence: Vec<f64>, #[case] value: f64, #[case] expected: bool) {
    assert_eq!(contains(sequence.iter(), &value), expected);
}

#[rstest]
fn contains_int_references() {
    let (a, b, c) = (1, 2, 3);
    let other = 0;
    let elements = [
        Some(ByReference::new(&a)),
        Some(ByReference::new(&b)),
        Some(ByReference::new(&c)),
    ];

    assert!(contains(elements, &Some(ByReference::new(&b))));
    assert!(contains(elements, &Some(ByReference::new(&a))));
    assert!(!contains(elements, &Some(ByReference::new(&other))));
    assert!(!contains(elements, &None::<ByReference<'_, i32>>));

    let empty: Vec<Option<ByReference<'_, i32>>> = Vec::new();
    assert!(!contains(empty, &Some(ByReference::new(&a))));
}

#[rstest]
fn contains_absent_reference_in_sequence_of_absent() {
    let nullable: [Option<ByReference<'_, i32>>; 1] = [None];
    assert!(contains(nullable, &None::<ByReference<'_, i32>>));
}

#[rstest]
fn contains_string_references_compare_identity_not_value() {
    let hello = String::from("hello");
    let world = String::from("world");
    let another_hello = String::from("hello");
    let elements = [ByReference::new(&hello), ByReference::new(&world)];

    assert!(contains(elements, &ByReference::new(&hello)));
    assert!(!contains(elements, &ByReference::new(&another_hello)));
}

// =============================================================================
// first / find_first
// =============================================================================

#[rstest]
fn first_without_match_returns_zero_and_false() {
    assert_eq!(first([1, 2, 3], |n| *n > 5), (0, false));
}

#[rstest]
fn first_with_match_returns_leftmost() {
    assert_eq!(first([1, 2, 3], |n| *n > 1), (2, true));
}

#[rstest]
fn first_on_empty_returns_default() {
    assert_eq!(first(Vec::<String>::new(), |_| true), (String::new(), false));
}

#[rstest]
fn first_with_struct_elements() {
    #[derive(Debug, Default, PartialEq)]
    struct User {
        name: &'static str,
        age: u32,
    }

    let users = vec![
        User { name: "Alice", age: 30 },
        User { name: "Bob", age: 25 },
        User { name: "Carol", age: 25 },
    ];

    let (found, matched) = first(users, |user| user.age == 25);
    assert!(matched);
    assert_eq!(found.name, "Bob");
}

#[rstest]
fn find_first_without_default_bound() {
    struct Opaque(u8);

    let found = find_first([Opaque(1), Opaque(2)], |element| element.0 == 2);
    assert!(found.is_some_and(|element| element.0 == 2));
}

// =============================================================================
// map / try_map
// =============================================================================

#[rstest]
#[case::double_values(vec![1, 2, 3], |n: i32| n * 2, vec![2, 4, 6])]
#[case::square_values(vec![1, 2, 3], |n: i32| n * n, vec![1, 4, 9])]
#[case::empty_slice(vec![], |n: i32| n * 2, vec![])]
#[case::negate_values(vec![1, -2, 3], |n: i32| -n, vec![-1, 2, -3])]
fn map_int_to_int(
    #[case] input: Vec<i32>,
    #[case] transform: fn(i32) -> i32,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(map(Some(input), transform), Some(expected));
}

#[rstest]
fn map_string_to_string() {
    let result = map(Some(vec!["a", "b", "c"]), |element| format!("{element}!"));
    assert_eq!(result, Some(vec!["a!".to_string(), "b!".to_string(), "c!".to_string()]));
}

#[rstest]
fn map_struct_to_string() {
    struct User {
        name: &'static str,
        age: u32,
    }

    let users = vec![User { name: "Alice", age: 30 }, User { name: "Bob", age: 25 }];
    let result = map(Some(users), |user| format!("{} ({})", user.name, user.age));

    assert_eq!(
        result,
        Some(vec!["Alice (30)".to_string(), "Bob (25)".to_string()])
    );
}

#[rstest]
fn map_absent_int_sequence_is_absent() {
    let absent: Option<Vec<i32>> = None;
    assert_eq!(map(absent, |n| n * 2), None);
}

#[rstest]
fn map_absent_struct_sequence_is_absent() {
    struct Person {
        name: &'static str,
    }

    let absent: Option<Vec<Person>> = None;
    assert_eq!(map(absent, |person| person.name), None);
}

#[rstest]
fn map_absent_reference_sequence_is_absent() {
    let absent: Option<Vec<Option<ByReference<'_, i32>>>> = None;
    assert_eq!(map(absent, |reference| reference), None);
}

#[rstest]
fn map_distinguishes_absent_from_empty() {
    let absent: Option<Vec<i32>> = None;
    let empty: Option<Vec<i32>> = Some(Vec::new());

    let absent_result = map(absent, |n| n * 2);
    let empty_result = map(empty, |n| n * 2);

    assert!(absent_result.is_none());
    assert_eq!(empty_result, Some(Vec::new()));
}

#[rstest]
fn try_map_returns_caller_error_unchanged() {
    let result = try_map(Some(["10", "twenty", "30"]), str::parse::<u32>);
    let error = result.expect_err("second element is not a number");
    assert_eq!(error, "twenty".parse::<u32>().expect_err("not a number"));
}

#[rstest]
fn extension_traits_match_free_functions() {
    let values = vec![5, 10, 15];

    assert_eq!(values.contains_value(&10), contains(&values, &10));
    assert_eq!(values.first_where(|n| *n > 7), first(values.clone(), |n| *n > 7));
    assert_eq!(Some(values.clone()).map_each(|n| n + 1), map(Some(values), |n| n + 1));
}
