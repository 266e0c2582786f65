//! Table-driven checks for the collection and string helpers

mod common;

use std::collections::HashMap;

use nhelpers::collections::for_each_do;
use nhelpers::{
    BytesExt, Comparison, HelperError, ListFormat, MapExt, SequenceExt, SliceExt, StrExt,
};
use test_case::test_case;

#[test_case("abcabcabc", "abc", Comparison::Ordinal => 3 ; "repeated ordinal")]
#[test_case("aaaa", "aa", Comparison::Ordinal => 2 ; "matches do not overlap")]
#[test_case("Abc aBC abc", "abc", Comparison::Ordinal => 1 ; "ordinal is case sensitive")]
#[test_case("Abc aBC abc", "ABC", Comparison::IgnoreCase => 3 ; "ignore case")]
#[test_case("\u{212A}elvin", "kelvin", Comparison::IgnoreCase => 0 ; "kelvin sign is not k")]
#[test_case("STRASSE", "straße", Comparison::IgnoreCase => 0 ; "sharp s does not expand")]
#[test_case("", "a", Comparison::Ordinal => 0 ; "empty haystack")]
#[test_case("abc", "", Comparison::Ordinal => 0 ; "empty needle")]
fn count_occurrences(haystack: &str, needle: &str, comparison: Comparison) -> usize {
    haystack.count_occurrences(needle, comparison)
}

#[test_case("" => "" ; "empty")]
#[test_case("f" => "Zg==" ; "one byte")]
#[test_case("foobar" => "Zm9vYmFy" ; "no padding")]
fn base64_encoding(plain: &str) -> String {
    plain.to_base64_string()
}

#[test_case("Zm9vYmFy" => "foobar" ; "compact")]
#[test_case("Zm9v\r\nYmFy" => "foobar" ; "crlf wrapped")]
#[test_case("Zm9v YmFy" => "foobar" ; "space separated")]
#[test_case("\tZg==\n" => "f" ; "surrounding whitespace")]
fn base64_decoding(encoded: &str) -> String {
    encoded.decode_base64_string().expect("valid base64")
}

#[test]
fn base64_decoding_rejects_invalid_bytes() {
    assert!(matches!("%%%".decode_base64_string(), Err(HelperError::Base64(_))));
}

#[test]
fn ascii_and_utf8_conversions() {
    assert_eq!("naïve".to_ascii_bytes(), b"na?ve".to_vec());
    assert_eq!([0x68u8, 0x69].to_ascii_string(), "hi");
    assert_eq!("ünï".to_utf8_bytes().to_utf8_string(), "ünï");
}

#[test_case(&[] => "" ; "empty")]
#[test_case(&["one"] => "one" ; "single")]
#[test_case(&["one", "two", "three"] => "one, two, three" ; "several")]
fn comma_separated(items: &[&str]) -> String {
    items.iter().to_comma_separated_string()
}

#[test_case(&[] => "" ; "empty has no dot")]
#[test_case(&["one", "two"] => "one, two." ; "dot after last")]
fn comma_separated_with_dot(items: &[&str]) -> String {
    items.iter().to_comma_separated_string_with_ending_dot()
}

#[test]
fn list_format_builder() {
    let format = ListFormat::comma_separated()
        .with_separator(" / ")
        .with_ending_dot();
    assert_eq!((1..=3).join_with(&format), "1 / 2 / 3.");
}

#[test]
fn chunking_groups_in_order() {
    common::init_tracing();

    let chunks: Vec<Vec<char>> = "abcdefg".chars().chunks_of(2).expect("non-zero").collect();
    assert_eq!(chunks, vec![vec!['a', 'b'], vec!['c', 'd'], vec!['e', 'f'], vec!['g']]);
    assert!(matches!("abc".chars().chunks_of(0), Err(HelperError::InvalidChunkSize)));
}

#[test]
fn grouping_into_map_slots() {
    common::init_tracing();

    let mut by_length: HashMap<usize, Vec<&str>> = HashMap::new();
    let words = ["ox", "cat", "dog", "be", "horse"];
    for_each_do(&words[..], |word| {
        by_length
            .map_collection_to_key(word.len(), Some(|| Some(Vec::new())))
            .expect("mapping supplied")
            .push(*word);
    });

    assert_eq!(by_length[&2], vec!["ox", "be"]);
    assert_eq!(by_length[&3], vec!["cat", "dog"]);
    assert_eq!(by_length[&5], vec!["horse"]);
}

#[test]
fn slice_defaults_and_copies() {
    let mut scores = [3.5f32, 1.0, 2.25];
    let copy = scores.clone_array();
    scores.self_set_to_defaults();

    assert_eq!(scores, [0.0; 3]);
    assert_eq!(copy, vec![3.5, 1.0, 2.25]);
    assert_eq!(copy.set_to_defaults(), vec![0.0; 3]);
}
