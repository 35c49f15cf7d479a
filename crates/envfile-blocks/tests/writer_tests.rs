//! Integration tests for block removal on text content.

use envfile_blocks::{Markers, block_names, find_block, remove_block};
use pretty_assertions::assert_eq;
use rstest::rstest;

const ORIGINAL: &str =
    "Environment\nEnvironmentName:\tA\nFoo:1\nEnvironment\nEnvironmentName:\tB\nBar:2\n";

fn remove(content: &str, name: &str) -> String {
    remove_block(content, name, &Markers::default()).content
}

#[rstest]
#[case("A", "Environment\nEnvironmentName:\tB\nBar:2\n")]
#[case("B", "Environment\nEnvironmentName:\tA\nFoo:1\n")]
#[case("C", ORIGINAL)]
fn test_two_block_scenario(#[case] name: &str, #[case] expected: &str) {
    assert_eq!(remove(ORIGINAL, name), expected);
}

#[test]
fn test_no_match_is_byte_identical() {
    let content = "# header\r\n\tEnvironment \nEnvironmentName:\tX\n\n  trailing  \nno newline";
    let removal = remove_block(content, "missing", &Markers::default());
    assert!(!removal.removed);
    assert_eq!(removal.content, content);
}

#[test]
fn test_preamble_preserved() {
    let content = "Version:\t2\n\nEnvironment\nEnvironmentName:\tA\nFoo:1\n";
    assert_eq!(remove(content, "A"), "Version:\t2\n\n");
}

#[test]
fn test_middle_block_removed_order_kept() {
    let content = "Environment\nEnvironmentName:\tA\n\
                   Environment\nEnvironmentName:\tB\nx\n\
                   Environment\nEnvironmentName:\tC\n";
    let result = remove(content, "B");
    assert_eq!(
        result,
        "Environment\nEnvironmentName:\tA\nEnvironment\nEnvironmentName:\tC\n"
    );

    assert_eq!(block_names(&result, &Markers::default()), vec!["A", "C"]);
}

#[test]
fn test_lines_before_declaration_are_dropped_with_block() {
    let content = "Environment\nComment:\tpre\nEnvironmentName:\tA\nFoo:1\nEnvironment\nEnvironmentName:\tB\n";
    assert_eq!(remove(content, "A"), "Environment\nEnvironmentName:\tB\n");
}

#[test]
fn test_whitespace_around_markers_is_trimmed() {
    let content = "  Environment\t\n\tEnvironmentName:\tA  \nFoo:1\nEnvironment\nEnvironmentName:\tB\n";
    assert_eq!(remove(content, "A"), "Environment\nEnvironmentName:\tB\n");
}

#[test]
fn test_space_separated_declaration_does_not_match() {
    let content = "Environment\nEnvironmentName: A\n";
    assert_eq!(remove(content, "A"), content);
}

#[test]
fn test_noop_then_remove_equals_direct_remove() {
    let after_noop = remove(ORIGINAL, "C");
    assert_eq!(remove(&after_noop, "A"), remove(ORIGINAL, "A"));
}

#[test]
fn test_duplicate_names_all_removed() {
    // Every block declaring the name is dropped
    let content = "Environment\nEnvironmentName:\tA\nEnvironment\nEnvironmentName:\tB\nEnvironment\nEnvironmentName:\tA\n";
    assert_eq!(remove(content, "A"), "Environment\nEnvironmentName:\tB\n");
}

#[test]
fn test_second_declaration_is_listed_and_removed() {
    // A block can be removed by any of its declarations, and the listing shows all of them
    let content = "Environment\nEnvironmentName:\tA\nEnvironmentName:\tAlias\nEnvironment\nEnvironmentName:\tB\n";
    let markers = Markers::default();

    assert_eq!(block_names(content, &markers), vec!["A", "Alias", "B"]);
    assert_eq!(find_block(content, "Alias", &markers).map(|b| b.start_line), Some(1));
    assert_eq!(remove(content, "Alias"), "Environment\nEnvironmentName:\tB\n");
}
