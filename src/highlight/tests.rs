//! Highlighter test suite

use crate::highlight::AnnotationKind::{self, *};
use crate::highlight::{highlight_line, KEYWORDS};

fn spans(text: &str) -> Vec<(String, AnnotationKind)> {
    highlight_line(text)
        .iter_annotations()
        .map(|(s, k)| (s.to_string(), k))
        .collect()
}

macro_rules! assert_spans {
    ($line: expr, [$(($text: expr, $kind: expr)),* $(,)?]) => {
        assert_eq!(spans($line), vec![$(($text.to_string(), $kind)),*], "line {:?}", $line)
    };
}

#[test]
fn label_mnemonic_registers_immediate() {
    assert_spans!(
        "loop: addi a0, a1, -5",
        [
            ("loop:", Label),
            (" ", Syntactic),
            ("addi", Mnemonic),
            (" ", Syntactic),
            ("a0", Register),
            (", ", Syntactic),
            ("a1", Register),
            (", ", Syntactic),
            ("-5", Immediate),
        ]
    );
}

#[test]
fn offset_register_syntax() {
    assert_spans!(
        "sw a0, 5(sp)",
        [
            ("sw", Mnemonic),
            (" ", Syntactic),
            ("a0", Register),
            (", ", Syntactic),
            ("5", Immediate),
            ("(", Syntactic),
            ("sp", Register),
            (")", Syntactic),
        ]
    );
}

#[test]
fn mnemonics_without_keywords_still_highlight() {
    assert_spans!(
        "beg zero, t1, done",
        [
            ("beg", Mnemonic),
            (" ", Syntactic),
            ("zero", Register),
            (", ", Syntactic),
            ("t1", Register),
            (", done", Syntactic),
        ]
    );
}

#[test]
fn register_pattern_takes_two_digits() {
    assert_spans!(
        "add a123, x10, s11",
        [
            ("add", Mnemonic),
            (" ", Syntactic),
            ("a12", Register),
            ("3, ", Syntactic),
            ("x10", Register),
            (", ", Syntactic),
            ("s11", Register),
        ]
    );
}

#[test]
fn comments_override_everything_after_them() {
    assert_spans!("j #target", [("j", Mnemonic), (" ", Syntactic), ("#target", Comment)]);
}

#[test]
fn invalid_lines_are_one_error_span() {
    let line = highlight_line("addi a0, a1, 3000");

    assert!(!line.verdict().is_valid());
    assert_eq!(
        line.iter_annotations().collect::<Vec<_>>(),
        vec![("addi a0, a1, 3000", Error)]
    );
    assert_eq!(
        line.to_string(),
        "[error:addi a0, a1, 3000] ; Immediate 3000 out of valid range; must be within [-2048 : 2047]"
    );

    assert_spans!("ret", [("ret", Error)]);
}

#[test]
fn blank_lines_have_no_spans() {
    let line = highlight_line("");

    assert!(line.verdict().is_valid());
    assert_eq!(line.iter_annotations().count(), 0);
    assert_spans!("  \t", [("  \t", Syntactic)]);
}

#[test]
fn labels_may_be_non_ascii() {
    assert_spans!("début:", [("début:", Label)]);
}

#[test]
fn display_skips_plain_syntax() {
    assert_eq!(
        highlight_line("sw a0, 5(sp)").to_string(),
        "[mnemonic:sw] [register:a0] [immediate:5] [register:sp]"
    );
}

#[test]
fn json_form() {
    assert_eq!(
        highlight_line("nop").to_json(),
        serde_json::json!({
            "text": "nop",
            "message": null,
            "spans": [{ "kind": "mnemonic", "text": "nop" }],
        })
    );

    assert_eq!(
        highlight_line("foo").to_json()["message"],
        serde_json::json!("Unknown instruction")
    );
}

#[test]
fn keywords_are_unique() {
    let mut sorted = KEYWORDS.to_vec();
    sorted.sort();
    sorted.dedup();

    assert_eq!(sorted.len(), KEYWORDS.len());
}
