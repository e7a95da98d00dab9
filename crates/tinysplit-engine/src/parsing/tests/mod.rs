//! Whole-document behaviour of the splitter.
//!
//! Each test feeds a short document through `split_str` and checks what the
//! interesting lines closed, then runs the invariant checker over the result.

use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::parsing::{
    SplitDoc,
    scope::{Anomaly, EntryKind, Sigil, StackEntry},
    snapshot, split_document, split_str,
};

fn split_checked(text: &str) -> SplitDoc {
    let rope = Rope::from(text);
    let doc = split_document(&rope);
    snapshot::invariants(&rope, &doc);
    doc
}

fn raw(entries: &[StackEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.raw_text.as_str()).collect()
}

#[rstest]
#[case::single("(\n)")]
#[case::sequential("(a\n)\n(b\n)\n(c\n)")]
#[case::nested("(a\n(b\n(c\n)\n)\n)")]
#[case::mixed("(a\n(b\n)\n(c\n)\n)")]
fn matched_blocks_balance(#[case] text: &str) {
    let doc = split_checked(text);
    assert!(doc.unclosed.is_empty());
    assert!(doc.is_balanced());

    let opened: Vec<&StackEntry> = doc
        .lines
        .iter()
        .filter_map(|l| l.class.opened.as_ref())
        .collect();
    let closed: Vec<&StackEntry> = doc.lines.iter().flat_map(|l| &l.class.closed).collect();
    assert_eq!(opened.len(), closed.len());
    for entry in opened {
        assert_eq!(closed.iter().filter(|c| **c == entry).count(), 1);
    }
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\t")]
#[case(" \t \r")]
fn blank_lines_are_idempotent(#[case] blank: &str) {
    let text = format!("(a\n:b\n{blank}\n)");
    let doc = split_checked(&text);
    let blank_line = &doc.lines[2].class;
    assert_eq!(blank_line.sigil, None);
    assert_eq!(blank_line.stack_after, doc.lines[1].class.stack_after);
}

#[test]
fn attributes_accumulate_until_block_closes() {
    let doc = split_checked("(\n:a\n:b\n)");
    assert_eq!(raw(&doc.lines[3].class.closed), vec!["(", ":a", ":b"]);
    assert!(doc.unclosed.is_empty());
}

#[test]
fn section_replacement() {
    let doc = split_checked("(\n@s1\n@s2\n)");
    assert_eq!(raw(&doc.lines[2].class.closed), vec!["@s1"]);
    assert_eq!(raw(&doc.lines[3].class.closed), vec!["(", "@s2"]);
}

#[test]
fn unmatched_closer_on_empty_stack() {
    let doc = split_checked(")");
    let c = &doc.lines[0].class;
    assert!(c.closed.is_empty());
    assert_eq!(c.opened, None);
    assert!(c.stack_after.is_empty());
    assert_eq!(c.anomaly(), Some(Anomaly::UnmatchedCloser));
    assert!(!doc.is_balanced());
}

#[test]
fn section_scan_skips_attribute() {
    let doc = split_checked("(\n:leaf\n@s1");
    let c = &doc.lines[2].class;
    assert!(c.closed.is_empty());
    assert_eq!(
        c.stack_after.entries(),
        &[
            StackEntry::new(EntryKind::Block, "("),
            StackEntry::new(EntryKind::Attribute, ":leaf"),
            StackEntry::new(EntryKind::Section, "@s1"),
        ]
    );
}

#[test]
fn reference_document() {
    let text = "\n(BLOCK\n  :attribute\n  My text\n\n  @section1\n  :a1\n  @section2\n  :a2\n)";
    let doc = split_checked(text);

    let sigils: Vec<Option<Sigil>> = doc.lines.iter().map(|l| l.class.sigil).collect();
    assert_eq!(
        sigils,
        vec![
            None,
            Some(Sigil::Open),
            Some(Sigil::Attribute),
            Some(Sigil::Text('M')),
            None,
            Some(Sigil::Section),
            Some(Sigil::Attribute),
            Some(Sigil::Section),
            Some(Sigil::Attribute),
            Some(Sigil::Close),
        ]
    );

    // @section2 ends @section1 together with its attribute
    assert_eq!(raw(&doc.lines[7].class.closed), vec!["@section1", ":a1"]);
    assert_eq!(
        raw(&doc.lines[9].class.closed),
        vec!["(BLOCK", ":attribute", "@section2", ":a2"]
    );
    assert!(doc.is_balanced());
}

#[test]
fn unclosed_entries_survive_to_end() {
    let doc = split_str("(a\n@s\n:k");
    assert_eq!(raw(doc.unclosed.entries()), vec!["(a", "@s", ":k"]);
    assert!(!doc.is_balanced());
}

#[test]
fn anomalies_report_line_indexes() {
    let doc = split_checked(")\n(a\n@\n)");
    let found: Vec<(usize, Option<Anomaly>)> = doc
        .anomalies()
        .map(|(i, l)| (i, l.class.anomaly()))
        .collect();
    assert_eq!(
        found,
        vec![
            (0, Some(Anomaly::UnmatchedCloser)),
            (2, Some(Anomaly::DanglingSectionEnd)),
        ]
    );
}

#[test]
fn crlf_terminators_are_not_payload() {
    let doc = split_checked("(a\r\n@s\r\n)\r\n");
    assert_eq!(doc.lines[1].class.payload, "s");
    assert_eq!(raw(&doc.lines[2].class.closed), vec!["(a", "@s"]);
}
