use xi_rope::Rope;

use crate::parsing::{
    SplitDoc,
    scope::{EntryKind, NestingStack, Sigil},
};

/// Validates splitter output invariants.
///
/// Asserts that:
/// - Line spans tile the rope from 0 to its length without gaps
/// - Each line's stack depth equals the previous depth minus `closed` plus `opened`
/// - An opened entry sits on top of the stack it produced
/// - Blank lines neither open nor close anything
/// - Every stack entry's kind agrees with the first character of its raw text
/// - `unclosed` equals the last line's stack
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, doc: &SplitDoc) {
    let mut offset = 0usize;
    let mut prev = NestingStack::new();

    for (i, line) in doc.lines.iter().enumerate() {
        assert_eq!(
            line.span.start, offset,
            "line {i} does not start where the previous one ended: {:?}",
            line.span
        );
        offset = line.span.end;

        let c = &line.class;
        let expected =
            prev.depth() - c.closed.len() + usize::from(c.opened.is_some());
        assert_eq!(
            c.stack_after.depth(),
            expected,
            "line {i} ({:?}) moved the stack by the wrong amount",
            c.trimmed
        );

        if let Some(opened) = &c.opened {
            assert_eq!(
                c.stack_after.top(),
                Some(opened),
                "line {i} opened an entry that is not on top"
            );
        }

        if c.sigil.is_none() {
            assert!(
                c.opened.is_none() && c.closed.is_empty(),
                "blank line {i} changed the stack"
            );
        }

        for e in &c.stack_after {
            let sigil = e.raw_text.chars().next().map(Sigil::from_char);
            let agrees = matches!(
                (e.kind, sigil),
                (EntryKind::Block, Some(Sigil::Open))
                    | (EntryKind::Attribute, Some(Sigil::Attribute))
                    | (EntryKind::Section, Some(Sigil::Section))
            );
            assert!(agrees, "entry {e:?} on line {i} has a mismatched sigil");
        }

        prev = c.stack_after.clone();
    }

    assert_eq!(offset, rope.len(), "line spans do not cover the rope");
    assert_eq!(doc.unclosed, prev, "unclosed entries differ from the last stack");
}
