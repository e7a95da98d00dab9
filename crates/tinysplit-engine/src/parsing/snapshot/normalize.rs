use serde::Serialize;
use xi_rope::Rope;

use crate::parsing::{
    SplitDoc,
    rope::{Span, preview},
    scope::{NestingStack, Sigil, StackEntry},
};

/// Snapshot of a split document for testing with `insta`.
#[derive(Serialize)]
pub struct Snap {
    pub lines: Vec<LineSnap>,
    /// Entries left open at end of input.
    pub unclosed: NestingStack,
}

/// Snapshot of a single line.
#[derive(Serialize)]
pub struct LineSnap {
    /// Byte span of the source line, terminator included.
    pub span: Span,
    /// Preview of the source line, trimmed.
    pub text: String,
    pub sigil: Option<Sigil>,
    pub opened: Option<StackEntry>,
    pub closed: Vec<StackEntry>,
    /// Stack depth after the line.
    pub depth: usize,
}

/// Converts a split document into a serializable snapshot for testing.
pub fn normalize(rope: &Rope, doc: &SplitDoc) -> Snap {
    let lines = doc
        .lines
        .iter()
        .map(|l| LineSnap {
            span: l.span,
            text: preview(rope, l.span, 60).trim().to_string(),
            sigil: l.class.sigil,
            opened: l.class.opened.clone(),
            closed: l.class.closed.clone(),
            depth: l.class.stack_after.depth(),
        })
        .collect();

    Snap {
        lines,
        unclosed: doc.unclosed.clone(),
    }
}
