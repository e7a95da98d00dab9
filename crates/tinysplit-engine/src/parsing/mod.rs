pub mod rope;
pub mod scope;
pub mod snapshot;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use rope::{Span, lines_with_spans};
use scope::{LineClass, NestingStack, Splitter};

/// One source line together with what it did to the nesting stack.
#[derive(Debug, Clone)]
pub struct SplitLine {
    /// Byte span of the source line, terminator included.
    pub span: Span,
    pub class: LineClass,
}

#[derive(Debug)]
pub struct SplitDoc {
    pub lines: Vec<SplitLine>,
    /// Entries never closed by the end of the document.
    pub unclosed: NestingStack,
}

impl SplitDoc {
    /// Lines that looked structural but had nothing to act on.
    pub fn anomalies(&self) -> impl Iterator<Item = (usize, &SplitLine)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.class.anomaly().is_some())
    }

    pub fn is_balanced(&self) -> bool {
        self.unclosed.is_empty() && self.anomalies().next().is_none()
    }
}

pub fn split_document(rope: &Rope) -> SplitDoc {
    let mut splitter = Splitter::new();

    let lines: Vec<SplitLine> = lines_with_spans(rope)
        .map(|lr| SplitLine {
            span: lr.span,
            class: splitter.push(lr.content()),
        })
        .collect();

    let unclosed = splitter.finish();
    log::debug!(
        "split {} lines, {} entries left open",
        lines.len(),
        unclosed.len()
    );

    SplitDoc { lines, unclosed }
}

/// Convenience: split a plain string.
pub fn split_str(text: &str) -> SplitDoc {
    split_document(&Rope::from(text))
}
