use super::{
    sigil::Sigil,
    stack::{EntryKind, NestingStack, StackEntry},
};

/// Everything one line did to the nesting stack.
///
/// Derived only from the stack before the line and the line itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// The line with surrounding whitespace removed.
    pub trimmed: String,
    /// `None` for blank or whitespace-only lines.
    pub sigil: Option<Sigil>,
    /// The trimmed line after its sigil.
    pub payload: String,
    /// The entry this line pushed, if any.
    pub opened: Option<StackEntry>,
    /// Entries this line removed, oldest first.
    pub closed: Vec<StackEntry>,
    /// The stack after this line. Feed it into the next `classify` call.
    pub stack_after: NestingStack,
}

/// A line that looked structural but had nothing to act on.
///
/// The classifier treats these as no-ops; callers decide whether to surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anomaly {
    /// `)` with no open block anywhere on the stack.
    UnmatchedCloser,
    /// Bare `@` with no open section to end.
    DanglingSectionEnd,
}

impl std::fmt::Display for Anomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Anomaly::UnmatchedCloser => write!(f, "closer without an open block"),
            Anomaly::DanglingSectionEnd => write!(f, "section end without an open section"),
        }
    }
}

impl LineClass {
    fn blank(stack: NestingStack) -> Self {
        Self {
            trimmed: String::new(),
            sigil: None,
            payload: String::new(),
            opened: None,
            closed: Vec::new(),
            stack_after: stack,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.sigil.is_none()
    }

    pub fn anomaly(&self) -> Option<Anomaly> {
        if !self.closed.is_empty() {
            return None;
        }
        match self.sigil {
            Some(Sigil::Close) => Some(Anomaly::UnmatchedCloser),
            Some(Sigil::Section) if self.opened.is_none() => Some(Anomaly::DanglingSectionEnd),
            _ => None,
        }
    }
}

/// Applies one line to a nesting stack.
///
/// Every sigil reduces to a single `close_from` index: entries at or above it are
/// closed, then the new entry (if any) is appended in their place.
pub struct ScopeClassifier;

impl ScopeClassifier {
    /// Classifies `line` against `stack` and returns the updated stack inside the result.
    ///
    /// Total over all inputs: unmatched closers and bare section markers with nothing to
    /// close leave the stack untouched.
    pub fn classify(&self, mut stack: NestingStack, line: &str) -> LineClass {
        let trimmed = line.trim();
        let Some((sigil, payload)) = Sigil::split(trimmed) else {
            return LineClass::blank(stack);
        };

        let (close_from, push) = match sigil {
            Sigil::Open => (stack.len(), Some(StackEntry::new(EntryKind::Block, trimmed))),
            Sigil::Attribute => (
                stack.len(),
                Some(StackEntry::new(EntryKind::Attribute, trimmed)),
            ),
            Sigil::Close => (Self::block_close_index(&stack), None),
            Sigil::Section => {
                let push = (!payload.is_empty())
                    .then(|| StackEntry::new(EntryKind::Section, trimmed));
                (Self::section_close_index(&stack), push)
            }
            Sigil::Text(_) => (stack.len(), None),
        };

        let opened = push.clone();
        let closed = stack.close_and_push(close_from, push);

        LineClass {
            trimmed: trimmed.to_string(),
            sigil: Some(sigil),
            payload: payload.to_string(),
            opened,
            closed,
            stack_after: stack,
        }
    }

    /// Nearest open block, or the stack length when none is open.
    fn block_close_index(stack: &NestingStack) -> usize {
        stack
            .scan_down(|k| k == EntryKind::Block)
            .unwrap_or(stack.len())
    }

    /// Nearest section at the current level. A block found first shields everything below.
    fn section_close_index(stack: &NestingStack) -> usize {
        match stack.scan_down(|k| matches!(k, EntryKind::Section | EntryKind::Block)) {
            Some(i) if stack.entries()[i].kind == EntryKind::Section => i,
            _ => stack.len(),
        }
    }
}

/// Shorthand for [`ScopeClassifier::classify`].
pub fn classify(stack: NestingStack, line: &str) -> LineClass {
    ScopeClassifier.classify(stack, line)
}
