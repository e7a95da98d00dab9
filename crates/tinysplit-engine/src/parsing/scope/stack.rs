use serde::Serialize;

/// The role of an open entry on the nesting stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntryKind {
    /// Opened by `(`, closed by the next matching `)`.
    Block,
    /// Opened by `:`. Never closed by its own sigil, only truncated away.
    Attribute,
    /// Opened by `@name`, closed by a sibling `@`, a bare `@`, or the enclosing `)`.
    Section,
}

/// One currently-open node in the document's implied tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackEntry {
    pub kind: EntryKind,
    /// The trimmed source line that opened this entry, sigil included.
    pub raw_text: String,
}

impl StackEntry {
    pub fn new(kind: EntryKind, raw_text: impl Into<String>) -> Self {
        Self {
            kind,
            raw_text: raw_text.into(),
        }
    }

    /// The text after the sigil, e.g. `BLOCK` for `(BLOCK`.
    pub fn payload(&self) -> &str {
        let mut chars = self.raw_text.chars();
        chars.next();
        chars.as_str()
    }
}

/// Path of open entries from the document root to the current insertion point.
///
/// Oldest entry first. Only the classifier mutates it, through [`NestingStack::close_and_push`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct NestingStack(Vec<StackEntry>);

impl NestingStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Alias for [`len`](Self::len), reads better in printers.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn entries(&self) -> &[StackEntry] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StackEntry> {
        self.0.iter()
    }

    /// The innermost open entry.
    pub fn top(&self) -> Option<&StackEntry> {
        self.0.last()
    }

    /// Entry `n` places below the top; `from_top(0)` is the innermost.
    pub fn from_top(&self, n: usize) -> Option<&StackEntry> {
        let i = self.0.len().checked_sub(n)?.checked_sub(1)?;
        self.0.get(i)
    }

    /// Scans from the top down and returns the index of the first entry whose kind
    /// satisfies `stop`, or `None` if the scan runs off the bottom.
    pub fn scan_down(&self, stop: impl Fn(EntryKind) -> bool) -> Option<usize> {
        self.0.iter().rposition(|e| stop(e.kind))
    }

    /// Removes every entry from `close_from` upwards, then appends `push` if given.
    ///
    /// Returns the removed entries, oldest first. A `close_from` at or past the end
    /// removes nothing.
    pub(crate) fn close_and_push(
        &mut self,
        close_from: usize,
        push: Option<StackEntry>,
    ) -> Vec<StackEntry> {
        let closed = if close_from < self.0.len() {
            self.0.split_off(close_from)
        } else {
            Vec::new()
        };
        if let Some(entry) = push {
            self.0.push(entry);
        }
        closed
    }

    pub fn into_entries(self) -> Vec<StackEntry> {
        self.0
    }
}

impl From<Vec<StackEntry>> for NestingStack {
    fn from(entries: Vec<StackEntry>) -> Self {
        Self(entries)
    }
}

impl<'a> IntoIterator for &'a NestingStack {
    type Item = &'a StackEntry;
    type IntoIter = std::slice::Iter<'a, StackEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
