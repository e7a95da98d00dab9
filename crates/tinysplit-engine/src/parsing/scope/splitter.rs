use super::{
    classify::{LineClass, ScopeClassifier},
    stack::NestingStack,
};

/// Threads a nesting stack through successive [`ScopeClassifier::classify`] calls.
pub struct Splitter {
    classifier: ScopeClassifier,
    stack: NestingStack,
}

impl Splitter {
    pub fn new() -> Self {
        Self::with_stack(NestingStack::new())
    }

    /// Resumes from a stack produced earlier, e.g. by a previous chunk of the same document.
    pub fn with_stack(stack: NestingStack) -> Self {
        Self {
            classifier: ScopeClassifier,
            stack,
        }
    }

    pub fn push(&mut self, line: &str) -> LineClass {
        let stack = std::mem::take(&mut self.stack);
        let class = self.classifier.classify(stack, line);
        self.stack = class.stack_after.clone();
        log::trace!(
            "[{}] {:?} opened={:?} closed={}",
            self.stack.depth(),
            class.trimmed,
            class.opened.as_ref().map(|e| e.kind),
            class.closed.len()
        );
        class
    }

    pub fn stack(&self) -> &NestingStack {
        &self.stack
    }

    /// Consumes the splitter, returning the entries still open at end of input.
    pub fn finish(self) -> NestingStack {
        self.stack
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifies `lines` in order, starting from an empty stack.
pub fn split_lines<I, S>(lines: I) -> impl Iterator<Item = LineClass>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut splitter = Splitter::new();
    lines
        .into_iter()
        .map(move |line| splitter.push(line.as_ref()))
}
