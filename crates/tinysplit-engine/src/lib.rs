pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use parsing::scope::{
    Anomaly, EntryKind, LineClass, NestingStack, ScopeClassifier, Sigil, Splitter, StackEntry,
    classify, split_lines,
};
pub use parsing::{SplitDoc, SplitLine, split_document, split_str};
