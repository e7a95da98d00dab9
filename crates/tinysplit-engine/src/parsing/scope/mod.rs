//! # Scope Stack Classification
//!
//! Line-at-a-time nesting for the tinysplit notation. There is no indentation and no
//! paired braces in the usual sense: a line's first non-blank character decides what it
//! opens and what it closes.
//!
//! | Sigil | Effect |
//! |-------|--------|
//! | `(`   | opens a block |
//! | `)`   | closes the nearest open block and everything above it |
//! | `:`   | opens an attribute, left open until something below it closes |
//! | `@name` | closes the section at the current level (if any) and opens `name` |
//! | `@`   | closes the section at the current level |
//! | other | inert text |
//!
//! ## Modules
//!
//! - **`sigil`**: `Sigil`, the role selected by a line's first character
//! - **`stack`**: `StackEntry`, `EntryKind` and the `NestingStack` with its top-down scan
//! - **`classify`**: `ScopeClassifier`, the per-line transition, and `LineClass`
//! - **`splitter`**: `Splitter` and `split_lines` for driving a whole document
//!
//! ## Key Invariants
//!
//! - The stack is always one root-to-insertion-point path, oldest entry first
//! - An entry leaves the stack on the line that closes it, never later
//! - Malformed input never fails; it just closes nothing

pub mod classify;
pub mod sigil;
pub mod splitter;
pub mod stack;

pub use classify::{Anomaly, LineClass, ScopeClassifier, classify};
pub use sigil::Sigil;
pub use splitter::{Splitter, split_lines};
pub use stack::{EntryKind, NestingStack, StackEntry};
