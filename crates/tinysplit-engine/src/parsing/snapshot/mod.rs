//! # Snapshot Testing Support
//!
//! Utilities for testing the splitter via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a `SplitDoc` to a stable, serializable `Snap` for `insta`
//!   YAML snapshots
//! - **`invariants`**: Runtime checks for splitter correctness (spans tile the rope,
//!   stack depth moves by exactly what each line opened and closed, entry kinds agree
//!   with their sigils)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
