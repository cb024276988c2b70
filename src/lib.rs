//! # indexed-state
//!
//! An indexed state monad for Rust: stateful computations whose state (the
//! *index*) may change type from one step to the next.
//!
//! ## Overview
//!
//! An [`IndexedState<I, O, A>`](effect::IndexedState) is a deferred function
//! from an input index of type `I` to a result of type `A` and an output
//! index of type `O`. Combinators build new computations without running
//! anything; execution happens only in `run`, `eval` and `exec`.
//!
//! - **Construction**: `new`, `pure`, `get`, `gets`, `put`, `modify`
//! - **Execution**: `run`, `eval`, `exec`
//! - **Transformation**: `fmap`, `contramap`, `imap`, `dimap`, `ap`,
//!   `flat_map`, `then`, `map2`, `product`, `flatten` / `join`
//! - **Do-notation**: the [`ixdo!`] macro
//!
//! ## Feature Flags
//!
//! - `arc`: Store closures in `Arc` and require them to be `Send + Sync`, so
//!   computations can be shared and run across threads
//!
//! ## Example
//!
//! Sequencing that the compiler checks: a document can only be finished
//! after it has been opened.
//!
//! ```rust
//! use indexed_state::effect::IndexedState;
//!
//! struct Closed;
//! struct Open { lines: Vec<String> }
//! struct Finished { text: String }
//!
//! fn open() -> IndexedState<Closed, Open, ()> {
//!     IndexedState::modify(|Closed| Open { lines: Vec::new() })
//! }
//!
//! fn write(line: &'static str) -> IndexedState<Open, Open, ()> {
//!     IndexedState::modify(move |mut document: Open| {
//!         document.lines.push(line.to_string());
//!         document
//!     })
//! }
//!
//! fn finish() -> IndexedState<Open, Finished, usize> {
//!     IndexedState::new(|document: Open| {
//!         let count = document.lines.len();
//!         (count, Finished { text: document.lines.join("\n") })
//!     })
//! }
//!
//! let program = open().then(write("first")).then(write("second")).then(finish());
//! let (count, finished) = program.run(Closed);
//! assert_eq!(count, 2);
//! assert_eq!(finished.text, "first\nsecond");
//! ```
//!
//! Writing after `finish` does not compile:
//!
//! ```rust,compile_fail
//! use indexed_state::effect::IndexedState;
//!
//! struct Open;
//! #[derive(Clone)]
//! struct Finished;
//!
//! let finish: IndexedState<Open, Finished, ()> = IndexedState::put(Finished);
//! let write: IndexedState<Open, Open, ()> = IndexedState::modify(|open: Open| open);
//!
//! let _ = finish.then(write);
//! ```
//!
//! Neither does running a computation from the wrong index:
//!
//! ```rust,compile_fail
//! use indexed_state::effect::IndexedState;
//!
//! struct Closed;
//! struct Open;
//!
//! let write: IndexedState<Open, Open, ()> = IndexedState::modify(|open: Open| open);
//! let _ = write.run(Closed);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use indexed_state::prelude::*;
///
/// let double = modify(|n: i32| n * 2);
/// assert_eq!(double.then(get()).run(5), (10, 10));
/// ```
pub mod prelude {
    pub use crate::effect::*;
    pub use crate::ixdo;
}

pub mod effect;
