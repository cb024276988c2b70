//! Indexed state computations.
//!
//! This module provides [`IndexedState`], a state monad whose state (the
//! *index*) is allowed to change type from one step to the next, together
//! with the free constructors [`pure`], [`get`], [`gets`], [`put`],
//! [`modify`] and [`join`].
//!
//! [`State`] is the special case where the index type never changes.
//!
//! # Do-Notation with ixdo! Macro
//!
//! The [`ixdo!`](crate::ixdo) macro chains `flat_map` calls in a
//! do-notation style:
//!
//! ```rust
//! use indexed_state::ixdo;
//! use indexed_state::effect::IndexedState;
//!
//! let computation: IndexedState<i32, String, i32> = ixdo! {
//!     current <= IndexedState::get();
//!     _ <= IndexedState::put(current + 1);
//!     next <= IndexedState::get();
//!     IndexedState::put(format!("next={next}")).then(IndexedState::pure(current))
//! };
//!
//! let (result, final_index) = computation.run(41);
//! assert_eq!(result, 41);
//! assert_eq!(final_index, "next=42");
//! ```
//!
//! # Thread Safety
//!
//! By default computations share their closures through [`std::rc::Rc`] and
//! are neither `Send` nor `Sync`. With the `arc` feature the closures are
//! held in [`std::sync::Arc`], every closure handed to a constructor or
//! combinator must be `Send + Sync` (see [`Shareable`]), and the resulting
//! computations can be run from several threads at once.
//!
//! `Send + Sync` is not purity. Every closure handed to a constructor or
//! combinator must be pure: its output depends only on its arguments and it
//! has no observable side effects. The composition laws, repeatable `run`
//! calls and concurrent runs of one computation all rely on this. A closure
//! that closes over shared mutable state (a `Cell`, an `AtomicUsize`, a
//! `Mutex`) still type-checks, but each run may then observe a different
//! world. The types cannot detect this; keeping closures pure is the
//! caller's responsibility.
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! use indexed_state::effect::State;
//!
//! let calls = Arc::new(AtomicUsize::new(0));
//! let counted = Arc::clone(&calls);
//! // Impure: the result depends on how often the computation has run.
//! let ticket: State<(), usize> = State::new(move |()| (counted.fetch_add(1, Ordering::SeqCst), ()));
//!
//! assert_ne!(ticket.eval(()), ticket.eval(()));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// The closure type stored inside an [`IndexedState`].
#[cfg(feature = "arc")]
pub(crate) type RunFunction<I, O, A> = dyn Fn(I) -> (A, O) + Send + Sync;

#[cfg(not(feature = "arc"))]
pub(crate) type RunFunction<I, O, A> = dyn Fn(I) -> (A, O);

// =============================================================================
// Shareable Marker
// =============================================================================

/// Bound placed on every closure and captured value stored in a computation.
///
/// Without the `arc` feature every type is `Shareable`. With it, only
/// `Send + Sync` types are.
#[cfg(feature = "arc")]
pub trait Shareable: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: ?Sized + Send + Sync> Shareable for T {}

/// Bound placed on every closure and captured value stored in a computation.
///
/// Without the `arc` feature every type is `Shareable`. With it, only
/// `Send + Sync` types are.
#[cfg(not(feature = "arc"))]
pub trait Shareable {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized> Shareable for T {}

// =============================================================================
// Indexed State Monad
// =============================================================================

mod indexed_state;

pub use indexed_state::IndexedState;
pub use indexed_state::State;
pub use indexed_state::{get, gets, join, modify, pure, put};

// =============================================================================
// Do-Notation Macro
// =============================================================================

mod indexed_macro;
