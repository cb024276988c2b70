//! ixdo! macro for do-notation over indexed state computations.
//!
//! # Syntax
//!
//! - `pattern <= expression;` - Bind: runs the computation and binds its result
//! - `let pattern = expression;` - Pure let binding
//! - `name <= get;` - Binds the current index
//! - `put expression;` - Replaces the index, possibly with a value of another type
//! - `modify function;` - Replaces the index with `function` applied to it
//! - `expression` - Final expression (already a computation)
//!
//! The bind and let forms only call `flat_map` on the bound expression, so
//! they accept any value with an inherent `flat_map` of the right shape. The
//! `get`, `put` and `modify` forms expand to the [`crate::effect`]
//! constructors and always build an [`IndexedState`](crate::effect::IndexedState).
//!
//! `<-` is not a valid token sequence in macro patterns, so `<=` stands in
//! for it.
//!
//! # Examples
//!
//! A type-changing sequence:
//!
//! ```rust
//! use indexed_state::ixdo;
//! use indexed_state::effect::IndexedState;
//!
//! let computation: IndexedState<u32, Vec<u32>, usize> = ixdo! {
//!     start <= IndexedState::get();
//!     let end = start + 3;
//!     _ <= IndexedState::modify(move |from: u32| (from..end).collect::<Vec<_>>());
//!     IndexedState::gets(|items: &Vec<u32>| items.len())
//! };
//!
//! assert_eq!(computation.run(1), (3, vec![1, 2, 3]));
//! ```
//!
//! The same sequence with the index statements:
//!
//! ```rust
//! use indexed_state::ixdo;
//! use indexed_state::effect::{IndexedState, gets};
//!
//! let computation: IndexedState<u32, Vec<u32>, usize> = ixdo! {
//!     start <= get;
//!     modify move |from: u32| (from..start + 3).collect::<Vec<_>>();
//!     gets(|items: &Vec<u32>| items.len())
//! };
//!
//! assert_eq!(computation.run(1), (3, vec![1, 2, 3]));
//! ```
//!
//! # Implementation Notes
//!
//! `pattern <= expression; rest` expands into:
//! ```rust,ignore
//! expression.flat_map(move |pattern| { /* rest */ })
//! ```
//!
//! The continuation closure must be `Fn`, so values bound earlier and used
//! inside a nested `move` closure need to be `Copy` or cloned explicitly.

#![forbid(unsafe_code)]

/// A macro for do-notation style chaining of [`IndexedState`](crate::effect::IndexedState)
/// computations.
///
/// # Syntax
///
/// ```text
/// ixdo! {
///     pattern <= computation;      // Bind operation (flat_map)
///     let pattern = expression;     // Pure let binding
///     name <= get;                  // Bind the current index
///     put expression;               // Replace the index
///     modify function;              // Transform the index
///     computation                   // Final expression
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use indexed_state::ixdo;
/// use indexed_state::effect::State;
///
/// let computation: State<i32, i32> = ixdo! {
///     current <= State::get();
///     _ <= State::put(current + 1);
///     next <= State::get();
///     State::pure(current + next)
/// };
///
/// assert_eq!(computation.run(10), (21, 11));
/// ```
#[macro_export]
macro_rules! ixdo {
    // ==========================================================================
    // Index statements: name <= get; put value; modify function;
    // ==========================================================================

    ($pattern:ident <= get ; $($rest:tt)+) => {
        $crate::effect::get().flat_map(move |$pattern| {
            $crate::ixdo!($($rest)+)
        })
    };

    (put $value:expr ; $($rest:tt)+) => {
        $crate::effect::put($value).flat_map(move |()| {
            $crate::ixdo!($($rest)+)
        })
    };

    (modify $function:expr ; $($rest:tt)+) => {
        $crate::effect::modify($function).flat_map(move |()| {
            $crate::ixdo!($($rest)+)
        })
    };

    // ==========================================================================
    // Bind operation: pattern <= computation; rest
    // ==========================================================================

    ($pattern:ident <= $computation:expr ; $($rest:tt)+) => {
        $computation.flat_map(move |$pattern| {
            $crate::ixdo!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $computation:expr ; $($rest:tt)+) => {
        $computation.flat_map(move |($($pattern)*)| {
            $crate::ixdo!($($rest)+)
        })
    };

    (_ <= $computation:expr ; $($rest:tt)+) => {
        $computation.flat_map(move |_| {
            $crate::ixdo!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::ixdo!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::ixdo!($($rest)+)
        }
    };

    // ==========================================================================
    // Terminal case, matched last so `let` is never parsed as an expression
    // ==========================================================================

    ($result:expr) => {
        $result
    };
}
