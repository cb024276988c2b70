//! Indexed State Monad - stateful computation with a type-changing state.
//!
//! An indexed state computation threads a value (the *index*) through a
//! sequence of operations just like the State monad does, except that every
//! step may hand the next step an index of a different type.
//!
//! # Overview
//!
//! An `IndexedState<I, O, A>` encapsulates a function `I -> (A, O)`, where
//! `I` is the index the computation starts from, `O` is the index it leaves
//! behind and `A` is the result type. When `I` and `O` are the same type the
//! computation is an ordinary [`State`].
//!
//! Sequencing with [`IndexedState::flat_map`] requires the output index type
//! of the first computation to be the input index type of the second, so a
//! sequence of steps that does not line up is rejected by the compiler.
//!
//! # Note on Type Classes
//!
//! `IndexedState` provides its own `fmap`, `flat_map`, `ap`, etc. methods
//! directly on the type. The index types vary between steps, which cannot be
//! expressed with a single-parameter `Functor`/`Monad` type class, and the
//! closures are stored behind `'static` trait objects.
//!
//! # Laws
//!
//! ## Functor Laws
//!
//! - Identity: `state.fmap(|x| x) == state`
//! - Composition: `state.fmap(f).fmap(g) == state.fmap(|x| g(f(x)))`
//!
//! ## Monad Laws
//!
//! - Left Identity: `IndexedState::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(IndexedState::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! ## Applicative Consistency
//!
//! - `argument.ap(function) == function.flat_map(|g| argument.fmap(g))`
//!
//! ## Index Mapping Laws
//!
//! - Contramap Identity: `state.contramap(|i| i) == state`
//! - Contramap Composition: `state.contramap(f).contramap(g) == state.contramap(|h| f(g(h)))`
//! - Imap Identity: `state.imap(|o| o) == state`
//! - Imap Composition: `state.imap(f).imap(g) == state.imap(|o| g(f(o)))`
//!
//! ## `MonadState` Laws
//!
//! - Get Put Law: `get().flat_map(put) == pure(())`
//! - Put Get Law: `put(s).then(get())` returns `s`
//! - Put Put Law: `put(s1).then(put(s2)) == put(s2)`
//! - Modify Composition: `modify(f).then(modify(g)) == modify(|s| g(f(s)))`
//!
//! # Examples
//!
//! Changing the index type:
//!
//! ```rust
//! use indexed_state::effect::IndexedState;
//!
//! let computation: IndexedState<i32, String, i32> =
//!     IndexedState::new(|count: i32| (count * 2, format!("seen {count}")));
//! let (result, final_index) = computation.run(21);
//! assert_eq!(result, 42);
//! assert_eq!(final_index, "seen 21");
//! ```
//!
//! Counter pattern:
//!
//! ```rust
//! use indexed_state::effect::State;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count| count + 1)
//! }
//!
//! let computation = increment()
//!     .then(increment())
//!     .then(increment())
//!     .then(State::get());
//!
//! let (count, _) = computation.run(0);
//! assert_eq!(count, 3);
//! ```

#![forbid(unsafe_code)]

use std::fmt;

use super::{ReferenceCounter, RunFunction, Shareable};

/// A computation that threads an index through a sequence of operations,
/// allowing the index to change type along the way.
///
/// `IndexedState<I, O, A>` represents a computation that, given an input
/// index of type `I`, produces a result of type `A` and an output index of
/// type `O`.
///
/// # Type Parameters
///
/// - `I`: The input index type
/// - `O`: The output index type
/// - `A`: The result type
///
/// # Examples
///
/// ```rust
/// use indexed_state::effect::IndexedState;
///
/// let computation: IndexedState<i32, String, i32> = IndexedState::get()
///     .flat_map(|current: i32| {
///         IndexedState::put(current.to_string()).then(IndexedState::pure(current + 1))
///     });
///
/// let (result, final_index) = computation.run(10);
/// assert_eq!(result, 11);
/// assert_eq!(final_index, "10");
/// ```
pub struct IndexedState<I, O, A>
where
    I: 'static,
    O: 'static,
    A: 'static,
{
    /// The wrapped index transition function.
    /// Reference counted so the computation can be cloned and captured by
    /// `flat_map` continuations.
    run_function: ReferenceCounter<RunFunction<I, O, A>>,
}

/// A state computation whose index type never changes.
///
/// # Examples
///
/// ```rust
/// use indexed_state::effect::State;
///
/// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
/// assert_eq!(state.run(10), (20, 11));
/// ```
pub type State<S, A> = IndexedState<S, S, A>;

impl<I, O, A> IndexedState<I, O, A>
where
    I: 'static,
    O: 'static,
    A: 'static,
{
    /// Creates a new `IndexedState` from an index transition function.
    ///
    /// Any function is accepted; this is the primitive every other
    /// constructor and combinator is built from.
    ///
    /// `function` must be pure. It may be called any number of times, from
    /// any thread when the `arc` feature is enabled, and the laws listed in
    /// the module documentation only hold if every call with the same index
    /// gives the same answer. Capturing shared mutable state is a caller
    /// error the type cannot detect.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the input index and returns
    ///   a tuple of (result, `output_index`)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// let state: IndexedState<i32, bool, i32> = IndexedState::new(|n: i32| (n + 1, n > 0));
    /// let (result, final_index) = state.run(10);
    /// assert_eq!(result, 11);
    /// assert!(final_index);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(I) -> (A, O) + Shareable + 'static,
    {
        Self {
            run_function: ReferenceCounter::new(function),
        }
    }

    /// Creates a new `IndexedState` from an index transition function.
    ///
    /// This is an alias for `new` that is more descriptive for transitions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// let computation: IndexedState<i32, i64, String> =
    ///     IndexedState::from_transition(|n: i32| (format!("was: {n}"), i64::from(n) + 1));
    /// let (result, final_index) = computation.run(10);
    /// assert_eq!(result, "was: 10");
    /// assert_eq!(final_index, 11);
    /// ```
    pub fn from_transition<F>(transition: F) -> Self
    where
        F: Fn(I) -> (A, O) + Shareable + 'static,
    {
        Self::new(transition)
    }

    /// Runs the computation with the given input index.
    ///
    /// Returns both the result and the output index. Panics raised by the
    /// closures the computation was built from propagate unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// let state: IndexedState<i32, String, i32> =
    ///     IndexedState::new(|n: i32| (n + 1, n.to_string()));
    /// assert_eq!(state.run(10), (11, "10".to_string()));
    /// ```
    pub fn run(&self, initial_index: I) -> (A, O) {
        (self.run_function)(initial_index)
    }

    /// Runs the computation and returns only the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// let state: IndexedState<i32, String, i32> =
    ///     IndexedState::new(|n: i32| (n * 2, n.to_string()));
    /// assert_eq!(state.eval(10), 20);
    /// ```
    pub fn eval(&self, initial_index: I) -> A {
        let (result, _) = self.run(initial_index);
        result
    }

    /// Runs the computation and returns only the output index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// let state: IndexedState<i32, String, i32> =
    ///     IndexedState::new(|n: i32| (n * 2, n.to_string()));
    /// assert_eq!(state.exec(10), "10");
    /// ```
    pub fn exec(&self, initial_index: I) -> O {
        let (_, final_index) = self.run(initial_index);
        final_index
    }

    /// Maps a function over the result of this computation.
    ///
    /// This is the Functor operation. The index is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// let state: IndexedState<i32, i32, i32> = IndexedState::get();
    /// let mapped = state.fmap(|value| value.to_string());
    /// assert_eq!(mapped.run(21), ("21".to_string(), 21));
    /// ```
    pub fn fmap<B, F>(self, function: F) -> IndexedState<I, O, B>
    where
        F: Fn(A) -> B + Shareable + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        IndexedState::new(move |index| {
            let (result, next_index) = (original_function)(index);
            (function(result), next_index)
        })
    }

    /// Alias for `fmap` to match Rust's naming conventions.
    pub fn map<B, F>(self, function: F) -> IndexedState<I, O, B>
    where
        F: Fn(A) -> B + Shareable + 'static,
        B: 'static,
    {
        self.fmap(function)
    }

    /// Adapts the input index by running `function` before this computation.
    ///
    /// The returned computation accepts an `H`, converts it into the `I`
    /// this computation expects and then runs it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// let length: IndexedState<usize, usize, usize> = IndexedState::get();
    /// let adapted: IndexedState<String, usize, usize> = length.contramap(|text: String| text.len());
    /// assert_eq!(adapted.run("hello".to_string()), (5, 5));
    /// ```
    pub fn contramap<H, F>(self, function: F) -> IndexedState<H, O, A>
    where
        F: Fn(H) -> I + Shareable + 'static,
        H: 'static,
    {
        let original_function = self.run_function;
        IndexedState::new(move |index| (original_function)(function(index)))
    }

    /// Maps a function over the output index, leaving the result untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// let state: IndexedState<i32, i32, i32> = IndexedState::get();
    /// let mapped = state.imap(|index: i32| index.to_string());
    /// assert_eq!(mapped.run(7), (7, "7".to_string()));
    /// ```
    pub fn imap<P, F>(self, function: F) -> IndexedState<I, P, A>
    where
        F: Fn(O) -> P + Shareable + 'static,
        P: 'static,
    {
        let original_function = self.run_function;
        IndexedState::new(move |index| {
            let (result, next_index) = (original_function)(index);
            (result, function(next_index))
        })
    }

    /// Maps over both indices at once: `before` adapts the input index and
    /// `after` transforms the output index.
    ///
    /// Equivalent to `self.contramap(before).imap(after)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// let double: IndexedState<i32, i32, ()> = IndexedState::modify(|n| n * 2);
    /// let adapted = double.dimap(|text: String| text.len() as i32, |n: i32| n > 5);
    /// assert!(adapted.exec("abc".to_string()));
    /// ```
    pub fn dimap<H, P, F, G>(self, before: F, after: G) -> IndexedState<H, P, A>
    where
        F: Fn(H) -> I + Shareable + 'static,
        G: Fn(O) -> P + Shareable + 'static,
        H: 'static,
        P: 'static,
    {
        self.contramap(before).imap(after)
    }

    /// Applies the function produced by `function_state` to the result of
    /// this computation.
    ///
    /// This is the Applicative operation. `function_state` always runs
    /// first, starting from index `E` and leaving an index of type `I`;
    /// this computation then runs from that index and its result is fed to
    /// the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// let function: IndexedState<i32, i32, fn(i32) -> i32> = IndexedState::pure(|x| x + 1);
    /// let argument: IndexedState<i32, i32, i32> =
    ///     IndexedState::new(|n: i32| (n, n * 2));
    /// let applied = argument.ap(function);
    /// assert_eq!(applied.run(5), (6, 10));
    /// ```
    #[must_use]
    pub fn ap<E, B, G>(self, function_state: IndexedState<E, I, G>) -> IndexedState<E, O, B>
    where
        G: FnOnce(A) -> B + 'static,
        E: 'static,
        B: 'static,
    {
        let function_run = function_state.run_function;
        let argument_run = self.run_function;
        IndexedState::new(move |index| {
            let (function, intermediate_index) = (function_run)(index);
            let (argument, final_index) = (argument_run)(intermediate_index);
            (function(argument), final_index)
        })
    }

    /// Chains this computation with a function that produces the next one.
    ///
    /// This is the Monad operation. The next computation must start from
    /// the index type this one leaves behind, and may leave an index of any
    /// type `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// let state: IndexedState<i32, String, i32> =
    ///     IndexedState::new(|n: i32| (n, n.to_string()));
    /// let chained = state.flat_map(|value| {
    ///     IndexedState::new(move |text: String| (value + 1, text.len()))
    /// });
    /// assert_eq!(chained.run(100), (101, 3));
    /// ```
    pub fn flat_map<E, B, F>(self, function: F) -> IndexedState<I, E, B>
    where
        F: Fn(A) -> IndexedState<O, E, B> + Shareable + 'static,
        E: 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        IndexedState::new(move |index| {
            let (result, intermediate_index) = (original_function)(index);
            let next_state = function(result);
            next_state.run(intermediate_index)
        })
    }

    /// Alias for `flat_map` to match Rust's naming conventions.
    pub fn and_then<E, B, F>(self, function: F) -> IndexedState<I, E, B>
    where
        F: Fn(A) -> IndexedState<O, E, B> + Shareable + 'static,
        E: 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// let first: IndexedState<i32, String, i32> =
    ///     IndexedState::new(|n: i32| (n, format!("{n}!")));
    /// let second: IndexedState<String, String, &str> = IndexedState::pure("result");
    /// let sequenced = first.then(second);
    /// assert_eq!(sequenced.run(42), ("result", "42!".to_string()));
    /// ```
    #[must_use]
    pub fn then<E, B>(self, next: IndexedState<O, E, B>) -> IndexedState<I, E, B>
    where
        E: 'static,
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines two computations using a binary function.
    ///
    /// This computation runs first and `other` runs from the index it
    /// leaves behind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// let first: IndexedState<i32, i32, i32> = IndexedState::new(|s: i32| (s, s + 1));
    /// let second: IndexedState<i32, String, i32> =
    ///     IndexedState::new(|s: i32| (s * 2, s.to_string()));
    /// let combined = first.map2(second, |a, b| a + b);
    /// assert_eq!(combined.run(10), (32, "11".to_string()));
    /// ```
    pub fn map2<E, B, C, F>(
        self,
        other: IndexedState<O, E, B>,
        function: F,
    ) -> IndexedState<I, E, C>
    where
        F: Fn(A, B) -> C + Shareable + 'static,
        E: 'static,
        B: 'static,
        C: 'static,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        IndexedState::new(move |index| {
            let (result_a, intermediate_index) = (self_function)(index);
            let (result_b, final_index) = (other_function)(intermediate_index);
            (function(result_a, result_b), final_index)
        })
    }

    /// Combines two computations into a tuple of their results.
    #[must_use]
    pub fn product<E, B>(self, other: IndexedState<O, E, B>) -> IndexedState<I, E, (A, B)>
    where
        E: 'static,
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// MonadState Operations (as inherent methods)
// =============================================================================

impl<St, A> IndexedState<St, St, A>
where
    St: 'static,
    A: 'static,
{
    /// Creates a computation that returns a constant value and leaves the
    /// index unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// let state: IndexedState<i32, i32, &str> = IndexedState::pure("constant");
    /// assert_eq!(state.run(42), ("constant", 42));
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone + Shareable,
    {
        Self::new(move |index| (value.clone(), index))
    }

    /// Creates a computation that projects a value from the current index
    /// without modifying it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// struct Config { port: u16 }
    ///
    /// let state: IndexedState<Config, Config, u16> = IndexedState::gets(|c: &Config| c.port);
    /// assert_eq!(state.eval(Config { port: 8080 }), 8080);
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&St) -> A + Shareable + 'static,
    {
        Self::new(move |index| {
            let result = projection(&index);
            (result, index)
        })
    }
}

impl<St> IndexedState<St, St, St>
where
    St: Clone + 'static,
{
    /// Creates a computation that returns the current index without
    /// modifying it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// let state: IndexedState<i32, i32, i32> = IndexedState::get();
    /// assert_eq!(state.run(42), (42, 42));
    /// ```
    #[must_use]
    pub fn get() -> Self {
        Self::new(|index: St| (index.clone(), index))
    }
}

impl<I, O> IndexedState<I, O, ()>
where
    I: 'static,
    O: 'static,
{
    /// Creates a computation that discards the current index and replaces
    /// it with `new_index`, possibly of a different type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// let state: IndexedState<i32, &str, ()> = IndexedState::put("replaced");
    /// assert_eq!(state.exec(42), "replaced");
    /// ```
    pub fn put(new_index: O) -> Self
    where
        O: Clone + Shareable,
    {
        Self::new(move |_| ((), new_index.clone()))
    }

    /// Creates a computation that replaces the current index with
    /// `modifier` applied to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// let state: IndexedState<i32, String, ()> = IndexedState::modify(|n: i32| "x".repeat(n as usize));
    /// assert_eq!(state.exec(3), "xxx");
    /// ```
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(I) -> O + Shareable + 'static,
    {
        Self::new(move |index| ((), modifier(index)))
    }
}

impl<I, J, O, A> IndexedState<I, J, IndexedState<J, O, A>>
where
    I: 'static,
    J: 'static,
    O: 'static,
    A: 'static,
{
    /// Flattens a computation whose result is itself a computation.
    ///
    /// The outer computation runs first; the computation it yields then
    /// runs from the intermediate index. Equivalent to
    /// `self.flat_map(|inner| inner)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indexed_state::effect::IndexedState;
    ///
    /// let outer: IndexedState<i32, String, IndexedState<String, usize, bool>> =
    ///     IndexedState::new(|n: i32| {
    ///         let inner = IndexedState::new(move |text: String| (n > 0, text.len()));
    ///         (inner, n.to_string())
    ///     });
    /// assert_eq!(outer.flatten().run(1234), (true, 4));
    /// ```
    #[must_use]
    pub fn flatten(self) -> IndexedState<I, O, A> {
        let outer_function = self.run_function;
        IndexedState::new(move |index| {
            let (inner, intermediate_index) = (outer_function)(index);
            inner.run(intermediate_index)
        })
    }
}

// =============================================================================
// Free Constructors
// =============================================================================

/// Free-function form of [`IndexedState::pure`].
///
/// ```rust
/// use indexed_state::effect::{pure, IndexedState};
///
/// let state: IndexedState<i32, i32, &str> = pure("x");
/// assert_eq!(state.run(42), ("x", 42));
/// ```
pub fn pure<I, A>(value: A) -> IndexedState<I, I, A>
where
    I: 'static,
    A: Clone + Shareable + 'static,
{
    IndexedState::pure(value)
}

/// Free-function form of [`IndexedState::get`].
#[must_use]
pub fn get<I>() -> IndexedState<I, I, I>
where
    I: Clone + 'static,
{
    IndexedState::get()
}

/// Free-function form of [`IndexedState::gets`].
pub fn gets<I, A, F>(projection: F) -> IndexedState<I, I, A>
where
    I: 'static,
    A: 'static,
    F: Fn(&I) -> A + Shareable + 'static,
{
    IndexedState::gets(projection)
}

/// Free-function form of [`IndexedState::put`].
pub fn put<I, O>(new_index: O) -> IndexedState<I, O, ()>
where
    I: 'static,
    O: Clone + Shareable + 'static,
{
    IndexedState::put(new_index)
}

/// Free-function form of [`IndexedState::modify`].
///
/// ```rust
/// use indexed_state::effect::modify;
///
/// let double = modify(|n: i32| n * 2);
/// assert_eq!(double.exec(5), 10);
/// ```
pub fn modify<I, O, F>(modifier: F) -> IndexedState<I, O, ()>
where
    I: 'static,
    O: 'static,
    F: Fn(I) -> O + Shareable + 'static,
{
    IndexedState::modify(modifier)
}

/// Flattens a nested computation. See [`IndexedState::flatten`].
#[must_use]
pub fn join<I, J, O, A>(outer: IndexedState<I, J, IndexedState<J, O, A>>) -> IndexedState<I, O, A>
where
    I: 'static,
    J: 'static,
    O: 'static,
    A: 'static,
{
    outer.flatten()
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<I, O, A> Clone for IndexedState<I, O, A>
where
    I: 'static,
    O: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<I, O, A> fmt::Display for IndexedState<I, O, A>
where
    I: 'static,
    O: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<IndexedState>")
    }
}

// =============================================================================
// Thread Safety Verification
// =============================================================================

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(IndexedState<i32, String, u8>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(IndexedState<i32, String, u8>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display_indexed_state() {
        let state: IndexedState<i32, String, i32> =
            IndexedState::new(|n: i32| (n * 2, n.to_string()));
        assert_eq!(format!("{state}"), "<IndexedState>");
    }

    #[rstest]
    fn indexed_state_new_and_run() {
        let state: IndexedState<i32, String, i32> =
            IndexedState::new(|n: i32| (n * 2, format!("{n}")));
        let (result, final_index) = state.run(10);
        assert_eq!(result, 20);
        assert_eq!(final_index, "10");
    }

    #[rstest]
    fn indexed_state_eval_and_exec_split_run() {
        let state: IndexedState<i32, bool, i32> = IndexedState::new(|n: i32| (n + 1, n % 2 == 0));
        assert_eq!(state.eval(4), 5);
        assert!(state.exec(4));
    }

    #[rstest]
    fn indexed_state_flat_map_changes_index_type() {
        let state: IndexedState<i32, String, usize> = IndexedState::modify(|n: i32| n * 3)
            .then(IndexedState::modify(|n: i32| n.to_string()))
            .then(IndexedState::gets(String::len));
        assert_eq!(state.run(40), (3, "120".to_string()));
    }

    #[rstest]
    fn indexed_state_flatten_runs_inner_after_outer() {
        let outer: IndexedState<i32, i32, IndexedState<i32, i32, i32>> =
            IndexedState::new(|n: i32| (IndexedState::new(|m: i32| (m, m * 10)), n + 1));
        assert_eq!(outer.flatten().run(1), (2, 20));
    }

    #[rstest]
    fn indexed_state_clone_shares_behaviour() {
        let state: IndexedState<i32, i32, i32> = IndexedState::new(|n: i32| (n * 2, n + 1));
        let cloned = state.clone();
        assert_eq!(state.run(10), cloned.run(10));
    }
}
