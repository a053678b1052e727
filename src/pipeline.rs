//! Validation pipeline infrastructure
//!
//! A composable, fail-fast chain of validation stages.
//!
//! # Architecture Overview
//!
//! ## 1. The `Validated<T>` Type
//!
//! The outcome of a stage: either `Valid(value)` carrying the value on to the
//! next stage, or `Invalid(messages)` carrying human-readable failures. Once a
//! value is `Invalid`, [`Validated::and_then`] never calls the next stage.
//!
//! ## 2. The `Runnable` Trait
//!
//! The interface for a single stage. A `Runnable<I, O>` turns a valid `I` into a
//! `Validated<O>`:
//!
//! ```rust,ignore
//! pub trait Runnable<I, O> {
//!     fn run(&self, input: I) -> Validated<O>;
//! }
//! ```
//!
//! ## 3. The `Pipeline<I, O>` Type
//!
//! A wrapper that enables composition with `.then()`. The compiler enforces that
//! each stage's input type matches the previous stage's output type, so state a
//! later stage needs (such as parsed sets) is passed along as part of the value
//! rather than stored on the side:
//!
//! ```rust,ignore
//! let pipeline = Pipeline::from_fn(|score: String| Validated::Valid(score))
//!     .then(StructuralMatch::new(grammar))   // String → String
//!     .then(SemanticParse::new(format))      // String → ParsedScore
//!     .then(GamesInequality);                // ParsedScore → ParsedScore
//! ```

use std::fmt;

/// Outcome of a validation stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated<T> {
    Valid(T),
    Invalid(Vec<String>),
}

impl<T> Validated<T> {
    /// Failure with a single message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Validated::Invalid(vec![message.into()])
    }

    /// Run `f` on a valid value; invalid values pass through untouched.
    pub fn and_then<U, F>(self, f: F) -> Validated<U>
    where
        F: FnOnce(T) -> Validated<U>,
    {
        match self {
            Validated::Valid(value) => f(value),
            Validated::Invalid(messages) => Validated::Invalid(messages),
        }
    }

    pub fn map<U, F>(self, f: F) -> Validated<U>
    where
        F: FnOnce(T) -> U,
    {
        self.and_then(|value| Validated::Valid(f(value)))
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    /// Failure messages, empty for a valid value.
    pub fn messages(&self) -> &[String] {
        match self {
            Validated::Valid(_) => &[],
            Validated::Invalid(messages) => messages,
        }
    }

    pub fn into_result(self) -> Result<T, Vec<String>> {
        match self {
            Validated::Valid(value) => Ok(value),
            Validated::Invalid(messages) => Err(messages),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Validated<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validated::Valid(value) => write!(f, "valid: {}", value),
            Validated::Invalid(messages) => write!(f, "invalid: {}", messages.join("; ")),
        }
    }
}

/// A single validation stage.
pub trait Runnable<I, O> {
    /// Name used when logging a rejection.
    fn name(&self) -> &'static str;

    fn run(&self, input: I) -> Validated<O>;
}

/// A composable chain of stages from `I` to `O`.
pub struct Pipeline<I, O> {
    run_fn: Box<dyn Fn(I) -> Validated<O> + Send + Sync>,
}

impl<I, O> Pipeline<I, O> {
    /// Create a pipeline from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Validated<O> + Send + Sync + 'static,
    {
        Pipeline {
            run_fn: Box::new(f),
        }
    }

    /// Append a stage, returning a pipeline with the stage's output type.
    ///
    /// The stage only runs when everything before it produced a valid value.
    pub fn then<O2, S>(self, stage: S) -> Pipeline<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Pipeline {
            run_fn: Box::new(move |input| {
                prev_run(input).and_then(|value| {
                    let outcome = stage.run(value);
                    if let Validated::Invalid(messages) = &outcome {
                        tracing::debug!(stage = stage.name(), ?messages, "score rejected");
                    }
                    outcome
                })
            }),
        }
    }

    /// Execute this pipeline on the given input
    pub fn run(&self, input: I) -> Validated<O> {
        (self.run_fn)(input)
    }
}

impl<I, O> fmt::Debug for Pipeline<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    // Test helpers - simple stages for composition
    struct DoubleNumber;
    impl Runnable<i32, i32> for DoubleNumber {
        fn name(&self) -> &'static str {
            "double"
        }
        fn run(&self, input: i32) -> Validated<i32> {
            Validated::Valid(input * 2)
        }
    }

    struct IntToString;
    impl Runnable<i32, String> for IntToString {
        fn name(&self) -> &'static str {
            "to-string"
        }
        fn run(&self, input: i32) -> Validated<String> {
            Validated::Valid(input.to_string())
        }
    }

    struct RejectOdd;
    impl Runnable<i32, i32> for RejectOdd {
        fn name(&self) -> &'static str {
            "reject-odd"
        }
        fn run(&self, input: i32) -> Validated<i32> {
            if input % 2 == 1 {
                Validated::invalid("odd")
            } else {
                Validated::Valid(input)
            }
        }
    }

    struct CountCalls(Arc<AtomicUsize>);
    impl Runnable<i32, i32> for CountCalls {
        fn name(&self) -> &'static str {
            "count"
        }
        fn run(&self, input: i32) -> Validated<i32> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Validated::Valid(input)
        }
    }

    #[test]
    fn test_type_changing_stage() {
        let pipeline = Pipeline::from_fn(|x: i32| Validated::Valid(x))
            .then(DoubleNumber)
            .then(IntToString);

        assert_eq!(pipeline.run(5), Validated::Valid("10".to_string()));
    }

    #[test]
    fn test_invalid_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::from_fn(|x: i32| Validated::Valid(x))
            .then(RejectOdd)
            .then(CountCalls(Arc::clone(&calls)));

        assert_eq!(pipeline.run(3), Validated::Invalid(vec!["odd".to_string()]));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(pipeline.run(4), Validated::Valid(4));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_and_then_skips_invalid() {
        let invalid: Validated<i32> = Validated::invalid("nope");
        let chained = invalid.and_then(|_| -> Validated<i32> { panic!("must not run") });
        assert_eq!(chained.messages(), ["nope".to_string()]);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Validated::Valid(1).into_result(), Ok(1));
        assert_eq!(
            Validated::<i32>::invalid("bad").into_result(),
            Err(vec!["bad".to_string()])
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Validated::Valid("6:4").to_string(), "valid: 6:4");
        let invalid: Validated<&str> = Validated::Invalid(vec!["a".into(), "b".into()]);
        assert_eq!(invalid.to_string(), "invalid: a; b");
    }
}
