//! Per-item mapping outcome that carries the failed input and its error
//! instead of signalling failure with a sentinel value.

/// Result of mapping one input through a fallible function: either the
/// mapped value, or the original input together with the error. Exactly one
/// of the two is ever present.
#[derive(Debug)]
pub enum MapAttempt<T, R, E> {
    Success(R),
    Failure { input: T, error: E },
}

impl<T, R, E> MapAttempt<T, R, E> {
    /// Apply `f` to `input`, keeping the input alongside the error when the
    /// mapping fails.
    pub fn wrap<F>(input: T, f: F) -> Self
    where
        F: FnOnce(&T) -> Result<R, E>,
    {
        match f(&input) {
            Ok(mapped) => MapAttempt::Success(mapped),
            Err(error) => MapAttempt::Failure { input, error },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MapAttempt::Success(_))
    }
}
