use std::error::Error;

/// Panicking access to the value of a fallible operation.
pub(crate) trait ResultExtension<T, E: Error> {
    /// Returns the contained [`Ok`] value, like [`Result::unwrap`], except that the panic message
    /// is the [`Display`](std::fmt::Display) output of the error alone.
    ///
    /// This is how every plain method in the crate is built from its `try_` counterpart.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
