//! [`Handler`] abstractions.

/// Executable handler.
///
/// Handlers complete synchronously: none of them perform blocking I/O, so
/// there is nothing to suspend on.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Errors if the execution of this [`Handler`] fails.
    fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}
