/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic, always producing the same result for a given
/// input. Request handlers rely on this to treat every call as independent.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}
