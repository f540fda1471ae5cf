use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The store was built outside a tokio runtime and no runtime handle was supplied.
    #[error(
        "no tokio runtime available to schedule expiry tasks; build the store inside a runtime or \
         pass one with `Builder::with_runtime`"
    )]
    MissingRuntime,
}
