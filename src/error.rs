/// The ways parsing can fail outright.
///
/// Malformed names are not errors: they parse into a name whose components
/// are empty. Only a missing input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: `{0}` must not be null")]
    InvalidArgument(&'static str),
}
