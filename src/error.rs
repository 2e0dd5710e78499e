use thiserror::Error;

/// Returned by the checked accessors of an empty [`Optional`](crate::Optional).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("Bad optional access")]
pub struct BadOptionalAccess;
