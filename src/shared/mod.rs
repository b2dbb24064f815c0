/// Shared kernel - error types and the crate-wide Result alias
pub mod error;

/// Crate-wide Result with `anyhow::Error`, so adapters can attach context
/// while domain errors stay downcastable as [`error::StatsError`].
pub type Result<T> = std::result::Result<T, anyhow::Error>;
