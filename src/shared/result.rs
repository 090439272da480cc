/// Result alias used across the crate.
/// Domain and adapter errors are converted into anyhow::Error at the boundaries.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
