/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the ports: catalog sources, formatters,
/// presenters and the console reporter.
pub mod outbound;
