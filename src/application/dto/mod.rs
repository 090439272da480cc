/// Data Transfer Objects for application layer
///
/// DTOs carry the per-invocation state (query, category, serial, format)
/// from the CLI into the use cases.
mod detect_request;
mod directory_request;
mod output_format;

pub use detect_request::DetectRequest;
pub use directory_request::DirectoryRequest;
pub use output_format::OutputFormat;
