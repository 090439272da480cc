/// Console adapters for status reporting
mod stderr_reporter;

pub use stderr_reporter::StderrReporter;
