/// StatusReporter port for status and diagnostic messages
///
/// Messages go to a side channel (stderr) so they never mix with the
/// rendered output on stdout.
pub trait StatusReporter {
    /// Reports an informational status message
    fn report(&self, message: &str);

    /// Reports a warning; shown even when status messages are silenced
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
