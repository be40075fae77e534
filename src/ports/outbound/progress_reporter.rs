/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts user-facing feedback (e.g., to stderr) so that it
/// never mixes with documents written to stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a recoverable problem; processing continues
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
