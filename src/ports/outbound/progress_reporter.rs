/// ProgressReporter port for reporting pagination progress
///
/// Progress goes to a side channel (stderr) so it never mixes with the
/// rendered rows on stdout.
pub trait ProgressReporter {
    /// Reports that `fetched` records have been received so far
    ///
    /// # Arguments
    /// * `fetched` - Cumulative record count
    /// * `limit` - Record ceiling for this command
    /// * `message` - Optional message to include
    fn report_progress(&self, fetched: usize, limit: usize, message: Option<&str>);

    /// Reports an error; clears any progress display first
    fn report_error(&self, message: &str);

    /// Reports completion of the walk; clears any progress display first
    fn report_completion(&self, message: &str);
}
