/// Sink for step progress, owned by the surrounding pipeline framework.
///
/// The step invokes the reporter with freshly computed snapshots; the
/// reporter never observes intermediate mutable state.
pub trait ProgressReporter {
    /// Reports the overall completion percentage, between 0 and 100.
    fn set_percent_complete(&self, percent: f64);

    /// Reports a human-readable status line for the step.
    fn set_message(&self, message: String);
}
