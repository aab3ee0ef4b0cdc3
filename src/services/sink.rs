use crate::models::Submission;

/// Destination for form submissions. The site currently ships only the
/// demo sink; wiring a real delivery backend (email, payment, storage)
/// means adding an implementation here, not touching the form surfaces.
pub trait SubmissionSink {
    fn deliver(&self, submission: &Submission);
}

/// Logs the submission and drops it.
pub struct DemoSink;

impl SubmissionSink for DemoSink {
    fn deliver(&self, submission: &Submission) {
        let payload = serde_json::to_string(&submission.fields).unwrap_or_default();
        log::info!("{}: {}", submission.form, payload);
    }
}
