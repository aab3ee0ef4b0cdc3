use serde::Serialize;

/// An ephemeral form submission: surfaced to the user once and discarded.
/// Nothing in this codebase stores or forwards it; a real delivery backend
/// is a future collaborator behind [`crate::services::SubmissionSink`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Submission {
    pub form: &'static str,
    pub fields: Vec<(String, String)>,
}

impl Submission {
    pub fn new(form: &'static str, fields: Vec<(String, String)>) -> Self {
        Self { form, fields }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v.as_str())
    }
}
