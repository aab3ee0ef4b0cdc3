use std::sync::Mutex;

use tarocard::models::{Position, Store, Submission};
use tarocard::services::sink::SubmissionSink;

/// A store whose fields exercise CSV quoting: commas, double quotes and
/// an embedded newline-free mix of both.
pub fn tricky_store() -> Store {
    Store {
        id: 99,
        name: "Caffe \"Da Gino\", dal 1950".to_string(),
        category: "Bar & Caffe".to_string(),
        description: "Specialita: torta, caffe e \"sprelle\"".to_string(),
        address: "Via Verdi 1, Borgotaro".to_string(),
        comune: "Borgotaro".to_string(),
        position: Position::new(44.5, 9.75),
        website: String::new(),
        telefono: "+39 0525 999999".to_string(),
    }
}

/// Minimal RFC-4180 reader, enough to check the export round-trips.
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                _ => field.push(c),
            }
        }
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}

/// Sink that keeps every delivered submission for assertions.
#[derive(Default)]
pub struct RecordingSink(pub Mutex<Vec<Submission>>);

impl RecordingSink {
    pub fn submissions(&self) -> Vec<Submission> {
        self.0.lock().expect("sink poisoned").clone()
    }
}

impl SubmissionSink for RecordingSink {
    fn deliver(&self, submission: &Submission) {
        self.0.lock().expect("sink poisoned").push(submission.clone());
    }
}
