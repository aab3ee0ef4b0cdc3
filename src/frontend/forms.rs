use std::sync::Arc;

use leptos::prelude::*;

use crate::common::DraftError;
use crate::models::Submission;
use crate::services::directory::{parse_coord, StoreDraft};
use crate::services::sink::{DemoSink, SubmissionSink};

/// Fixed inline message shown under a required field left empty.
pub const REQUIRED_MSG: &str = "Campo obbligatorio";

/// Inline message for a coordinate field that does not parse as a number.
pub const COORD_MSG: &str = "Coordinata non valida";

/// Shared handle to the submission sink, provided via context so tests
/// and future real integrations can swap the destination without touching
/// any form surface.
#[derive(Clone)]
pub struct SinkHandle(pub Arc<dyn SubmissionSink + Send + Sync>);

impl Default for SinkHandle {
    fn default() -> Self {
        Self(Arc::new(DemoSink))
    }
}

pub fn use_sink() -> SinkHandle {
    use_context::<SinkHandle>().unwrap_or_default()
}

/// One text field: current value plus the inline error slot.
#[derive(Clone, Copy)]
pub struct Field {
    pub value: RwSignal<String>,
    pub error: RwSignal<Option<&'static str>>,
    pub required: bool,
}

impl Field {
    pub fn new(required: bool) -> Self {
        Self::with_value(required, "")
    }

    pub fn with_value(required: bool, initial: &str) -> Self {
        Self {
            value: RwSignal::new(initial.to_string()),
            error: RwSignal::new(None),
            required,
        }
    }

    /// Re-checks the required constraint, updating the inline error.
    pub fn validate(&self) -> bool {
        if self.required && self.value.get_untracked().trim().is_empty() {
            self.error.set(Some(REQUIRED_MSG));
            false
        } else {
            self.error.set(None);
            true
        }
    }

    pub fn reset(&self) {
        self.value.set(String::new());
        self.error.set(None);
    }
}

fn validate_all(fields: &[&Field]) -> bool {
    // Validate every field so each empty one shows its message, not just
    // the first.
    fields.iter().fold(true, |ok, f| f.validate() && ok)
}

fn collect(fields: &[(&'static str, &Field)]) -> Vec<(String, String)> {
    fields
        .iter()
        .map(|(name, f)| (name.to_string(), f.value.get_untracked()))
        .collect()
}

/// State behind the "Contatti" form.
#[derive(Clone, Copy)]
pub struct ContactForm {
    pub nome: Field,
    pub email: Field,
    pub messaggio: Field,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            nome: Field::new(true),
            email: Field::new(true),
            messaggio: Field::new(true),
        }
    }

    pub fn validate(&self) -> bool {
        validate_all(&[&self.nome, &self.email, &self.messaggio])
    }

    pub fn submission(&self) -> Submission {
        Submission::new(
            "Richiesta contatti",
            collect(&[
                ("nome", &self.nome),
                ("email", &self.email),
                ("messaggio", &self.messaggio),
            ]),
        )
    }

    pub fn reset(&self) {
        self.nome.reset();
        self.email.reset();
        self.messaggio.reset();
    }

    /// Blocked while any required field is empty; on success the fields
    /// are cleared and the acknowledgment text is returned.
    pub fn submit(&self, sink: &dyn SubmissionSink) -> Option<&'static str> {
        if !self.validate() {
            return None;
        }
        sink.deliver(&self.submission());
        self.reset();
        Some("Richiesta inviata. Ti risponderemo presto.")
    }
}

/// State behind the "Aderisci" enrollment form. Submission additionally
/// requires the privacy consent checkbox.
#[derive(Clone, Copy)]
pub struct EnrollForm {
    pub ragione_sociale: Field,
    pub piva: Field,
    pub indirizzo: Field,
    pub comune: Field,
    pub categoria: Field,
    pub telefono: Field,
    pub descrizione: Field,
    pub privacy: RwSignal<bool>,
    pub privacy_error: RwSignal<bool>,
}

impl Default for EnrollForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EnrollForm {
    pub fn new() -> Self {
        Self {
            ragione_sociale: Field::new(true),
            piva: Field::new(true),
            indirizzo: Field::new(true),
            comune: Field::new(true),
            categoria: Field::with_value(true, "Bar & Caffe"),
            telefono: Field::new(false),
            descrizione: Field::new(true),
            privacy: RwSignal::new(false),
            privacy_error: RwSignal::new(false),
        }
    }

    pub fn validate(&self) -> bool {
        let fields_ok = validate_all(&[
            &self.ragione_sociale,
            &self.piva,
            &self.indirizzo,
            &self.comune,
            &self.categoria,
            &self.telefono,
            &self.descrizione,
        ]);
        let consent = self.privacy.get_untracked();
        self.privacy_error.set(!consent);
        fields_ok && consent
    }

    pub fn submission(&self) -> Submission {
        Submission::new(
            "Nuova richiesta adesione",
            collect(&[
                ("ragione_sociale", &self.ragione_sociale),
                ("piva", &self.piva),
                ("indirizzo", &self.indirizzo),
                ("comune", &self.comune),
                ("categoria", &self.categoria),
                ("telefono", &self.telefono),
                ("descrizione", &self.descrizione),
            ]),
        )
    }

    pub fn reset(&self) {
        for f in [
            &self.ragione_sociale,
            &self.piva,
            &self.indirizzo,
            &self.comune,
            &self.telefono,
            &self.descrizione,
        ] {
            f.reset();
        }
        self.categoria.value.set("Bar & Caffe".to_string());
        self.categoria.error.set(None);
        self.privacy.set(false);
        self.privacy_error.set(false);
    }

    pub fn submit(&self, sink: &dyn SubmissionSink) -> Option<&'static str> {
        if !self.validate() {
            return None;
        }
        sink.deliver(&self.submission());
        self.reset();
        Some("Richiesta inviata.")
    }
}

/// State behind the admin email-settings form. Nothing is required and
/// nothing is actually saved; the demo only acknowledges the input.
#[derive(Clone, Copy)]
pub struct EmailSettingsForm {
    pub from_name: Field,
    pub from_email: Field,
    pub smtp_host: Field,
    pub smtp_user: Field,
    pub smtp_pass: Field,
    pub smtp_port: Field,
}

impl Default for EmailSettingsForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailSettingsForm {
    pub fn new() -> Self {
        Self {
            from_name: Field::new(false),
            from_email: Field::new(false),
            smtp_host: Field::new(false),
            smtp_user: Field::new(false),
            smtp_pass: Field::new(false),
            smtp_port: Field::with_value(false, "587"),
        }
    }

    pub fn submission(&self) -> Submission {
        Submission::new(
            "Impostazioni email",
            collect(&[
                ("from_name", &self.from_name),
                ("from_email", &self.from_email),
                ("smtp_host", &self.smtp_host),
                ("smtp_user", &self.smtp_user),
                ("smtp_pass", &self.smtp_pass),
                ("smtp_port", &self.smtp_port),
            ]),
        )
    }

    pub fn submit(&self, sink: &dyn SubmissionSink) -> Option<&'static str> {
        sink.deliver(&self.submission());
        Some("Salvato (demo)")
    }
}

/// Draft row editor for the admin "Negozi" tab. No field is required, but
/// a non-empty coordinate must parse as a number or the row is rejected
/// with an inline error instead of silently landing at 0°,0°.
#[derive(Clone, Copy)]
pub struct StoreDraftForm {
    pub name: Field,
    pub category: Field,
    pub comune: Field,
    pub address: Field,
    pub lat: Field,
    pub lon: Field,
    pub website: Field,
    pub description: Field,
}

impl Default for StoreDraftForm {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreDraftForm {
    pub fn new() -> Self {
        Self {
            name: Field::new(false),
            category: Field::new(false),
            comune: Field::new(false),
            address: Field::new(false),
            lat: Field::new(false),
            lon: Field::new(false),
            website: Field::new(false),
            description: Field::new(false),
        }
    }

    fn coord(field: &Field) -> Result<f64, DraftError> {
        match parse_coord(&field.value.get_untracked()) {
            Ok(v) => {
                field.error.set(None);
                Ok(v)
            }
            Err(e) => {
                field.error.set(Some(COORD_MSG));
                Err(e)
            }
        }
    }

    /// Builds the draft, surfacing coordinate errors inline.
    pub fn to_draft(&self) -> Result<StoreDraft, DraftError> {
        let lat = Self::coord(&self.lat);
        let lon = Self::coord(&self.lon);
        Ok(StoreDraft {
            name: self.name.value.get_untracked(),
            category: self.category.value.get_untracked(),
            comune: self.comune.value.get_untracked(),
            address: self.address.value.get_untracked(),
            lat: lat?,
            lon: lon?,
            website: self.website.value.get_untracked(),
            description: self.description.value.get_untracked(),
        })
    }

    pub fn reset(&self) {
        for f in [
            &self.name,
            &self.category,
            &self.comune,
            &self.address,
            &self.lat,
            &self.lon,
            &self.website,
            &self.description,
        ] {
            f.reset();
        }
    }
}
