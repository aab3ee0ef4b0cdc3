mod common;

#[cfg(test)]
pub mod forms_tests {
    use super::common::*;

    use tarocard::common::DraftError;
    use tarocard::frontend::forms::{
        ContactForm, EmailSettingsForm, EnrollForm, StoreDraftForm, COORD_MSG, REQUIRED_MSG,
    };
    use tarocard::frontend::pages::{AdminTab, TabStatus};

    use leptos::prelude::*;

    #[test]
    fn contact_submit_acknowledges_and_clears_fields() {
        let form = ContactForm::new();
        form.nome.value.set("Mario".to_string());
        form.email.value.set("mario@example.com".to_string());
        form.messaggio.value.set("Ciao".to_string());

        let sink = RecordingSink::default();
        let ack = form.submit(&sink);

        assert_eq!(ack, Some("Richiesta inviata. Ti risponderemo presto."));
        let delivered = sink.submissions();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].form, "Richiesta contatti");
        assert_eq!(delivered[0].field("nome"), Some("Mario"));
        assert_eq!(delivered[0].field("email"), Some("mario@example.com"));
        assert_eq!(delivered[0].field("messaggio"), Some("Ciao"));

        assert_eq!(form.nome.value.get_untracked(), "");
        assert_eq!(form.email.value.get_untracked(), "");
        assert_eq!(form.messaggio.value.get_untracked(), "");
    }

    #[test]
    fn contact_submit_with_empty_email_is_blocked() {
        let form = ContactForm::new();
        form.nome.value.set("Mario".to_string());
        form.messaggio.value.set("Ciao".to_string());

        let sink = RecordingSink::default();
        let ack = form.submit(&sink);

        assert_eq!(ack, None);
        assert!(sink.submissions().is_empty());
        assert_eq!(form.email.error.get_untracked(), Some(REQUIRED_MSG));
        assert_eq!(form.nome.error.get_untracked(), None);
        // The form is not cleared on a blocked submission.
        assert_eq!(form.nome.value.get_untracked(), "Mario");
        assert_eq!(form.messaggio.value.get_untracked(), "Ciao");
    }

    #[test]
    fn enroll_requires_consent_checkbox() {
        let form = EnrollForm::new();
        form.ragione_sociale.value.set("Bottega Verde Srl".to_string());
        form.piva.value.set("01234567890".to_string());
        form.indirizzo.value.set("Corso XX Settembre 45".to_string());
        form.comune.value.set("Borgotaro".to_string());
        form.descrizione.value.set("Abbigliamento sostenibile".to_string());

        let sink = RecordingSink::default();
        assert_eq!(form.submit(&sink), None);
        assert!(form.privacy_error.get_untracked());
        assert!(sink.submissions().is_empty());

        form.privacy.set(true);
        assert_eq!(form.submit(&sink), Some("Richiesta inviata."));
        assert_eq!(sink.submissions().len(), 1);
        assert!(!form.privacy.get_untracked());
        assert_eq!(form.ragione_sociale.value.get_untracked(), "");
    }

    #[test]
    fn email_settings_have_no_required_fields() {
        let form = EmailSettingsForm::new();
        assert_eq!(form.smtp_port.value.get_untracked(), "587");

        let sink = RecordingSink::default();
        assert_eq!(form.submit(&sink), Some("Salvato (demo)"));
        let delivered = sink.submissions();
        assert_eq!(delivered[0].form, "Impostazioni email");
        assert_eq!(delivered[0].field("smtp_port"), Some("587"));
    }

    #[test]
    fn draft_rejects_unparseable_coordinates() {
        let draft = StoreDraftForm::new();
        draft.name.value.set("Nuovo negozio".to_string());
        draft.lat.value.set("quarantaquattro".to_string());

        let err = draft.to_draft().unwrap_err();
        assert!(matches!(err, DraftError::InvalidCoordinate(_)));
        assert_eq!(draft.lat.error.get_untracked(), Some(COORD_MSG));
        assert_eq!(draft.lon.error.get_untracked(), None);
    }

    #[test]
    fn draft_defaults_blank_coordinates_to_zero() {
        let draft = StoreDraftForm::new();
        draft.name.value.set("Nuovo negozio".to_string());

        let built = draft.to_draft().unwrap();
        assert_eq!(built.lat, 0.0);
        assert_eq!(built.lon, 0.0);
    }

    #[test]
    fn orders_tab_is_an_explicit_placeholder() {
        assert_eq!(AdminTab::Orders.status(), TabStatus::Placeholder);
        assert!(AdminTab::Orders.placeholder_note().is_some());
        assert_eq!(AdminTab::Shops.status(), TabStatus::Demo);
        assert_eq!(AdminTab::Email.status(), TabStatus::Demo);
    }
}
