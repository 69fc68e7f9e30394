// Host-side tests for contact form validation and submit flow.

use folio_core::constants::SUCCESS_NOTICE_MS;
use folio_core::{is_valid_email, ContactFields, ContactForm, Field, FieldError, SubmitOutcome};

fn filled(name: &str, email: &str, message: &str) -> ContactForm {
    let mut form = ContactForm::new();
    form.edit(Field::Name, name);
    form.edit(Field::Email, email);
    form.edit(Field::Message, message);
    form
}

#[test]
fn invalid_submission_reports_every_field_and_keeps_values() {
    let mut form = filled("", "bad", "hi");
    let errors = match form.submit() {
        SubmitOutcome::Rejected(errors) => errors,
        other => panic!("expected rejection, got {:?}", other),
    };
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "Name is required",
            "Please enter a valid email address",
            "Message must be at least 10 characters",
        ]
    );
    assert_eq!(form.errors().len(), 3);
    assert_eq!(form.fields.email, "bad");
    assert_eq!(form.fields.message, "hi");
    assert!(!form.notice_visible());
}

#[test]
fn valid_submission_clears_errors_resets_and_shows_notice() {
    let mut form = filled("", "bad", "hi");
    let _ = form.submit();
    form.edit(Field::Name, "Al");
    form.edit(Field::Email, "a@b.com");
    form.edit(Field::Message, "Hello there, this is long enough.");

    assert_eq!(
        form.submit(),
        SubmitOutcome::Sent {
            notice_ms: SUCCESS_NOTICE_MS
        }
    );
    assert_eq!(SUCCESS_NOTICE_MS, 3000);
    assert!(form.errors().is_empty());
    assert_eq!(form.fields, ContactFields::default());
    assert!(form.notice_visible());

    form.dismiss_notice();
    assert!(!form.notice_visible());
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut form = filled("", "bad", "hi");
    let _ = form.submit();
    form.edit(Field::Email, "still bad");
    assert_eq!(form.error_for(Field::Email), None);
    assert_eq!(form.error_for(Field::Name), Some(FieldError::NameRequired));
    assert_eq!(form.error_for(Field::Message), Some(FieldError::MessageTooShort));
}

#[test]
fn whitespace_only_values_are_empty() {
    let fields = ContactFields {
        name: "   ".into(),
        email: "a@b.co".into(),
        message: "         x".into(),
    };
    let errors = fields.validate().unwrap_err();
    assert_eq!(errors.as_slice(), &[FieldError::NameRequired, FieldError::MessageTooShort]);
}

#[test]
fn email_shapes() {
    for ok in ["a@b.com", "first.last@sub.example.org", "x+tag@y.io", "a@b.c.", "a@b.."] {
        assert!(is_valid_email(ok), "{} should be valid", ok);
    }
    for bad in ["bad", "@b.com", "a@", "a@b", "a@.com", "a@b.", "a b@c.com", "a@b@c.com"] {
        assert!(!is_valid_email(bad), "{} should be invalid", bad);
    }
}

#[test]
fn field_ids_round_trip() {
    for f in Field::ALL {
        assert_eq!(Field::from_id(f.id()), Some(f));
    }
    assert_eq!(Field::from_id("phone"), None);
}
