//! Contact form.
//!
//! The form renders and validates, but nothing is sent anywhere: submissions
//! go through a [`ContactTransport`], and the only transport shipped is
//! [`StubTransport`], which acknowledges without doing any I/O.

use std::fmt;
use std::sync::OnceLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::metrics::METRICS;
use crate::obs;

/// Reply shown after a stub submission.
pub const STUB_ACK_MESSAGE: &str =
    "お問い合わせありがとうございます。\n（現在は送信機能は実装されていません）";

// Same shape as the HTML "valid e-mail address" production.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// Whether `raw` looks like an e-mail address.
pub fn is_valid_email(raw: &str) -> bool {
    email_pattern().is_some_and(|re| re.is_match(raw))
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// The four inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "お名前",
            Field::Email => "メールアドレス",
            Field::Subject => "件名",
            Field::Message => "お問い合わせ内容",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea { rows: u8 },
}

impl FieldKind {
    /// `type` attribute of an `<input>`; `None` for a `<textarea>`.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::TextArea { .. } => None,
        }
    }
}

/// How one input is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub field: Field,
    /// `id`/`name` attribute.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

pub const FORM_FIELDS: [FormField; 4] = [
    FormField {
        field: Field::Name,
        name: "name",
        label: "お名前",
        kind: FieldKind::Text,
        required: true,
    },
    FormField {
        field: Field::Email,
        name: "email",
        label: "メールアドレス",
        kind: FieldKind::Email,
        required: true,
    },
    FormField {
        field: Field::Subject,
        name: "subject",
        label: "件名",
        kind: FieldKind::Text,
        required: true,
    },
    FormField {
        field: Field::Message,
        name: "message",
        label: "お問い合わせ内容",
        kind: FieldKind::TextArea { rows: 8 },
        required: true,
    },
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Missing,
    InvalidEmail,
}

/// One failing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: Field,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::Missing => write!(f, "{} is required", self.field),
            ViolationKind::InvalidEmail => {
                write!(f, "{} is not a valid e-mail address", self.field)
            }
        }
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Contact submission errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("invalid submission: {}", join(.0))]
    Invalid(Vec<Violation>),

    #[error("delivery failed: {0}")]
    Transport(String),
}

impl ContactError {
    /// Failing fields, empty for transport failures.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ContactError::Invalid(v) => v,
            ContactError::Transport(_) => &[],
        }
    }
}

pub type ContactResult<T> = std::result::Result<T, ContactError>;

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Check every field; all failures are reported together.
    pub fn validate(&self) -> ContactResult<()> {
        let mut violations = Vec::new();
        for input in &FORM_FIELDS {
            let value = self.value(input.field).trim();
            if input.required && value.is_empty() {
                violations.push(Violation {
                    field: input.field,
                    kind: ViolationKind::Missing,
                });
            } else if input.kind == FieldKind::Email && !is_valid_email(value) {
                violations.push(Violation {
                    field: input.field,
                    kind: ViolationKind::InvalidEmail,
                });
            }
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ContactError::Invalid(violations))
        }
    }
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// Receipt for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgment {
    pub receipt_id: Uuid,
    pub received_at: DateTime<Utc>,
    pub message: String,
}

/// Where validated submissions go.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn deliver(&self, form: &ContactForm) -> ContactResult<Acknowledgment>;

    fn name(&self) -> &'static str;
}

/// Acknowledges every submission and sends nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubTransport;

#[async_trait]
impl ContactTransport for StubTransport {
    async fn deliver(&self, _form: &ContactForm) -> ContactResult<Acknowledgment> {
        Ok(Acknowledgment {
            receipt_id: Uuid::new_v4(),
            received_at: Utc::now(),
            message: STUB_ACK_MESSAGE.to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// Validate, then hand the form to the transport.
pub async fn submit(
    transport: &dyn ContactTransport,
    form: &ContactForm,
) -> ContactResult<Acknowledgment> {
    if let Err(e) = form.validate() {
        obs::emit_contact_rejected(&e);
        return Err(e);
    }
    let ack = transport.deliver(form).await?;
    METRICS.inc_contact_submissions();
    obs::emit_contact_acknowledged(&ack.receipt_id.to_string());
    tracing::debug!(transport = transport.name(), "contact submission delivered");
    Ok(ack)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactForm {
        ContactForm::new("山田 花子", "hanako@example.jp", "公演について", "チケットの取り扱いについて")
    }

    #[test]
    fn test_email_pattern_compiles() {
        assert!(email_pattern().is_some());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email("first.last+tag@mail.example.com"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("a@-bad.com"));
        assert!(!is_valid_email("a b@example.com"));
    }

    #[test]
    fn test_only_inputs_have_a_type() {
        let types: Vec<_> = FORM_FIELDS.iter().map(|f| f.kind.input_type()).collect();
        assert_eq!(types, [Some("text"), Some("email"), Some("text"), None]);
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_all_failures_reported_together() {
        let form = ContactForm::new("  ", "not-an-email", "", "body");
        let err = form.validate().unwrap_err();
        assert_eq!(
            err.violations(),
            &[
                Violation {
                    field: Field::Name,
                    kind: ViolationKind::Missing
                },
                Violation {
                    field: Field::Email,
                    kind: ViolationKind::InvalidEmail
                },
                Violation {
                    field: Field::Subject,
                    kind: ViolationKind::Missing
                },
            ]
        );
        assert!(err.to_string().contains("お名前 is required"));
    }

    #[test]
    fn test_empty_email_is_missing_not_malformed() {
        let mut form = valid();
        form.email = String::new();
        let err = form.validate().unwrap_err();
        assert_eq!(err.violations()[0].kind, ViolationKind::Missing);
    }

    #[tokio::test]
    async fn test_stub_acknowledges() {
        let ack = submit(&StubTransport, &valid()).await.unwrap();
        assert_eq!(ack.message, STUB_ACK_MESSAGE);
        assert!(!ack.receipt_id.is_nil());
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_transport() {
        struct Failing;

        #[async_trait]
        impl ContactTransport for Failing {
            async fn deliver(&self, _form: &ContactForm) -> ContactResult<Acknowledgment> {
                Err(ContactError::Transport("should not be called".to_string()))
            }

            fn name(&self) -> &'static str {
                "failing"
            }
        }

        let err = submit(&Failing, &ContactForm::default()).await.unwrap_err();
        assert!(matches!(err, ContactError::Invalid(ref v) if v.len() == 4));

        let err = submit(&Failing, &valid()).await.unwrap_err();
        assert!(matches!(err, ContactError::Transport(_)));
    }
}
