use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One message from a student, serialized exactly as the mail endpoint expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub batch: String,
    pub subject: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::StudentId => &self.student_id,
            FormField::Batch => &self.batch,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::StudentId => &mut self.student_id,
            FormField::Batch => &mut self.batch,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = FormData::default();
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    StudentId,
    Batch,
    Subject,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    MultiLine,
}

impl FormField {
    /// Display order on the page.
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Email,
        FormField::StudentId,
        FormField::Batch,
        FormField::Subject,
        FormField::Message,
    ];

    /// Key used in the JSON body and as the input's `name`.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::StudentId => "studentId",
            FormField::Batch => "batch",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email Address",
            FormField::StudentId => "Student ID",
            FormField::Batch => "Batch",
            FormField::Subject => "Subject",
            FormField::Message => "Your Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Enter your full name",
            FormField::Email => "student@example.com",
            FormField::StudentId => "e.g., 2222081036",
            FormField::Batch => "57A",
            FormField::Subject => "Enter subject",
            FormField::Message => "Please describe your question or concern in detail...",
        }
    }

    pub fn kind(self) -> InputKind {
        match self {
            FormField::Email => InputKind::Email,
            FormField::Message => InputKind::MultiLine,
            _ => InputKind::Text,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| format!("Unknown form field: {}", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Error)
    }
}

/// Reply body of `POST /send-email`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_data_serializes_with_wire_keys() {
        let data = FormData {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            student_id: "2222081036".to_string(),
            batch: "57A".to_string(),
            subject: "Exam".to_string(),
            message: "When is it?".to_string(),
        };

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "studentId": "2222081036",
                "batch": "57A",
                "subject": "Exam",
                "message": "When is it?"
            })
        );
    }

    #[test]
    fn test_set_touches_only_one_field() {
        for field in FormField::ALL {
            let mut data = FormData::default();
            data.set(field, "x");
            for other in FormField::ALL {
                let expected = if other == field { "x" } else { "" };
                assert_eq!(data.get(other), expected, "setting {} changed {}", field, other);
            }
        }
    }

    #[test]
    fn test_field_keys_round_trip() {
        assert_eq!("studentId".parse::<FormField>(), Ok(FormField::StudentId));
        assert!("student_id".parse::<FormField>().is_err());
    }

    #[test]
    fn test_response_defaults_missing_success_to_false() {
        let resp: SendEmailResponse = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("nope"));
    }

    #[test]
    fn test_only_message_is_multiline() {
        let multi: Vec<_> = FormField::ALL
            .into_iter()
            .filter(|f| f.kind() == InputKind::MultiLine)
            .collect();
        assert_eq!(multi, vec![FormField::Message]);
        assert_eq!(FormField::Email.kind(), InputKind::Email);
    }
}
