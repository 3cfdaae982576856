use crate::core::form::FormState;
use crate::domain::model::{FormField, InputKind, SubmissionStatus};
use chrono::Datelike;
use std::fmt;

pub const PAGE_TITLE: &str = "Student Portal";
pub const PAGE_TAGLINE: &str = "Contact your teachers directly through this portal";
pub const FORM_TITLE: &str = "Contact Your Teacher";
pub const FORM_HINT: &str = "All information will be sent directly to your teacher.";
pub const SUPPORT_EMAIL: &str = "abraragmain75@gmail.com";

pub const SUCCESS_BANNER: &str = "Message sent successfully! Your teacher will respond soon.";
pub const SUBMITTING_BANNER: &str = "Sending your message...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: FormField,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: InputKind,
    pub required: bool,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(&'static str),
    Submitting(&'static str),
    Error(String),
}

impl Banner {
    pub fn text(&self) -> &str {
        match self {
            Banner::Success(text) | Banner::Submitting(text) => *text,
            Banner::Error(text) => text.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: &'static str,
    pub disabled: bool,
}

/// Everything a front end needs to draw the page for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub banner: Option<Banner>,
    pub submit: SubmitControl,
    pub footer: String,
}

impl FormView {
    pub fn from_state(state: &FormState) -> Self {
        let fields = FormField::ALL
            .into_iter()
            .map(|field| FieldView {
                field,
                label: field.label(),
                placeholder: field.placeholder(),
                kind: field.kind(),
                required: true,
                value: state.data.get(field).to_string(),
            })
            .collect();

        let banner = match state.status {
            SubmissionStatus::Success => Some(Banner::Success(SUCCESS_BANNER)),
            SubmissionStatus::Submitting => Some(Banner::Submitting(SUBMITTING_BANNER)),
            SubmissionStatus::Error => state.visible_error().map(|e| Banner::Error(e.to_string())),
            SubmissionStatus::Idle => None,
        };

        let submitting = state.is_submitting();
        let submit = SubmitControl {
            label: if submitting { "Sending..." } else { "Send Message" },
            disabled: submitting,
        };

        Self {
            fields,
            banner,
            submit,
            footer: format!("© {} All rights reserved.", chrono::Local::now().year()),
        }
    }
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", PAGE_TITLE)?;
        writeln!(f, "{}", PAGE_TAGLINE)?;
        writeln!(f)?;
        writeln!(f, "-- {} --", FORM_TITLE)?;
        for field in &self.fields {
            let value = if field.value.is_empty() {
                format!("<{}>", field.placeholder)
            } else {
                field.value.clone()
            };
            writeln!(f, "  {} *: {}", field.label, value)?;
        }
        writeln!(f)?;
        match &self.banner {
            Some(Banner::Success(text)) => writeln!(f, "  [ok] {}", text)?,
            Some(Banner::Submitting(text)) => writeln!(f, "  [..] {}", text)?,
            Some(Banner::Error(text)) => writeln!(f, "  [!!] {}", text)?,
            None => {}
        }
        let marker = if self.submit.disabled { " (disabled)" } else { "" };
        writeln!(f, "  {}  [ {} ]{}", FORM_HINT, self.submit.label, marker)?;
        writeln!(f)?;
        writeln!(f, "{}", self.footer)?;
        write!(f, "For technical support, contact: {}", SUPPORT_EMAIL)
    }
}
