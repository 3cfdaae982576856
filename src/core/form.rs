//! Form state and the reducer that is the only thing allowed to change it.
//!
//! Every change to the form is an [`Action`]. Side effects (the HTTP call,
//! timers) live in the controller; `reduce` just moves state forward, which
//! keeps the whole lifecycle testable without a runtime.

use crate::domain::model::{FormData, FormField, SubmissionStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub data: FormData,
    pub status: SubmissionStatus,
    /// Only meaningful while `status` is `Error`; empty otherwise.
    pub error_message: String,
    /// Bumped on every submit so late dismissals can tell they are stale.
    pub cycle: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// The error text, if one is currently on screen.
    pub fn visible_error(&self) -> Option<&str> {
        (self.status == SubmissionStatus::Error && !self.error_message.is_empty())
            .then_some(self.error_message.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FieldChanged { field: FormField, value: String },
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed { message: String },
    Dismiss { cycle: u64 },
}

pub fn reduce(state: &mut FormState, action: Action) {
    match action {
        Action::FieldChanged { field, value } => {
            // An email input strips surrounding whitespace from its value.
            let value = match field {
                FormField::Email => value.trim().to_string(),
                _ => value,
            };
            state.data.set(field, value);
            // Editing dismisses the error text but leaves the status alone.
            if !state.error_message.is_empty() {
                state.error_message.clear();
            }
        }
        Action::SubmitStarted => {
            state.cycle += 1;
            state.status = SubmissionStatus::Submitting;
            state.error_message.clear();
        }
        Action::SubmitSucceeded => {
            if !state.is_submitting() {
                return;
            }
            state.data.clear();
            state.status = SubmissionStatus::Success;
        }
        Action::SubmitFailed { message } => {
            if !state.is_submitting() {
                return;
            }
            state.status = SubmissionStatus::Error;
            state.error_message = message;
        }
        Action::Dismiss { cycle } => {
            if cycle != state.cycle || !state.status.is_terminal() {
                return;
            }
            state.status = SubmissionStatus::Idle;
            state.error_message.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut state = FormState::new();
        for field in FormField::ALL {
            reduce(
                &mut state,
                Action::FieldChanged {
                    field,
                    value: format!("{}-value", field),
                },
            );
        }
        state
    }

    #[test]
    fn test_field_change_updates_only_that_field() {
        let mut state = filled();
        let before = state.clone();

        reduce(
            &mut state,
            Action::FieldChanged {
                field: FormField::Batch,
                value: "58B".to_string(),
            },
        );

        assert_eq!(state.data.batch, "58B");
        for field in FormField::ALL.into_iter().filter(|f| *f != FormField::Batch) {
            assert_eq!(state.data.get(field), before.data.get(field));
        }
    }

    #[test]
    fn test_email_is_stored_trimmed() {
        let mut state = FormState::new();
        reduce(
            &mut state,
            Action::FieldChanged {
                field: FormField::Email,
                value: "  ada@example.com \n".to_string(),
            },
        );
        reduce(
            &mut state,
            Action::FieldChanged {
                field: FormField::Subject,
                value: "  Exam  ".to_string(),
            },
        );

        assert_eq!(state.data.email, "ada@example.com");
        assert_eq!(state.data.subject, "  Exam  ");
    }

    #[test]
    fn test_editing_clears_error_but_keeps_status() {
        let mut state = filled();
        reduce(&mut state, Action::SubmitStarted);
        reduce(
            &mut state,
            Action::SubmitFailed {
                message: "X".to_string(),
            },
        );
        assert_eq!(state.visible_error(), Some("X"));

        reduce(
            &mut state,
            Action::FieldChanged {
                field: FormField::Name,
                value: "Grace".to_string(),
            },
        );

        assert_eq!(state.status, SubmissionStatus::Error);
        assert!(state.error_message.is_empty());
        assert_eq!(state.visible_error(), None);
    }

    #[test]
    fn test_success_clears_fields() {
        let mut state = filled();
        reduce(&mut state, Action::SubmitStarted);
        assert!(state.is_submitting());

        reduce(&mut state, Action::SubmitSucceeded);

        assert_eq!(state.status, SubmissionStatus::Success);
        assert!(state.data.is_empty());
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut state = filled();
        let data = state.data.clone();
        reduce(&mut state, Action::SubmitStarted);
        reduce(
            &mut state,
            Action::SubmitFailed {
                message: "down".to_string(),
            },
        );

        assert_eq!(state.data, data);
        assert_eq!(state.status, SubmissionStatus::Error);
    }

    #[test]
    fn test_dismiss_resets_to_idle() {
        let mut state = filled();
        reduce(&mut state, Action::SubmitStarted);
        reduce(
            &mut state,
            Action::SubmitFailed {
                message: "down".to_string(),
            },
        );

        let cycle = state.cycle;
        reduce(&mut state, Action::Dismiss { cycle });

        assert_eq!(state.status, SubmissionStatus::Idle);
        assert!(state.error_message.is_empty());
    }

    #[test]
    fn test_stale_dismiss_is_ignored() {
        let mut state = filled();
        reduce(&mut state, Action::SubmitStarted);
        reduce(&mut state, Action::SubmitSucceeded);
        let first_cycle = state.cycle;

        reduce(&mut state, Action::SubmitStarted);
        reduce(&mut state, Action::Dismiss { cycle: first_cycle });
        assert_eq!(state.status, SubmissionStatus::Submitting);

        reduce(
            &mut state,
            Action::SubmitFailed {
                message: "later".to_string(),
            },
        );
        reduce(&mut state, Action::Dismiss { cycle: first_cycle });
        assert_eq!(state.status, SubmissionStatus::Error);
        assert_eq!(state.error_message, "later");
    }

    #[test]
    fn test_outcome_without_submit_is_ignored() {
        let mut state = filled();
        reduce(&mut state, Action::SubmitSucceeded);
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert!(!state.data.is_empty());
    }
}
