use crate::core::dismiss::DismissTimer;
use crate::core::form::{reduce, Action, FormState};
use crate::core::view::FormView;
use crate::domain::model::{FormData, FormField, SendEmailResponse, SubmissionStatus};
use crate::domain::ports::{ConfigProvider, MailTransport};
use crate::utils::error::{ContactError, Result};
use crate::utils::validation::{validate_email, validate_required, Validate};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::watch;

pub const SUCCESS_DISMISS_DELAY: Duration = Duration::from_secs(3);
pub const ERROR_DISMISS_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissDelays {
    pub success: Duration,
    pub error: Duration,
}

impl Default for DismissDelays {
    fn default() -> Self {
        Self {
            success: SUCCESS_DISMISS_DELAY,
            error: ERROR_DISMISS_DELAY,
        }
    }
}

impl DismissDelays {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            success: Duration::from_millis(config.success_dismiss_ms()),
            error: Duration::from_millis(config.error_dismiss_ms()),
        }
    }
}

impl Validate for FormData {
    fn validate(&self) -> Result<()> {
        for field in FormField::ALL {
            validate_required(field.key(), self.get(field))?;
        }
        validate_email(FormField::Email.key(), &self.email)
    }
}

/// Owns the contact form: field edits, the submit round-trip and the timed
/// return to idle.
///
/// Cloning is cheap and every clone drives the same form.
#[derive(Clone)]
pub struct ContactFormController {
    inner: Arc<Inner>,
}

struct Inner {
    state: watch::Sender<FormState>,
    transport: Arc<dyn MailTransport>,
    dismiss: DismissTimer,
    delays: DismissDelays,
}

impl Inner {
    fn dispatch(&self, action: Action) {
        tracing::trace!(?action, "dispatch");
        self.state.send_modify(|state| reduce(state, action));
    }
}

impl ContactFormController {
    pub fn new(transport: Arc<dyn MailTransport>) -> Self {
        Self::with_delays(transport, DismissDelays::default())
    }

    pub fn with_delays(transport: Arc<dyn MailTransport>, delays: DismissDelays) -> Self {
        let (state, _) = watch::channel(FormState::new());
        Self {
            inner: Arc::new(Inner {
                state,
                transport,
                dismiss: DismissTimer::new(),
                delays,
            }),
        }
    }

    pub fn state(&self) -> FormState {
        self.inner.state.borrow().clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.inner.state.borrow().status
    }

    pub fn view(&self) -> FormView {
        FormView::from_state(&self.inner.state.borrow())
    }

    /// Receives a fresh snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.inner.state.subscribe()
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.inner.state.borrow().is_submitting()
    }

    pub fn update_field(&self, field: FormField, value: impl Into<String>) {
        self.inner.dispatch(Action::FieldChanged {
            field,
            value: value.into(),
        });
    }

    /// Same as [`update_field`](Self::update_field), keyed by the input's
    /// `name` (`"studentId"`, ...).
    pub fn update_field_by_name(&self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = name
            .parse::<FormField>()
            .map_err(|reason| ContactError::Validation {
                field: name.to_string(),
                reason,
            })?;
        self.update_field(field, value);
        Ok(())
    }

    /// Sends the current form.
    ///
    /// Refused without side effects while a submission is in flight or when a
    /// required field is missing. Otherwise the outcome is written into the
    /// form state (and returned) and a dismissal back to idle is scheduled.
    pub async fn submit(&self) -> Result<()> {
        let mut refused = None;
        let mut started = None;
        self.inner.state.send_if_modified(|state| {
            if state.is_submitting() {
                refused = Some(ContactError::SubmitDisabled);
                return false;
            }
            if let Err(e) = state.data.validate() {
                refused = Some(e);
                return false;
            }
            reduce(state, Action::SubmitStarted);
            started = Some((state.data.clone(), state.cycle));
            true
        });

        if let Some(err) = refused {
            tracing::debug!("Submit refused: {}", err);
            return Err(err);
        }
        let Some((form, cycle)) = started else {
            return Err(ContactError::SubmitDisabled);
        };

        // Whatever the previous cycle scheduled no longer applies.
        self.inner.dismiss.cancel();

        tracing::info!(cycle, subject = %form.subject, "Sending message");
        let outcome = self
            .inner
            .transport
            .send(&form)
            .await
            .and_then(accept_response);

        match outcome {
            Ok(()) => {
                tracing::info!(cycle, "Message sent");
                self.inner.dispatch(Action::SubmitSucceeded);
                self.schedule_dismiss(cycle, self.inner.delays.success);
                Ok(())
            }
            Err(err) => {
                tracing::error!(cycle, category = ?err.category(), "Submission error: {}", err);
                self.inner.dispatch(Action::SubmitFailed {
                    message: err.user_message(),
                });
                self.schedule_dismiss(cycle, self.inner.delays.error);
                Err(err)
            }
        }
    }

    /// Resolves once the form is back to idle.
    pub async fn wait_until_idle(&self) {
        let mut updates = self.subscribe();
        // The sender lives as long as `self`, so this cannot fail.
        let _ = updates
            .wait_for(|state| state.status == SubmissionStatus::Idle)
            .await;
    }

    fn schedule_dismiss(&self, cycle: u64, delay: Duration) {
        let inner: Weak<Inner> = Arc::downgrade(&self.inner);
        self.inner.dismiss.schedule(cycle, delay, async move {
            if let Some(inner) = inner.upgrade() {
                tracing::debug!(cycle, "Dismissing status");
                inner.dispatch(Action::Dismiss { cycle });
            }
        });
    }
}

fn accept_response(response: SendEmailResponse) -> Result<()> {
    if response.success {
        Ok(())
    } else {
        Err(ContactError::Application {
            message: response.message.unwrap_or_default(),
        })
    }
}
