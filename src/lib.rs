pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpMailTransport;
pub use config::Settings;
pub use core::controller::{ContactFormController, DismissDelays};
pub use core::form::{reduce, Action, FormState};
pub use core::view::FormView;
pub use domain::model::{FormData, FormField, SendEmailResponse, SubmissionStatus};
pub use domain::ports::MailTransport;
pub use utils::error::{ContactError, Result};
