pub mod controller;
pub mod dismiss;
pub mod form;
pub mod view;

pub use crate::domain::model::{FormData, FormField, SendEmailResponse, SubmissionStatus};
pub use crate::domain::ports::{ConfigProvider, MailTransport};
pub use crate::utils::error::Result;
