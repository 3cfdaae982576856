use crate::domain::model::{FormData, SendEmailResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Delivers one form to the mail endpoint.
///
/// Implementations return `Ok` for any reply the server managed to send with a
/// 2xx status, even when `success` is false; deciding what that means is up to
/// the controller. Transport problems and non-2xx replies come back as `Err`.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, form: &FormData) -> Result<SendEmailResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn success_dismiss_ms(&self) -> u64;
    fn error_dismiss_ms(&self) -> u64;
}
