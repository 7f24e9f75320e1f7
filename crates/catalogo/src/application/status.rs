use std::{future::Future, time::Duration};

use crate::domain::repositories::error::FetchError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failed(FetchError),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }
}

/// Presentation side of a controller.
///
/// Controllers call these while holding their state lock, so an
/// implementation must not call back into the controller.
pub trait View<T: ?Sized>: Send + Sync {
    fn set_loading(&self, loading: bool);

    fn show_error(&self, message: &str);

    fn clear_error(&self);

    fn show_notice(&self, _message: &str) {}

    fn render(&self, data: &T);
}

/// Bound `fut` by `duration`, an expired request is dropped and reported as
/// [`FetchError::Timeout`]
pub async fn with_timeout<T, F>(duration: Duration, fut: F) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    match tokio::time::timeout(duration, fut).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout),
    }
}
