use async_trait::async_trait;

use crate::domain::entities::page::Page;

use super::error::FetchError;

#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Fetch the page behind `cursor`, an absolute url
    async fn fetch_page(&self, cursor: &str) -> Result<Page, FetchError>;
}
