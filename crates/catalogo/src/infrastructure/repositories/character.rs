use async_trait::async_trait;
use catalogo_lib::prelude::CharacterPage;

use crate::{
    domain::{
        entities::page::Page,
        repositories::{character::CharacterRepository, error::FetchError},
    },
    infrastructure::http,
};

#[derive(Clone)]
pub struct CharacterRepositoryImpl {
    client: reqwest::Client,
}

impl CharacterRepositoryImpl {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CharacterRepository for CharacterRepositoryImpl {
    async fn fetch_page(&self, cursor: &str) -> Result<Page, FetchError> {
        let page: CharacterPage = http::get_json(self.client.get(cursor)).await?;
        debug!(
            "fetched {} characters from {cursor}, next={:?}",
            page.results.len(),
            page.info.next
        );

        Ok(page.into())
    }
}
