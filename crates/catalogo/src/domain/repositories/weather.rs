use async_trait::async_trait;

use crate::domain::entities::weather::Weather;

use super::error::FetchError;

#[async_trait]
pub trait WeatherRepository: Send + Sync {
    async fn fetch_weather(&self, city: &str) -> Result<Weather, FetchError>;
}
