use async_trait::async_trait;
use catalogo_lib::prelude::WeatherInfo;

use crate::{
    domain::{
        entities::weather::Weather,
        repositories::{error::FetchError, weather::WeatherRepository},
    },
    infrastructure::{config::WeatherConfig, http},
};

#[derive(Clone)]
pub struct WeatherRepositoryImpl {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    units: String,
    lang: String,
}

impl WeatherRepositoryImpl {
    pub fn new(client: reqwest::Client, config: &WeatherConfig, api_key: String) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
            units: config.units.clone(),
            lang: config.lang.clone(),
        }
    }
}

#[async_trait]
impl WeatherRepository for WeatherRepositoryImpl {
    async fn fetch_weather(&self, city: &str) -> Result<Weather, FetchError> {
        let request = self.client.get(&self.base_url).query(&[
            ("q", city.trim()),
            ("appid", self.api_key.as_str()),
            ("units", self.units.as_str()),
            ("lang", self.lang.as_str()),
        ]);

        let info: WeatherInfo = http::get_json(request).await?;

        Ok(info.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::infrastructure::http::{build_client, testing};

    fn config(base_url: String) -> WeatherConfig {
        WeatherConfig {
            base_url,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_weather() {
        let (base, server) = testing::serve_once(
            "200 OK",
            r#"{"name":"Madrid","sys":{"country":"ES"},"main":{"temp":21.6,"feels_like":20.9},"weather":[{"description":"cielo claro","icon":"01d"}]}"#,
        )
        .await;

        let repo = WeatherRepositoryImpl::new(
            build_client().unwrap(),
            &config(format!("{base}/data/2.5/weather")),
            "secret".to_string(),
        );
        let weather = repo.fetch_weather("  Madrid ").await.unwrap();

        assert_eq!(weather.place(), "Madrid, ES");
        assert_eq!(weather.description, "cielo claro");

        let request = server.await.unwrap();
        let request_line = request.lines().next().unwrap();
        assert!(request_line.starts_with("GET /data/2.5/weather?"));
        assert!(request_line.contains("q=Madrid&"));
        assert!(request_line.contains("appid=secret"));
        assert!(request_line.contains("units=metric"));
        assert!(request_line.contains("lang=es"));
    }

    #[tokio::test]
    async fn test_fetch_weather_unauthorized() {
        let (base, _server) =
            testing::serve_once("401 Unauthorized", r#"{"cod":401,"message":"Invalid API key"}"#)
                .await;

        let repo = WeatherRepositoryImpl::new(build_client().unwrap(), &config(base), "bad".to_string());

        assert_eq!(
            repo.fetch_weather("Madrid").await,
            Err(FetchError::HttpStatus(401))
        );
    }
}
