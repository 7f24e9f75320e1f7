use serde::de::DeserializeOwned;

use crate::domain::repositories::error::FetchError;

pub const DEFAULT_USER_AGENT: &str = concat!("catalogo/", env!("CARGO_PKG_VERSION"));

pub fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::ClientBuilder::new()
        .user_agent(DEFAULT_USER_AGENT)
        .build()
}

fn map_request_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else if err.is_decode() {
        FetchError::Decode(err.to_string())
    } else {
        FetchError::Network(err.to_string())
    }
}

/// Send `request` and decode a successful json body, non-2xx statuses become
/// [`FetchError::HttpStatus`]
pub async fn get_json<T>(request: reqwest::RequestBuilder) -> Result<T, FetchError>
where
    T: DeserializeOwned,
{
    let res = request.send().await.map_err(map_request_error)?;

    let status = res.status();
    if !status.is_success() {
        debug!("response status {} from {}", status, res.url());
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    res.json::<T>().await.map_err(map_request_error)
}
