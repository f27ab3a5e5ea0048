use std::time::Duration;
use url::Url;

use crate::error::{FetchError, FetchResult};

/// Raw GET access to published proof data
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Body of `url`; error statuses (>= 400) are errors
    async fn fetch(&self, url: &Url) -> FetchResult<Vec<u8>>;
}

/// [`Transport`] over a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(request_timeout: Duration) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, url: &Url) -> FetchResult<Vec<u8>> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.as_u16() >= 400 {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(body.to_vec())
    }
}
