use reqwest::Client;

use crate::error::TmdbError;

const BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default content language for every request.
const DEFAULT_LANG: &str = "ko-KR";

pub struct TmdbClient {
    client: Client,
    api_key: String,
    pub(crate) lang: String,
}

impl TmdbClient {
    /// Create a TmdbClient from a shared reqwest Client and an API key.
    ///
    /// The key is supplied by the caller at construction; there is no
    /// module-level credential state.
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            lang: DEFAULT_LANG.to_string(),
        }
    }

    /// Override the content language (`language` query param).
    pub fn with_language(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", BASE_URL, path)
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TmdbError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}
