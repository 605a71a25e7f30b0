use reqwest::Client;

use crate::error::KobisError;

const BASE_URL: &str = "https://www.kobis.or.kr/kobisopenapi/webservice/rest";

pub struct KobisClient {
    client: Client,
    api_key: String,
}

impl KobisClient {
    /// Create a KobisClient from a shared reqwest Client and an API key.
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
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

    /// Decode a registry response body.
    ///
    /// The registry reports errors through a `faultInfo` envelope, usually
    /// under a 200 status, so the body has to be inspected either way. The
    /// numeric-as-string fields make decode failures easy to hit, hence the
    /// path-tracking deserializer.
    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(KobisError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        if let Some(fault) = crate::models::extract_fault(&body) {
            return Err(KobisError::Fault {
                code: fault.error_code.unwrap_or_default(),
                message: fault.message,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| KobisError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
