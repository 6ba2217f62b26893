//! Blocking HTTP connection — `EdanHttp`.
//!
//! One request per call, no retries. Every request is signed with the
//! encoded parameter string: the query string for GET, the form body for
//! POST.

use std::collections::BTreeMap;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::auth::RequestSigner;
use crate::config::EdanConfig;
use crate::connection::{CallMethod, EdanConnection, EdanResponse};
use crate::error::{HttpError, TransportError};
use crate::shared::Params;

/// `EdanConnection` over reqwest.
pub struct EdanHttp {
    server: String,
    signer: RequestSigner,
    client: Client,
}

impl EdanHttp {
    pub fn new(config: &EdanConfig) -> Result<Self, HttpError> {
        let signer = RequestSigner::new(&config.app_id, &config.auth_key, config.tier)
            .app_version(&config.app_version)
            .nonce_length(config.nonce_length);
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            server: config.server.clone(),
            signer,
            client,
        })
    }

    /// Replace the signer, e.g. to inject a fixed clock.
    pub fn with_signer(mut self, signer: RequestSigner) -> Self {
        self.signer = signer;
        self
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    fn url(&self, endpoint: &str, query: Option<&str>) -> String {
        let base = format!("{}{}", self.server, endpoint.trim_start_matches('/'));
        match query {
            Some(q) => format!("{}?{}", base, q),
            None => base,
        }
    }

    fn do_request(
        &self,
        endpoint: &str,
        params: &Params,
        method: CallMethod,
    ) -> Result<EdanResponse, TransportError> {
        let encoded = params.encode().map_err(HttpError::from)?;
        let headers = self
            .signer
            .sign(&encoded)
            .map_err(|e| TransportError::new(e.to_string()))?;

        let mut req = match method {
            CallMethod::Get => self.client.get(self.url(endpoint, Some(&encoded))),
            CallMethod::Post => self
                .client
                .post(self.url(endpoint, None))
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(encoded.clone()),
        };
        for (name, value) in headers {
            req = req.header(name, value);
        }

        tracing::debug!(
            endpoint,
            method = method.as_str(),
            params = params.len(),
            "Calling EDAN"
        );

        let resp = req.send().map_err(HttpError::from)?;
        let status = resp.status();
        let url = resp.url().to_string();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body_text = resp.text().map_err(HttpError::from)?;

        if !status.is_success() {
            let status_code = status.as_u16();
            let err = match status_code {
                401 | 403 => HttpError::Unauthorized(body_text),
                404 => HttpError::NotFound(body_text),
                400..=499 => HttpError::BadRequest(body_text),
                _ => HttpError::ServerError {
                    status: status_code,
                    body: body_text,
                },
            };
            return Err(err.into());
        }

        let mut info = BTreeMap::new();
        info.insert("http_code".to_string(), status.as_u16().to_string());
        info.insert("url".to_string(), url);
        info.insert("content_type".to_string(), content_type);

        Ok(EdanResponse {
            json: serde_json::from_str(&body_text).ok(),
            raw: body_text,
            info,
        })
    }
}

impl EdanConnection for EdanHttp {
    fn call(
        &self,
        endpoint: &str,
        params: &Params,
        method: CallMethod,
    ) -> Result<EdanResponse, TransportError> {
        self.do_request(endpoint, params, method)
    }

    fn app_id(&self) -> &str {
        self.signer.app_id()
    }
}

impl std::fmt::Debug for EdanHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdanHttp")
            .field("server", &self.server)
            .field("signer", &self.signer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http() -> EdanHttp {
        let config = EdanConfig::builder()
            .server("https://edan.example.org")
            .app_id("APP")
            .auth_key("key")
            .build()
            .unwrap();
        EdanHttp::new(&config).unwrap()
    }

    #[test]
    fn test_url_joins_server_and_endpoint() {
        let http = http();
        assert_eq!(
            http.url("/ogmt/v1.0/ogmt/getObjectGroups.htm", Some("start=1")),
            "https://edan.example.org/ogmt/v1.0/ogmt/getObjectGroups.htm?start=1"
        );
        assert_eq!(
            http.url("ogmt/v1.0/adminogmt/setMenu.htm", None),
            "https://edan.example.org/ogmt/v1.0/adminogmt/setMenu.htm"
        );
    }

    #[test]
    fn test_app_id_comes_from_config() {
        assert_eq!(http().app_id(), "APP");
    }
}
