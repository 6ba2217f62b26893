//! Transport contract — what the OGMT layer needs from a connection.
//!
//! A connection performs one signed HTTP call per [`EdanConnection::call`]
//! and hands back the parsed body. It is owned by the caller and borrowed by
//! [`Ogmt`](crate::client::Ogmt); the OGMT layer never builds its own.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{EdanError, TransportError};
use crate::shared::serde_util;
use crate::shared::Params;

/// HTTP method of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CallMethod {
    #[default]
    Get,
    Post,
}

impl CallMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Result of a successful call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdanResponse {
    /// Parsed body; `None` when the body was not JSON.
    pub json: Option<Value>,
    /// Body as received.
    pub raw: String,
    /// Transport metadata (status, url, content type, ...).
    pub info: BTreeMap<String, String>,
}

impl EdanResponse {
    pub fn from_json(json: Value) -> Self {
        Self {
            raw: json.to_string(),
            json: Some(json),
            info: BTreeMap::new(),
        }
    }

    pub fn object(&self) -> Option<&Map<String, Value>> {
        self.json.as_ref().and_then(Value::as_object)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.object().and_then(|o| o.get(key))
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The `error` value of the body, if any, rendered as a message.
    pub fn remote_error(&self) -> Option<String> {
        self.get("error").map(serde_util::error_message)
    }

    /// Fail with [`EdanError::Remote`] when the body carries an `error` key.
    pub(crate) fn check_remote_error(&self) -> Result<(), EdanError> {
        match self.remote_error() {
            Some(message) => {
                tracing::warn!(error = %message, "EDAN returned an application error");
                Err(EdanError::Remote(message))
            }
            None => Ok(()),
        }
    }

    /// Deserialize the body into a wire type.
    pub(crate) fn parse<T: DeserializeOwned>(&self, what: &str) -> Result<T, EdanError> {
        let json = self.json.clone().ok_or_else(|| {
            EdanError::MalformedResponse(format!("No JSON body returned for {}.", what))
        })?;
        serde_json::from_value(json).map_err(|e| {
            EdanError::MalformedResponse(format!("Unexpected {} payload: {}", what, e))
        })
    }
}

/// A connection to an EDAN server.
pub trait EdanConnection {
    /// Perform one call. `params` are sent as the query string (GET) or the
    /// form body (POST).
    fn call(
        &self,
        endpoint: &str,
        params: &Params,
        method: CallMethod,
    ) -> Result<EdanResponse, TransportError>;

    /// Application id the connection signs with.
    fn app_id(&self) -> &str;
}

impl<T: EdanConnection + ?Sized> EdanConnection for &T {
    fn call(
        &self,
        endpoint: &str,
        params: &Params,
        method: CallMethod,
    ) -> Result<EdanResponse, TransportError> {
        (**self).call(endpoint, params, method)
    }

    fn app_id(&self) -> &str {
        (**self).app_id()
    }
}

impl<T: EdanConnection + ?Sized> EdanConnection for Box<T> {
    fn call(
        &self,
        endpoint: &str,
        params: &Params,
        method: CallMethod,
    ) -> Result<EdanResponse, TransportError> {
        (**self).call(endpoint, params, method)
    }

    fn app_id(&self) -> &str {
        (**self).app_id()
    }
}
