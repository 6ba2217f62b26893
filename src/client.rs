//! High-level client — `Ogmt` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the borrowed connection and the shared call path.

use crate::connection::{CallMethod, EdanConnection, EdanResponse};
use crate::domain::object_group::client::ObjectGroups;
use crate::domain::object_list::client::ObjectLists;
use crate::domain::page::client::Pages;
use crate::error::EdanError;
use crate::shared::Params;

// Re-export sub-client types for convenience.
pub use crate::domain::object_group::client::ObjectGroups as ObjectGroupsClient;
pub use crate::domain::object_list::client::ObjectLists as ObjectListsClient;
pub use crate::domain::page::client::Pages as PagesClient;

/// The primary entry point for OGMT operations.
///
/// The connection is owned by the caller and borrowed for the lifetime of
/// the client; the client never builds its own transport.
///
/// ```ignore
/// let http = EdanHttp::new(&EdanConfig::from_env()?)?;
/// let ogmt = Ogmt::new(&http);
/// let groups = ogmt.object_groups().list(&ObjectGroupQuery::default());
/// ```
pub struct Ogmt<'a> {
    pub(crate) connection: &'a dyn EdanConnection,
}

impl<'a> Ogmt<'a> {
    pub fn new(connection: &'a dyn EdanConnection) -> Self {
        Self { connection }
    }

    pub fn app_id(&self) -> &str {
        self.connection.app_id()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn object_groups(&self) -> ObjectGroups<'_> {
        ObjectGroups { client: self }
    }

    pub fn pages(&self) -> Pages<'_> {
        Pages { client: self }
    }

    pub fn object_lists(&self) -> ObjectLists<'_> {
        ObjectLists { client: self }
    }

    // ── Shared call path ─────────────────────────────────────────────────

    /// One call: transport failures carry `context`, a body with an `error`
    /// key becomes [`EdanError::Remote`].
    pub(crate) fn call(
        &self,
        endpoint: &str,
        params: &Params,
        method: CallMethod,
        context: &str,
    ) -> Result<EdanResponse, EdanError> {
        tracing::debug!(endpoint, method = method.as_str(), params = params.len(), "OGMT call");
        let response = self
            .connection
            .call(endpoint, params, method)
            .map_err(|e| EdanError::transport(e, context))?;
        response.check_remote_error()?;
        Ok(response)
    }
}

impl std::fmt::Debug for Ogmt<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ogmt")
            .field("app_id", &self.app_id())
            .finish_non_exhaustive()
    }
}

/// Fail with [`EdanError::MalformedResponse`] unless the body has `key`.
pub(crate) fn require_key(
    response: &EdanResponse,
    key: &str,
    message: &str,
) -> Result<(), EdanError> {
    if response.has_key(key) {
        Ok(())
    } else {
        tracing::warn!(key, "EDAN response is missing an expected key");
        Err(EdanError::MalformedResponse(message.to_string()))
    }
}
