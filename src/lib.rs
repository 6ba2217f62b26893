//! # EDAN OGMT client
//!
//! A Rust client for the EDAN Object Group Management Tool API: object
//! groups, their pages, and the object listings attached to either.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Identifiers, domain models, wire mapping, endpoint paths
//! 2. **Auth** — Nonce generation and signed request headers
//! 3. **Connection** — The `EdanConnection` contract every transport implements
//! 4. **HTTP** — `EdanHttp`, a blocking reqwest connection (feature `http`)
//! 5. **High-Level Client** — `Ogmt` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use edan_ogmt::prelude::*;
//!
//! let config = EdanConfig::from_env()?;
//! let http = EdanHttp::new(&config)?;
//! let ogmt = Ogmt::new(&http);
//!
//! let groups = ogmt.object_groups().list(&ObjectGroupQuery::new().page(1, 10));
//! if !groups.success {
//!     eprintln!("{:?}", groups.errors);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, request parameters and the per-call `Outcome`.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified error types.
pub mod error;

/// Server defaults and endpoint paths.
pub mod network;

/// Connection settings.
pub mod config;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Request signing: nonce, signature, headers.
pub mod auth;

// ── Layer 3: Connection ──────────────────────────────────────────────────────

/// Transport contract consumed by the OGMT layer.
pub mod connection;

// ── Layer 4: HTTP ────────────────────────────────────────────────────────────

/// Blocking HTTP connection.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `Ogmt` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{ObjectGroupId, Outcome, PageId, Params, SortDir};

    // Domain types — object groups
    pub use crate::domain::object_group::{
        ObjectGroup, ObjectGroupCollection, ObjectGroupQuery, ObjectGroupSettings,
        PublicationState,
    };

    // Domain types — pages, object lists
    pub use crate::domain::object_list::{ListType, ObjectList};
    pub use crate::domain::page::{ObjectGroupPage, PageSettings};

    // Errors
    pub use crate::error::{EdanError, TransportError};

    // Config + network
    pub use crate::config::{EdanConfig, EdanConfigBuilder};
    pub use crate::network::{DEFAULT_APP_VERSION, DEFAULT_EDAN_SERVER};

    // Auth
    pub use crate::auth::{RequestSigner, Tier};

    // Connection
    pub use crate::connection::{CallMethod, EdanConnection, EdanResponse};

    // HTTP connection
    #[cfg(feature = "http")]
    pub use crate::http::EdanHttp;

    // Client + sub-clients
    pub use crate::client::{ObjectGroupsClient, ObjectListsClient, Ogmt, PagesClient};
}
