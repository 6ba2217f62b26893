//! Object list domain — hand-picked record lists and saved searches.
//!
//! A list is either a set of record identifiers ([`ListType::HandPicked`])
//! or a query plus facets ([`ListType::SavedSearch`]). The two
//! representations are mutually exclusive: populating one clears the other.

pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::{ObjectGroupId, PageId};

pub use convert::{php_urldecode, php_urlencode};

// ─── ListType ────────────────────────────────────────────────────────────────

/// How a list selects its records. Sent as `listType` `0` / `1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListType {
    #[default]
    HandPicked,
    SavedSearch,
}

impl ListType {
    /// `1` is a saved search; every other value is a hand-picked list.
    pub fn from_wire(value: i64) -> Self {
        if value == 1 {
            Self::SavedSearch
        } else {
            Self::HandPicked
        }
    }

    pub fn as_wire(&self) -> i64 {
        match self {
            Self::HandPicked => 0,
            Self::SavedSearch => 1,
        }
    }
}

// ─── ObjectList ──────────────────────────────────────────────────────────────

/// Object listing of a group, or of one page of a group when `page_id` is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectList {
    pub object_group_id: Option<ObjectGroupId>,
    pub page_id: Option<PageId>,
    pub list_type: ListType,
    pub list_name: String,
    pub size: i64,
    pub settings: Map<String, Value>,
    items: Vec<String>,
    query_terms: Option<String>,
    query_facets: Vec<String>,
}

impl ObjectList {
    pub fn new(object_group_id: Option<ObjectGroupId>, page_id: Option<PageId>) -> Self {
        Self {
            object_group_id,
            page_id,
            ..Self::default()
        }
    }

    /// Record identifiers. Empty for a saved search.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Free-text query of a saved search.
    pub fn query_terms(&self) -> Option<&str> {
        self.query_terms.as_deref()
    }

    /// Facet queries (`field:value`) of a saved search.
    pub fn query_facets(&self) -> &[String] {
        &self.query_facets
    }

    /// Replace the hand-picked items; clears any search.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.query_terms = None;
        self.query_facets.clear();
    }

    /// Append one hand-picked item; clears any search.
    pub fn push_item(&mut self, item: impl Into<String>) {
        self.query_terms = None;
        self.query_facets.clear();
        self.items.push(item.into());
    }

    /// Replace the saved search; clears any items.
    pub fn set_search(&mut self, terms: Option<String>, facets: Vec<String>) {
        self.items.clear();
        self.query_terms = terms;
        self.query_facets = facets;
    }

    pub(crate) fn remove_item(&mut self, item: &str) {
        self.items.retain(|i| i != item);
    }

    /// Drop the content that does not belong to the current list type.
    pub(crate) fn enforce_exclusive(&mut self) {
        match self.list_type {
            ListType::HandPicked => {
                self.query_terms = None;
                self.query_facets.clear();
            }
            ListType::SavedSearch => self.items.clear(),
        }
    }

    /// Reset every field except identity.
    pub(crate) fn reset(&mut self) {
        *self = Self::new(self.object_group_id.take(), self.page_id.take());
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn has_search(&self) -> bool {
        self.query_terms.as_deref().is_some_and(|t| !t.is_empty())
    }
}
