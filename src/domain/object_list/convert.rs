//! Mapping from listing payloads onto [`ObjectList`].

use std::borrow::Cow;

use super::wire::{ObjectListResponse, WireItem, WireRecordItem};
use super::{ListType, ObjectList};
use crate::shared::serde_util;

impl ObjectList {
    /// Merge a listing payload into this list. Fields absent from the
    /// payload keep their current value; `items` is replaced when sent.
    pub(crate) fn apply(&mut self, wire: ObjectListResponse) {
        if let Some(name) = wire.list_name {
            self.list_name = name;
        }
        if let Some(size) = wire.size.or(wire.num_found) {
            self.size = size;
        }

        let (extracted, hand_picked_shape) = match wire.items.as_deref() {
            Some(items) => {
                let (ids, content) = extract_items(items);
                let shape = content || !is_search_shaped(&ids);
                (Some(ids), shape)
            }
            None => (None, false),
        };

        self.list_type =
            resolve_list_type(wire.list_type, self.size, hand_picked_shape, self.list_type);

        if let Some(ids) = extracted {
            match self.list_type {
                ListType::SavedSearch if self.size > 0 => {
                    let (terms, facets) = reinterpret_search(ids);
                    self.set_search(terms, facets);
                }
                // Entries without a size do not replace the current search.
                ListType::SavedSearch => {}
                ListType::HandPicked => self.set_items(ids),
            }
        }
        self.enforce_exclusive();

        if let Some(settings) = wire.settings {
            self.settings = settings;
        }
    }

    /// Fresh list for a group/page built from a payload.
    pub(crate) fn from_wire(
        object_group_id: Option<crate::shared::ObjectGroupId>,
        page_id: Option<crate::shared::PageId>,
        wire: ObjectListResponse,
    ) -> Self {
        let mut list = Self::new(object_group_id, page_id);
        list.apply(wire);
        list
    }
}

/// Explicit `listType` wins; otherwise a non-empty list of hand-picked
/// items stays hand-picked and any other non-empty list is a saved search.
/// With `size <= 0` and no explicit type the current type is kept.
fn resolve_list_type(
    explicit: Option<i64>,
    size: i64,
    hand_picked_shape: bool,
    current: ListType,
) -> ListType {
    match explicit {
        Some(value) => ListType::from_wire(value),
        None if size > 0 && hand_picked_shape => ListType::HandPicked,
        None if size > 0 => ListType::SavedSearch,
        None => current,
    }
}

/// Pull one identifier per entry. Returns the identifiers and whether any
/// entry was a record carrying `content`.
fn extract_items(items: &[WireItem]) -> (Vec<String>, bool) {
    let mut content_items = false;
    let ids = items
        .iter()
        .filter_map(|item| match item {
            WireItem::Id(id) => Some(id.clone()),
            WireItem::Record(record) => {
                content_items |= record.content.is_some();
                record_id(record)
            }
            WireItem::Other(value) => serde_util::value_to_string(value),
        })
        .collect();
    (ids, content_items)
}

/// A saved search carries at most one free-text entry; the rest are
/// `field:value` facets.
fn is_search_shaped(ids: &[String]) -> bool {
    ids.iter().filter(|id| !id.contains(':')).count() <= 1
}

/// `content.descriptiveNonRepeating.record_ID`, else the last
/// colon-separated segment of `url`.
fn record_id(record: &WireRecordItem) -> Option<String> {
    let nested = record
        .content
        .as_ref()
        .and_then(|c| c.descriptive_non_repeating.as_ref())
        .and_then(|d| d.record_id.clone());
    if nested.is_some() {
        return nested;
    }
    let url = record.url.as_deref()?;
    let id = url.rsplit(':').next().unwrap_or(url);
    (!id.is_empty()).then(|| id.to_string())
}

/// Saved searches travel as strings: entries with a colon are facet
/// queries, the remaining entry is the url-encoded free text.
fn reinterpret_search(entries: Vec<String>) -> (Option<String>, Vec<String>) {
    let mut terms = None;
    let mut facets = Vec::new();
    for entry in entries {
        if entry.contains(':') {
            facets.push(entry);
        } else {
            terms = Some(php_urldecode(&entry));
        }
    }
    (terms, facets)
}

/// Form-style decoding: `+` is a space, then percent-decoding. Invalid
/// sequences leave the input untouched.
pub fn php_urldecode(input: &str) -> String {
    let spaced = input.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Form-style encoding: spaces become `+`.
pub fn php_urlencode(input: &str) -> String {
    match urlencoding::encode(input) {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s.replace("%20", "+"),
    }
}
