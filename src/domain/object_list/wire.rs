//! Wire types for object listing payloads.
//!
//! A listing arrives under `objects` in group/page payloads, under `lists`
//! in `editObjectListing` responses, or at the top level of
//! `getObjectListingMetadata`.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::shared::serde_util;

/// Listing payload. Every field is optional; absent means "not sent".
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ObjectListResponse {
    #[serde(default, rename = "listName", deserialize_with = "serde_util::lenient_string::option")]
    pub list_name: Option<String>,
    #[serde(default, deserialize_with = "serde_util::lenient_i64::deserialize")]
    pub size: Option<i64>,
    /// Fallback for `size` on search-backed responses.
    #[serde(default, rename = "numFound", deserialize_with = "serde_util::lenient_i64::deserialize")]
    pub num_found: Option<i64>,
    #[serde(default, rename = "listType", deserialize_with = "serde_util::lenient_i64::deserialize")]
    pub list_type: Option<i64>,
    #[serde(default)]
    pub items: Option<Vec<WireItem>>,
    #[serde(default, deserialize_with = "serde_util::lenient_object::deserialize")]
    pub settings: Option<Map<String, Value>>,
}

/// One entry of `items`: a bare identifier or a full record.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum WireItem {
    Id(String),
    Record(WireRecordItem),
    Other(Value),
}

/// Structured item: `{ "content": {...}, "type": "...", "url": "edanmdm:..." }`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct WireRecordItem {
    #[serde(default, deserialize_with = "serde_util::lenient_object::deserialize")]
    pub content: Option<WireRecordContent>,
    #[serde(default, deserialize_with = "serde_util::lenient_string::option")]
    pub url: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "serde_util::lenient_string::option")]
    pub item_type: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct WireRecordContent {
    #[serde(
        default,
        rename = "descriptiveNonRepeating",
        deserialize_with = "serde_util::lenient_object::deserialize"
    )]
    pub descriptive_non_repeating: Option<WireDescriptiveNonRepeating>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct WireDescriptiveNonRepeating {
    #[serde(default, rename = "record_ID", deserialize_with = "serde_util::lenient_string::option")]
    pub record_id: Option<String>,
}

/// `editObjectListing` response: the updated listing sits under `lists`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EditListingResponse {
    #[serde(default, deserialize_with = "serde_util::lenient_object::deserialize")]
    pub lists: Option<ObjectListResponse>,
}

/// `getObjectListingMetadata` response: either `lists` or the listing itself.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ListingMetadataResponse {
    #[serde(default, deserialize_with = "serde_util::lenient_object::deserialize")]
    pub lists: Option<ObjectListResponse>,
    #[serde(flatten)]
    pub listing: ObjectListResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_items_accept_strings_and_records() {
        let wire: ObjectListResponse = serde_json::from_value(json!({
            "listType": "0",
            "size": 2,
            "items": [
                "npg_S_NPG.85.20",
                {"url": "edanmdm:siris_sil_960883", "type": "edanmdm"}
            ]
        }))
        .unwrap();
        assert_eq!(wire.list_type, Some(0));
        let items = wire.items.unwrap();
        assert!(matches!(&items[0], WireItem::Id(id) if id == "npg_S_NPG.85.20"));
        assert!(matches!(&items[1], WireItem::Record(r) if r.url.as_deref() == Some("edanmdm:siris_sil_960883")));
    }

    #[test]
    fn test_record_id_is_nested() {
        let item: WireItem = serde_json::from_value(json!({
            "content": {"descriptiveNonRepeating": {"record_ID": "nmnh_123"}}
        }))
        .unwrap();
        let WireItem::Record(record) = item else {
            panic!("expected record");
        };
        let id = record
            .content
            .and_then(|c| c.descriptive_non_repeating)
            .and_then(|d| d.record_id);
        assert_eq!(id.as_deref(), Some("nmnh_123"));
    }

    #[test]
    fn test_metadata_response_with_and_without_lists() {
        let wrapped: ListingMetadataResponse =
            serde_json::from_value(json!({"lists": {"size": 1, "items": ["a"]}})).unwrap();
        assert_eq!(wrapped.lists.unwrap().size, Some(1));

        let flat: ListingMetadataResponse =
            serde_json::from_value(json!({"numFound": 4, "items": []})).unwrap();
        assert!(flat.lists.is_none());
        assert_eq!(flat.listing.num_found, Some(4));
    }
}
