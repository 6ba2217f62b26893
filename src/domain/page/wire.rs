//! Wire types for page payloads.

use serde::Deserialize;

use crate::domain::object_list::wire::ObjectListResponse;
use crate::shared::serde_util;
use crate::shared::{ObjectGroupId, PageId};

/// `getObjectGroup.htm` called with a `pageId`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PageEnvelope {
    #[serde(default, deserialize_with = "serde_util::lenient_object::deserialize")]
    pub page: Option<PageResponse>,
    #[serde(default, deserialize_with = "serde_util::lenient_object::deserialize")]
    pub objects: Option<ObjectListResponse>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PageResponse {
    #[serde(default, rename = "objectGroupId")]
    pub object_group_id: Option<ObjectGroupId>,
    #[serde(default, rename = "pageId")]
    pub page_id: Option<PageId>,
    #[serde(default, deserialize_with = "serde_util::lenient_string::option")]
    pub title: Option<String>,
    #[serde(default, rename = "listTitle", deserialize_with = "serde_util::lenient_string::option")]
    pub list_title: Option<String>,
    #[serde(default, deserialize_with = "serde_util::lenient_string::option")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "serde_util::lenient_string::option")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "serde_util::lenient_object::deserialize")]
    pub settings: Option<PageSettingsResponse>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PageSettingsResponse {
    #[serde(default, rename = "disableObjects", deserialize_with = "serde_util::lenient_i64::deserialize")]
    pub disable_objects: Option<i64>,
}

/// `createPage.htm` / `editPage.htm` response.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SavePageResponse {
    #[serde(default, rename = "pageId")]
    pub page_id: Option<PageId>,
    #[serde(default, deserialize_with = "serde_util::lenient_string::option")]
    pub url: Option<String>,
}

/// One entry of a group `menu`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct MenuEntry {
    #[serde(default)]
    pub id: Option<PageId>,
    #[serde(default, deserialize_with = "serde_util::lenient_string::option")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "serde_util::lenient_string::option")]
    pub title: Option<String>,
}
