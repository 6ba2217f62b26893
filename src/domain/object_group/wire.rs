//! Wire types for object group payloads.

use serde::Deserialize;

use crate::domain::object_list::wire::ObjectListResponse;
use crate::domain::page::wire::MenuEntry;
use crate::shared::serde_util;
use crate::shared::{ObjectGroupId, PageId};

/// `getObjectGroup.htm`, and each entry of `objectGroups`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ObjectGroupResponse {
    #[serde(default, rename = "objectGroupId")]
    pub object_group_id: Option<ObjectGroupId>,
    #[serde(default, deserialize_with = "serde_util::lenient_string::option")]
    pub title: Option<String>,
    #[serde(default, rename = "listTitle", deserialize_with = "serde_util::lenient_string::option")]
    pub list_title: Option<String>,
    #[serde(default, deserialize_with = "serde_util::lenient_string::option")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "serde_util::lenient_string::option")]
    pub url: Option<String>,
    #[serde(default, rename = "groupType", deserialize_with = "serde_util::lenient_i64::deserialize")]
    pub group_type: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::lenient_string::option")]
    pub keywords: Option<String>,
    /// `-1` deleted, `1` unpublished, anything else published.
    #[serde(default, deserialize_with = "serde_util::lenient_i64::deserialize")]
    pub published: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::lenient_i64::deserialize")]
    pub featured: Option<i64>,
    #[serde(default, rename = "defaultPage")]
    pub default_page: Option<PageId>,
    #[serde(default, rename = "defaultPageId")]
    pub default_page_id: Option<PageId>,
    #[serde(default, deserialize_with = "serde_util::lenient_object::deserialize")]
    pub settings: Option<GroupSettingsResponse>,
    #[serde(default, deserialize_with = "serde_util::lenient_object::deserialize")]
    pub feature: Option<FeatureResponse>,
    #[serde(default, deserialize_with = "serde_util::lenient_object::deserialize")]
    pub objects: Option<ObjectListResponse>,
    #[serde(default)]
    pub menu: Option<Vec<MenuEntry>>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct GroupSettingsResponse {
    #[serde(default, rename = "disableMenu", deserialize_with = "serde_util::lenient_i64::deserialize")]
    pub disable_menu: Option<i64>,
}

/// `{"type": "image", "url": "..."}`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct FeatureResponse {
    #[serde(default, rename = "type", deserialize_with = "serde_util::lenient_string::option")]
    pub feature_type: Option<String>,
    #[serde(default, deserialize_with = "serde_util::lenient_string::option")]
    pub url: Option<String>,
}

/// `getObjectGroups.htm`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ObjectGroupsResponse {
    #[serde(default, deserialize_with = "serde_util::lenient_i64::deserialize")]
    pub total: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::lenient_i64::deserialize")]
    pub start: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::lenient_i64::deserialize")]
    pub rows: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::lenient_string::option")]
    pub sort: Option<String>,
    #[serde(default, rename = "sortDir", deserialize_with = "serde_util::lenient_string::option")]
    pub sort_dir: Option<String>,
    #[serde(default, rename = "objectGroups")]
    pub object_groups: Option<Vec<ObjectGroupResponse>>,
}

/// `createObjectGroup.htm` / `editObjectGroup.htm`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SaveGroupResponse {
    #[serde(default, rename = "objectGroupId")]
    pub object_group_id: Option<ObjectGroupId>,
    #[serde(default, deserialize_with = "serde_util::lenient_string::option")]
    pub url: Option<String>,
}

/// `releaseObjectGroup.htm`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ReleaseGroupResponse {
    #[serde(default, rename = "objectGroupId")]
    pub object_group_id: Option<ObjectGroupId>,
    #[serde(default, rename = "objectsReleased", deserialize_with = "serde_util::lenient_i64::deserialize")]
    pub objects_released: Option<i64>,
}

/// `content/v1.0/fileupload/tokenRequest.htm`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct UploadTokenResponse {
    #[serde(default, rename = "tokenId", deserialize_with = "serde_util::lenient_string::option")]
    pub token_id: Option<String>,
    #[serde(default, deserialize_with = "serde_util::lenient_string::option")]
    pub message: Option<String>,
}
