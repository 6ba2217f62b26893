//! Object group page domain.

pub mod client;
mod convert;
pub mod wire;

use crate::domain::object_list::ObjectList;
use crate::shared::{ObjectGroupId, PageId};

/// Page-level switches, sent as `settings={"disableObjects":0|1}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageSettings {
    pub disable_object_listing: bool,
}

/// A page of an object group. Identity is `(object_group_id, page_id)`;
/// `page_id` is `None` until the page is first saved.
///
/// Pages built from a group menu only carry their identity. Their content
/// and object list stay empty until the page is loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectGroupPage {
    pub object_group_id: Option<ObjectGroupId>,
    pub page_id: Option<PageId>,
    pub title: String,
    pub list_title: String,
    pub content: String,
    pub uri: String,
    pub settings: PageSettings,
    pub object_list: Option<ObjectList>,
}

impl ObjectGroupPage {
    /// A new, unsaved page.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Identity-only page, as listed in a group menu.
    pub fn stub(object_group_id: ObjectGroupId, page_id: PageId) -> Self {
        Self {
            object_group_id: Some(object_group_id),
            page_id: Some(page_id),
            ..Self::default()
        }
    }

    pub fn is_new(&self) -> bool {
        self.page_id.is_none()
    }
}
