//! Object group domain — groups, their publication state, menus and the
//! paginated group listing.

pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::domain::object_list::ObjectList;
use crate::domain::page::ObjectGroupPage;
use crate::shared::{ObjectGroupId, PageId, Params, SortDir};

// ─── PublicationState ────────────────────────────────────────────────────────

/// Publication state of a group, carried on the wire as one `published`
/// integer.
///
/// **The wire encoding is counter-intuitive and must not be "fixed":**
///
/// | wire `published` | state         |
/// |------------------|---------------|
/// | `-1`             | `Deleted`     |
/// | `0`              | `Published`   |
/// | `1`              | `Unpublished` |
///
/// `1` means *not* published, in both directions. On read, any value other
/// than `-1` and `1` (absent values aside) is treated as published.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PublicationState {
    #[default]
    Published,
    Unpublished,
    Deleted,
}

impl PublicationState {
    pub fn from_wire(value: i64) -> Self {
        match value {
            -1 => Self::Deleted,
            1 => Self::Unpublished,
            _ => Self::Published,
        }
    }

    pub fn as_wire(&self) -> i64 {
        match self {
            Self::Deleted => -1,
            Self::Published => 0,
            Self::Unpublished => 1,
        }
    }
}

// ─── ObjectGroup ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectGroupSettings {
    /// Hide the page menu on the group's pages.
    pub disable_menu: bool,
}

/// A curated collection of records with its own pages.
///
/// `object_group_id` is `None` until the group is first saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectGroup {
    pub object_group_id: Option<ObjectGroupId>,
    pub title: String,
    pub list_title: String,
    /// `description` on the wire.
    pub body: String,
    pub uri: String,
    /// `None` is sent as `-1`.
    pub group_type: Option<i64>,
    pub keywords: String,
    pub featured: bool,
    /// Flattened from `feature: {"type": "image", "url": ...}`.
    pub image_uri: String,
    pub settings: ObjectGroupSettings,
    pub default_page_id: Option<PageId>,
    pub pages: Vec<ObjectGroupPage>,
    pub object_list: Option<ObjectList>,
    publication: PublicationState,
}

impl ObjectGroup {
    /// A new, unsaved group.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn publication(&self) -> PublicationState {
        self.publication
    }

    pub fn is_published(&self) -> bool {
        self.publication == PublicationState::Published
    }

    /// A deleted group is never published.
    pub fn is_deleted(&self) -> bool {
        self.publication == PublicationState::Deleted
    }

    /// Toggle publication. Has no effect on a deleted group; use
    /// [`set_publication`](Self::set_publication) to restore one.
    pub fn set_published(&mut self, published: bool) {
        if self.is_deleted() {
            return;
        }
        self.publication = if published {
            PublicationState::Published
        } else {
            PublicationState::Unpublished
        };
    }

    pub fn set_publication(&mut self, state: PublicationState) {
        self.publication = state;
    }

    /// Page ids in menu order.
    pub fn menu(&self) -> Vec<PageId> {
        self.pages.iter().filter_map(|p| p.page_id.clone()).collect()
    }

    pub fn page(&self, page_id: &PageId) -> Option<&ObjectGroupPage> {
        self.pages.iter().find(|p| p.page_id.as_ref() == Some(page_id))
    }

    /// Menu order for `requested`: known ids in the requested order, then
    /// every remaining page in its current order. Unknown ids are dropped.
    pub fn menu_order(&self, requested: Option<&[PageId]>) -> Vec<PageId> {
        let current = self.menu();
        let Some(requested) = requested else {
            return current;
        };

        let mut order: Vec<PageId> = Vec::with_capacity(current.len());
        for id in requested {
            if current.contains(id) && !order.contains(id) {
                order.push(id.clone());
            }
        }
        for id in current {
            if !order.contains(&id) {
                order.push(id);
            }
        }
        order
    }

    /// Rearrange `pages` to follow `order`. Pages not named in `order`
    /// (drafts without an id, repeated ids) keep their relative order at
    /// the end.
    pub(crate) fn reorder_pages(&mut self, order: &[PageId]) {
        let mut remaining = std::mem::take(&mut self.pages);
        for id in order {
            if let Some(pos) = remaining.iter().position(|p| p.page_id.as_ref() == Some(id)) {
                self.pages.push(remaining.remove(pos));
            }
        }
        self.pages.append(&mut remaining);
    }
}

// ─── Listing ─────────────────────────────────────────────────────────────────

/// Filters and paging for `getObjectGroups.htm`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectGroupQuery {
    /// Map object lists and menus of every group.
    pub with_children: bool,
    pub start: Option<i64>,
    pub rows: Option<i64>,
    pub sort: Option<String>,
    pub sort_dir: Option<SortDir>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
    /// `Some(true)` lists deleted groups and overrides `published`.
    pub deleted: Option<bool>,
    pub group_type: Option<i64>,
    /// Admin endpoint (`adminogmt`) instead of the public one.
    pub admin_view: bool,
}

impl Default for ObjectGroupQuery {
    fn default() -> Self {
        Self {
            with_children: false,
            start: None,
            rows: None,
            sort: None,
            sort_dir: None,
            featured: None,
            published: None,
            deleted: None,
            group_type: None,
            admin_view: true,
        }
    }
}

impl ObjectGroupQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(mut self, with_children: bool) -> Self {
        self.with_children = with_children;
        self
    }

    pub fn page(mut self, start: i64, rows: i64) -> Self {
        self.start = Some(start);
        self.rows = Some(rows);
        self
    }

    pub fn sort(mut self, field: impl Into<String>, dir: SortDir) -> Self {
        self.sort = Some(field.into());
        self.sort_dir = Some(dir);
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = Some(deleted);
        self
    }

    pub fn group_type(mut self, group_type: i64) -> Self {
        self.group_type = Some(group_type);
        self
    }

    pub fn admin_view(mut self, admin_view: bool) -> Self {
        self.admin_view = admin_view;
        self
    }

    /// Request parameters. `deleted` takes over the `published` filter:
    /// `Some(true)` sends `-1`, `Some(false)` sends nothing.
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        if let Some(start) = self.start {
            params.insert("start", start);
        }
        if let Some(rows) = self.rows {
            params.insert("rows", rows);
        }
        if let Some(sort) = &self.sort {
            params.insert("sort", sort);
        }
        if let Some(dir) = self.sort_dir {
            params.insert("sortDir", dir);
        }
        if let Some(featured) = self.featured {
            params.insert("featured", i64::from(featured));
        }
        match (self.deleted, self.published) {
            (Some(true), _) => {
                params.insert("published", PublicationState::Deleted.as_wire());
            }
            (Some(false), _) | (None, None) => {}
            (None, Some(published)) => {
                let state = if published {
                    PublicationState::Published
                } else {
                    PublicationState::Unpublished
                };
                params.insert("published", state.as_wire());
            }
        }
        if let Some(group_type) = self.group_type {
            params.insert("groupType", group_type);
        }
        params
    }
}

/// One page of `getObjectGroups.htm` results, in response order.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectGroupCollection {
    pub groups: Vec<ObjectGroup>,
    pub total: Option<i64>,
    pub start: i64,
    pub rows: Option<i64>,
    pub sort: Option<String>,
    pub sort_dir: Option<SortDir>,
    pub featured: Option<bool>,
    pub published: bool,
    pub deleted: bool,
    pub group_type: Option<i64>,
}

impl ObjectGroupCollection {
    /// Empty collection echoing the filters of `query`.
    pub fn for_query(query: &ObjectGroupQuery) -> Self {
        let deleted = query.deleted.unwrap_or(false);
        Self {
            groups: Vec::new(),
            total: None,
            start: query.start.unwrap_or(1),
            rows: query.rows,
            sort: query.sort.clone(),
            sort_dir: query.sort_dir,
            featured: query.featured,
            published: !deleted && query.published.unwrap_or(true),
            deleted,
            group_type: query.group_type,
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ObjectGroup> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a ObjectGroupCollection {
    type Item = &'a ObjectGroup;
    type IntoIter = std::slice::Iter<'a, ObjectGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
