//! Conversion: group payloads → `ObjectGroup` / `ObjectGroupCollection`.

use super::wire::{ObjectGroupResponse, ObjectGroupsResponse};
use super::{ObjectGroup, ObjectGroupCollection, ObjectGroupSettings, PublicationState};
use crate::domain::object_list::ObjectList;
use crate::domain::page::ObjectGroupPage;
use crate::shared::SortDir;

impl ObjectGroup {
    /// Overwrite the fields present in `wire`. With `with_children`, the
    /// object list and menu pages are mapped as well.
    pub(crate) fn apply(&mut self, wire: ObjectGroupResponse, with_children: bool) {
        if wire.object_group_id.is_some() {
            self.object_group_id = wire.object_group_id;
        }
        if let Some(title) = wire.title {
            self.title = title;
        }
        if let Some(list_title) = wire.list_title {
            self.list_title = list_title;
        }
        if let Some(description) = wire.description {
            self.body = description;
        }
        if let Some(url) = wire.url {
            self.uri = url;
        }
        if wire.group_type.is_some() {
            self.group_type = wire.group_type;
        }
        if let Some(keywords) = wire.keywords {
            self.keywords = keywords;
        }
        if let Some(published) = wire.published {
            self.publication = PublicationState::from_wire(published);
        }
        if let Some(featured) = wire.featured {
            self.featured = featured == 1;
        }
        if let Some(page_id) = wire.default_page_id.or(wire.default_page) {
            self.default_page_id = Some(page_id);
        }

        self.settings = ObjectGroupSettings {
            disable_menu: wire
                .settings
                .and_then(|s| s.disable_menu)
                .is_some_and(|v| v != 0),
        };

        if let Some(url) = wire.feature.and_then(|f| f.url) {
            self.image_uri = url;
        }

        if !with_children {
            return;
        }

        if let Some(objects) = wire.objects {
            self.object_list = Some(ObjectList::from_wire(
                self.object_group_id.clone(),
                None,
                objects,
            ));
        }
        if let Some(menu) = wire.menu {
            let group_id = self.object_group_id.as_ref();
            self.pages = menu
                .into_iter()
                .filter_map(|entry| ObjectGroupPage::from_menu_entry(group_id, entry))
                .collect();
        }
    }

    pub(crate) fn from_wire(wire: ObjectGroupResponse, with_children: bool) -> Self {
        let mut group = Self::default();
        group.apply(wire, with_children);
        group
    }
}

impl ObjectGroupCollection {
    /// Take paging echoed by the server and map every group in order.
    pub(crate) fn apply(&mut self, wire: ObjectGroupsResponse, with_children: bool) {
        if wire.total.is_some() {
            self.total = wire.total;
        }
        if let Some(start) = wire.start {
            self.start = start;
        }
        if wire.rows.is_some() {
            self.rows = wire.rows;
        }
        if wire.sort.is_some() {
            self.sort = wire.sort;
        }
        if let Some(dir) = wire.sort_dir.as_deref().and_then(SortDir::parse) {
            self.sort_dir = Some(dir);
        }
        self.groups = wire
            .object_groups
            .into_iter()
            .flatten()
            .map(|g| ObjectGroup::from_wire(g, with_children))
            .collect();
    }
}
