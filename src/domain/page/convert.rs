//! Conversion: page payloads → `ObjectGroupPage`.

use super::wire::{MenuEntry, PageEnvelope};
use super::{ObjectGroupPage, PageSettings};
use crate::domain::object_list::ObjectList;
use crate::shared::ObjectGroupId;

impl ObjectGroupPage {
    /// Overwrite the fields present in a page payload. The object list is
    /// replaced by `objects`, or dropped when the payload has none.
    pub(crate) fn apply(&mut self, envelope: PageEnvelope) {
        if let Some(page) = envelope.page {
            if page.object_group_id.is_some() {
                self.object_group_id = page.object_group_id;
            }
            if page.page_id.is_some() {
                self.page_id = page.page_id;
            }
            if let Some(title) = page.title {
                self.title = title;
            }
            if let Some(list_title) = page.list_title {
                self.list_title = list_title;
            }
            if let Some(content) = page.content {
                self.content = content;
            }
            if let Some(url) = page.url {
                self.uri = url;
            }
            if let Some(settings) = page.settings {
                self.settings = PageSettings {
                    disable_object_listing: settings.disable_objects.is_some_and(|v| v != 0),
                };
            }
        }

        self.object_list = envelope.objects.map(|objects| {
            ObjectList::from_wire(self.object_group_id.clone(), self.page_id.clone(), objects)
        });
    }

    /// Identity-only page from a menu entry. Entries without an id are
    /// skipped by returning `None`.
    pub(crate) fn from_menu_entry(
        object_group_id: Option<&ObjectGroupId>,
        entry: MenuEntry,
    ) -> Option<Self> {
        entry.id.map(|page_id| Self {
            object_group_id: object_group_id.cloned(),
            page_id: Some(page_id),
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::object_list::ListType;
    use crate::shared::PageId;
    use serde_json::json;

    #[test]
    fn test_apply_full_page() {
        let envelope: PageEnvelope = serde_json::from_value(json!({
            "page": {
                "objectGroupId": "g1",
                "pageId": "p1",
                "title": "Intro",
                "listTitle": "Intro list",
                "content": "<p>Hello</p>",
                "url": "intro",
                "settings": {"disableObjects": "1"}
            },
            "objects": {"listType": 0, "size": 1, "items": ["rec1"]}
        }))
        .unwrap();

        let mut page = ObjectGroupPage::default();
        page.apply(envelope);
        assert_eq!(page.object_group_id, Some(ObjectGroupId::from("g1")));
        assert_eq!(page.page_id, Some(PageId::from("p1")));
        assert_eq!(page.title, "Intro");
        assert_eq!(page.uri, "intro");
        assert!(page.settings.disable_object_listing);

        let list = page.object_list.unwrap();
        assert_eq!(list.page_id, Some(PageId::from("p1")));
        assert_eq!(list.list_type, ListType::HandPicked);
        assert_eq!(list.items(), ["rec1"]);
    }

    #[test]
    fn test_apply_without_objects_drops_list() {
        let mut page = ObjectGroupPage::stub(ObjectGroupId::from("g"), PageId::from("p"));
        page.object_list = Some(ObjectList::default());
        page.apply(serde_json::from_value(json!({"page": {"title": "T"}})).unwrap());
        assert!(page.object_list.is_none());
        assert_eq!(page.page_id, Some(PageId::from("p")));
    }

    #[test]
    fn test_menu_entry_is_identity_only() {
        let entry: MenuEntry = serde_json::from_value(json!({
            "id": "dpt-1", "url": "about", "title": "About"
        }))
        .unwrap();
        let page = ObjectGroupPage::from_menu_entry(Some(&ObjectGroupId::from("g")), entry).unwrap();
        assert_eq!(page.page_id, Some(PageId::from("dpt-1")));
        assert!(page.title.is_empty());
        assert!(page.uri.is_empty());
        assert!(page.object_list.is_none());

        let no_id: MenuEntry = serde_json::from_value(json!({"title": "x"})).unwrap();
        assert!(ObjectGroupPage::from_menu_entry(None, no_id).is_none());
    }
}
