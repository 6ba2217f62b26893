//! Object lists sub-client — load, add, remove, move, clear, retype, save.
//!
//! Every mutation goes through `editObjectListing.htm` with an `action`
//! parameter and updates the local list from the response.

use crate::client::Ogmt;
use crate::connection::CallMethod;
use crate::error::EdanError;
use crate::network::endpoints;
use crate::shared::{Outcome, Params};

use super::convert::php_urlencode;
use super::wire::{EditListingResponse, ListingMetadataResponse};
use super::{ListType, ObjectList};

pub struct ObjectLists<'a> {
    pub(crate) client: &'a Ogmt<'a>,
}

impl<'a> ObjectLists<'a> {
    /// Fetch the listing of `list.object_group_id` (and `list.page_id`).
    pub fn load(&self, list: &mut ObjectList) -> Outcome<()> {
        self.try_load(list).into()
    }

    /// Send items to the remote list. A non-empty `items` replaces the local
    /// items first; an empty one sends what the list already holds (items,
    /// or the saved search).
    pub fn add_items(&self, list: &mut ObjectList, items: Vec<String>) -> Outcome<()> {
        if !items.is_empty() {
            list.set_items(items);
        }
        self.try_add_items(list).into()
    }

    /// Append one item locally, then send the list.
    pub fn add_item(&self, list: &mut ObjectList, item: &str) -> Outcome<()> {
        list.push_item(item);
        self.try_add_items(list).into()
    }

    pub fn remove_item(&self, list: &mut ObjectList, item: &str) -> Outcome<()> {
        self.try_remove_item(list, item).into()
    }

    /// Move `item` so it follows `after` in the remote order.
    pub fn move_item(&self, list: &mut ObjectList, item: &str, after: &str) -> Outcome<()> {
        self.try_move_item(list, item, after).into()
    }

    /// Empty the remote list. With `clear_local`, a saved search is switched
    /// back to hand-picked, local state is reset and the list is reloaded.
    pub fn clear(&self, list: &mut ObjectList, clear_local: bool) -> Outcome<()> {
        self.try_clear(list, clear_local).into()
    }

    pub fn modify_type(&self, list: &mut ObjectList, list_type: ListType) -> Outcome<()> {
        self.try_modify_type(list, list_type).into()
    }

    /// Replace the remote list with the local hand-picked items.
    pub fn save(&self, list: &mut ObjectList) -> Outcome<()> {
        self.try_save(list).into()
    }

    /// Replace the remote list with a saved search. `None` keeps the
    /// corresponding local value.
    pub fn save_search(
        &self,
        list: &mut ObjectList,
        query: Option<String>,
        facets: Option<Vec<String>>,
    ) -> Outcome<()> {
        self.try_save_search(list, query, facets).into()
    }

    // ── Implementation ───────────────────────────────────────────────────

    fn try_load(&self, list: &mut ObjectList) -> Result<(), EdanError> {
        let group_id = require_group(list, "load")?;
        let mut params = Params::new().with("objectGroupId", group_id);
        if let Some(page_id) = &list.page_id {
            params.insert("pageId", page_id);
        }

        list.size = 0;
        list.set_items(Vec::new());

        let response = self.client.call(
            endpoints::GET_OBJECT_LISTING_METADATA,
            &params,
            CallMethod::Get,
            "Could not load object list.",
        )?;

        if response.has_key("lists") || response.has_key("items") {
            let wire: ListingMetadataResponse = response.parse("object listing")?;
            list.apply(wire.lists.unwrap_or(wire.listing));
        }
        Ok(())
    }

    fn try_add_items(&self, list: &mut ObjectList) -> Result<(), EdanError> {
        let mut params = self.edit_params(list, "add", "add items to")?;
        params.insert("listType", list.list_type.as_wire());

        if list.has_search() {
            let mut entries = Vec::with_capacity(list.query_facets().len() + 1);
            entries.push(php_urlencode(list.query_terms().unwrap_or_default()));
            entries.extend(list.query_facets().iter().cloned());
            params.insert("items", json_array(&entries)?);
        } else if let [single] = list.items() {
            params.insert("item", single);
        } else if list.has_items() {
            params.insert("items", json_array(list.items())?);
        } else {
            return Err(EdanError::MissingState(
                "No items provided. Could not add items to object list.".to_string(),
            ));
        }

        let response = self.client.call(
            endpoints::EDIT_OBJECT_LISTING,
            &params,
            CallMethod::Get,
            "Could not add items to object list.",
        )?;

        let wire: EditListingResponse = response.parse("object listing").unwrap_or_default();
        if let Some(lists) = wire.lists.filter(|l| l.items.is_some()) {
            list.apply(lists);
        }
        Ok(())
    }

    fn try_remove_item(&self, list: &mut ObjectList, item: &str) -> Result<(), EdanError> {
        let mut params = self.edit_params(list, "remove", "remove an item from")?;
        params.insert("item", item);

        self.client.call(
            endpoints::EDIT_OBJECT_LISTING,
            &params,
            CallMethod::Get,
            "Could not remove item from object list.",
        )?;

        list.remove_item(item);
        Ok(())
    }

    fn try_move_item(&self, list: &mut ObjectList, item: &str, after: &str) -> Result<(), EdanError> {
        let mut params = self.edit_params(list, "move", "move an item on")?;
        params.insert("item", item).insert("afterId", after);

        let response = self.client.call(
            endpoints::EDIT_OBJECT_LISTING,
            &params,
            CallMethod::Get,
            "Could not move item on object list.",
        )?;

        let wire: EditListingResponse = response.parse("object listing").unwrap_or_default();
        if let Some(lists) = wire.lists {
            list.apply(lists);
        }
        Ok(())
    }

    fn try_clear(&self, list: &mut ObjectList, clear_local: bool) -> Result<(), EdanError> {
        let params = self.edit_params(list, "clear", "clear")?;
        self.client.call(
            endpoints::EDIT_OBJECT_LISTING,
            &params,
            CallMethod::Get,
            "Could not clear object list.",
        )?;

        if !clear_local {
            return Ok(());
        }

        let retyped = if list.list_type == ListType::SavedSearch {
            self.try_modify_type(list, ListType::HandPicked)
        } else {
            Ok(())
        };

        list.reset();
        if let Err(e) = self.try_load(list) {
            tracing::warn!(error = %e, "Reload after clearing the object list failed");
        }
        retyped
    }

    fn try_modify_type(&self, list: &mut ObjectList, list_type: ListType) -> Result<(), EdanError> {
        let mut params = self.edit_params(list, "modifyType", "modify the type of")?;
        params.insert("listType", list_type.as_wire());

        self.client.call(
            endpoints::EDIT_OBJECT_LISTING,
            &params,
            CallMethod::Get,
            "Could not modify list type for object list.",
        )?;

        list.list_type = list_type;
        Ok(())
    }

    fn try_save(&self, list: &mut ObjectList) -> Result<(), EdanError> {
        // Both calls fail with 404 while the remote list does not exist yet.
        if let Err(e) = self.try_clear(list, false) {
            tracing::debug!(error = %e, "Ignoring clear failure before save");
        }
        if list.list_type == ListType::SavedSearch {
            if let Err(e) = self.try_modify_type(list, ListType::HandPicked) {
                tracing::debug!(error = %e, "Ignoring list type failure before save");
            }
            list.list_type = ListType::HandPicked;
            list.enforce_exclusive();
        }
        self.try_add_items(list)
    }

    fn try_save_search(
        &self,
        list: &mut ObjectList,
        query: Option<String>,
        facets: Option<Vec<String>>,
    ) -> Result<(), EdanError> {
        let terms = query
            .or_else(|| list.query_terms().map(str::to_string))
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                EdanError::MissingState(
                    "No query terms have been set for this object listing. Cannot save search."
                        .to_string(),
                )
            })?;
        let facets = facets.unwrap_or_else(|| list.query_facets().to_vec());

        if let Err(e) = self.try_clear(list, true) {
            tracing::debug!(error = %e, "Ignoring clear failure before saving search");
        }
        if list.list_type == ListType::HandPicked {
            if let Err(e) = self.try_modify_type(list, ListType::SavedSearch) {
                tracing::debug!(error = %e, "Ignoring list type failure before saving search");
            }
            list.list_type = ListType::SavedSearch;
        }

        list.set_search(Some(terms), facets);
        self.try_add_items(list)
    }

    /// `action`, `objectGroupId` and, when set, `pageId`.
    fn edit_params(&self, list: &ObjectList, action: &str, what: &str) -> Result<Params, EdanError> {
        let group_id = require_group(list, what)?;
        let mut params = Params::new()
            .with("action", action)
            .with("objectGroupId", group_id);
        if let Some(page_id) = &list.page_id {
            params.insert("pageId", page_id);
        }
        Ok(params)
    }
}

fn require_group<'l>(list: &'l ObjectList, what: &str) -> Result<&'l str, EdanError> {
    list.object_group_id
        .as_ref()
        .map(|id| id.as_str())
        .ok_or_else(|| {
            EdanError::MissingState(format!(
                "Object Group Id not set. Could not {} object list.",
                what
            ))
        })
}

fn json_array(entries: &[String]) -> Result<String, EdanError> {
    serde_json::to_string(entries)
        .map_err(|e| EdanError::InvalidInput(format!("Could not encode items: {}", e)))
}
