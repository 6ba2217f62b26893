//! Object groups sub-client — listing, load, save, deletion, menus, pages.

use serde_json::json;

use crate::client::{require_key, Ogmt};
use crate::connection::{CallMethod, EdanResponse};
use crate::error::EdanError;
use crate::network::endpoints;
use crate::shared::serde_util;
use crate::shared::{ObjectGroupId, Outcome, PageId, Params};

use super::wire::{
    ObjectGroupResponse, ObjectGroupsResponse, ReleaseGroupResponse, SaveGroupResponse,
    UploadTokenResponse,
};
use super::{ObjectGroup, ObjectGroupCollection, ObjectGroupQuery, PublicationState};
use crate::domain::page::ObjectGroupPage;

pub struct ObjectGroups<'a> {
    pub(crate) client: &'a Ogmt<'a>,
}

impl<'a> ObjectGroups<'a> {
    /// `getObjectGroups.htm`, admin or public by `query.admin_view`.
    pub fn list(&self, query: &ObjectGroupQuery) -> Outcome<ObjectGroupCollection> {
        self.try_list(query).into()
    }

    /// Load one group with its object list and menu pages.
    pub fn load(&self, object_group_id: &ObjectGroupId, admin_view: bool) -> Outcome<ObjectGroup> {
        let params = Params::new().with("objectGroupId", object_group_id);
        let mut group = ObjectGroup {
            object_group_id: Some(object_group_id.clone()),
            ..ObjectGroup::default()
        };
        self.try_load(&mut group, &params, admin_view)
            .map(|()| group)
            .into()
    }

    /// Load one group by its url slug.
    pub fn load_by_uri(&self, uri: &str, admin_view: bool) -> Outcome<ObjectGroup> {
        let params = Params::new().with("objectGroupUrl", uri);
        let mut group = ObjectGroup {
            uri: uri.to_string(),
            ..ObjectGroup::default()
        };
        self.try_load(&mut group, &params, admin_view)
            .map(|()| group)
            .into()
    }

    /// Create (no id yet) or edit the group. Pages and the object list are
    /// not saved; the assigned id and url are written back.
    pub fn save(&self, group: &mut ObjectGroup) -> Outcome<()> {
        self.try_save(group).into()
    }

    /// `releaseObjectGroup.htm`. On success the group is marked deleted.
    pub fn mark_for_deletion(&self, group: &mut ObjectGroup) -> Outcome<()> {
        self.try_mark_for_deletion(group).into()
    }

    pub fn set_default_page(&self, group: &mut ObjectGroup, page_id: &PageId) -> Outcome<()> {
        self.try_set_default_page(group, page_id).into()
    }

    /// Page ids in the current local order. No call is made.
    pub fn menu(&self, group: &ObjectGroup) -> Vec<PageId> {
        group.menu()
    }

    /// Store the page order. `None` keeps the local order; otherwise the
    /// requested ids come first and every other page follows. The local
    /// pages are rearranged once the server confirms.
    pub fn set_menu(&self, group: &mut ObjectGroup, page_ids: Option<&[PageId]>) -> Outcome<()> {
        self.try_set_menu(group, page_ids).into()
    }

    /// Store the current local page order.
    pub fn set_page_order(&self, group: &mut ObjectGroup) -> Outcome<()> {
        if group.pages.is_empty() {
            return Err::<(), _>(EdanError::MissingState(
                "This object group has no pages. Cannot set page order.".to_string(),
            ))
            .into();
        }
        self.try_set_menu(group, None).into()
    }

    /// Save `page` under this group. A new page is appended to the group's
    /// pages; an existing one replaces its local copy. Returns the page id.
    pub fn save_page(&self, group: &mut ObjectGroup, page: ObjectGroupPage) -> Outcome<PageId> {
        self.try_save_page(group, page).into()
    }

    /// `releasePage.htm`. The page is removed locally on success.
    pub fn delete_page(&self, group: &mut ObjectGroup, page_id: &PageId) -> Outcome<()> {
        self.try_delete_page(group, page_id).into()
    }

    /// Short-lived token for the file upload service.
    pub fn request_upload_token(&self) -> Outcome<String> {
        self.try_request_upload_token().into()
    }

    // ── Implementation ───────────────────────────────────────────────────

    fn try_list(&self, query: &ObjectGroupQuery) -> Result<ObjectGroupCollection, EdanError> {
        let response = self.client.call(
            endpoints::get_object_groups(query.admin_view),
            &query.to_params(),
            CallMethod::Get,
            "Unable to retrieve object groups from EDAN.",
        )?;

        let wire: ObjectGroupsResponse = response.parse("object groups")?;
        let mut collection = ObjectGroupCollection::for_query(query);
        collection.apply(wire, query.with_children);
        tracing::debug!(count = collection.len(), total = ?collection.total, "Loaded object groups");
        Ok(collection)
    }

    fn try_load(
        &self,
        group: &mut ObjectGroup,
        params: &Params,
        admin_view: bool,
    ) -> Result<(), EdanError> {
        let response = self.client.call(
            endpoints::get_object_group(admin_view),
            params,
            CallMethod::Get,
            "Could not load object group.",
        )?;

        let wire: ObjectGroupResponse = response.parse("object group")?;
        group.apply(wire, true);
        Ok(())
    }

    fn try_save(&self, group: &mut ObjectGroup) -> Result<(), EdanError> {
        let mut params = Params::new();
        let endpoint = match &group.object_group_id {
            Some(id) => {
                params.insert("objectGroupId", id);
                endpoints::EDIT_OBJECT_GROUP
            }
            None => endpoints::CREATE_OBJECT_GROUP,
        };

        params
            .insert("title", &group.title)
            .insert("listTitle", &group.list_title)
            .insert("url", &group.uri)
            .insert("description", &group.body)
            .insert("keywords", &group.keywords)
            .insert("groupType", group.group_type.unwrap_or(-1))
            .insert("published", group.publication().as_wire())
            .insert("featured", i64::from(group.featured));
        if !group.image_uri.is_empty() {
            params.insert("feature", json!({"type": "image", "url": group.image_uri}));
        }

        let response = self
            .client
            .call(endpoint, &params, CallMethod::Post, "No object retrieved from EDAN.")?;
        require_key(
            &response,
            "objectGroupId",
            "Unable to save Object Group. No ObjectGroupId found in response.",
        )?;

        let saved: SaveGroupResponse = response.parse("saved object group")?;
        group.object_group_id = saved.object_group_id;
        group.uri = saved.url.unwrap_or_default();
        tracing::debug!(object_group_id = ?group.object_group_id, "Saved object group");
        Ok(())
    }

    fn try_mark_for_deletion(&self, group: &mut ObjectGroup) -> Result<(), EdanError> {
        let id = require_group(group, "Cannot delete Object Group. Object Group ID not set.")?;
        let params = Params::new().with("objectGroupId", id);

        let response = self.client.call(
            endpoints::RELEASE_OBJECT_GROUP,
            &params,
            CallMethod::Get,
            "Could not delete object group.",
        )?;

        if !response.has_key("objectGroupId") && !response.has_key("objectsReleased") {
            return Err(EdanError::MalformedResponse(
                "The API call may have successfully executed but the API did not report the objectGroupId."
                    .to_string(),
            ));
        }
        let released: ReleaseGroupResponse = response.parse("released object group")?;
        if let Some(returned) = released.object_group_id.filter(|r| r != id) {
            return Err(EdanError::MalformedResponse(format!(
                "The API call may have successfully executed but the API returned an objectGroupId which is different from the parameter: {}.",
                returned
            )));
        }
        if let Some(count) = released.objects_released.filter(|c| *c < 1) {
            return Err(EdanError::MalformedResponse(format!(
                "The API call may have successfully executed but the API indicated that no objects were released: {}.",
                count
            )));
        }

        group.set_publication(PublicationState::Deleted);
        Ok(())
    }

    fn try_set_default_page(&self, group: &mut ObjectGroup, page_id: &PageId) -> Result<(), EdanError> {
        let id = require_group(group, "Can't set default page, objectGroupId not set.")?;
        let params = Params::new()
            .with("objectGroupId", id)
            .with("pageId", page_id);

        let response = self.client.call(
            endpoints::SET_DEFAULT_PAGE,
            &params,
            CallMethod::Get,
            "No object retrieved from EDAN.",
        )?;
        if let Some(missing) = missing_params(&response) {
            return Err(EdanError::Remote(format!(
                "Could not set default page. {}",
                missing
            )));
        }

        group.default_page_id = Some(page_id.clone());
        Ok(())
    }

    fn try_set_menu(&self, group: &mut ObjectGroup, page_ids: Option<&[PageId]>) -> Result<(), EdanError> {
        let id = require_group(group, "Can't set menu, objectGroupId not set.")?;
        let order = group.menu_order(page_ids);
        if order.is_empty() {
            return Err(EdanError::MissingState(
                "Object group has no pages. Cannot set menu.".to_string(),
            ));
        }

        let page_array = serde_json::to_string(&order)
            .map_err(|e| EdanError::InvalidInput(format!("Could not encode page order: {}", e)))?;
        let params = Params::new()
            .with("objectGroupId", id)
            .with("pageArray", page_array);

        let response = self.client.call(
            endpoints::SET_MENU,
            &params,
            CallMethod::Get,
            "No object retrieved from EDAN.",
        )?;
        require_key(
            &response,
            "message",
            "Could not set menu- confirmation message not received.",
        )?;

        group.reorder_pages(&order);
        Ok(())
    }

    fn try_save_page(&self, group: &mut ObjectGroup, mut page: ObjectGroupPage) -> Result<PageId, EdanError> {
        let is_new = page.is_new();
        page.object_group_id = group.object_group_id.clone();
        self.client.pages().try_save(&mut page)?;

        let page_id = page.page_id.clone().ok_or_else(|| {
            EdanError::MalformedResponse("The API did not return a pageId.".to_string())
        })?;
        let existing = group
            .pages
            .iter()
            .position(|p| p.page_id.as_ref() == Some(&page_id));
        match existing {
            Some(pos) if !is_new => group.pages[pos] = page,
            _ => group.pages.push(page),
        }
        Ok(page_id)
    }

    fn try_delete_page(&self, group: &mut ObjectGroup, page_id: &PageId) -> Result<(), EdanError> {
        let id = require_group(group, "Cannot delete Object Group Page. Object Group ID not set.")?;
        let params = Params::new()
            .with("objectGroupId", id)
            .with("pageId", page_id);

        let response = self.client.call(
            endpoints::RELEASE_PAGE,
            &params,
            CallMethod::Get,
            "Page could not be deleted from EDAN.",
        )?;
        if let Some(missing) = missing_params(&response) {
            return Err(EdanError::Remote(format!(
                "Could not delete page using releasePage. {}",
                missing
            )));
        }
        if response.has_key("releaseError") {
            return Err(EdanError::Remote(
                "Some parameters are missing when calling releasePage.".to_string(),
            ));
        }

        group.pages.retain(|p| p.page_id.as_ref() != Some(page_id));
        Ok(())
    }

    fn try_request_upload_token(&self) -> Result<String, EdanError> {
        let response = self.client.call(
            endpoints::UPLOAD_TOKEN_REQUEST,
            &Params::new(),
            CallMethod::Get,
            "No token retrieved from EDAN.",
        )?;
        let token: UploadTokenResponse = response.parse("upload token")?;
        token.token_id.ok_or_else(|| {
            EdanError::MalformedResponse(
                "Unable to get token. No tokenId found in response.".to_string(),
            )
        })
    }
}

fn require_group<'g>(group: &'g ObjectGroup, message: &str) -> Result<&'g ObjectGroupId, EdanError> {
    group
        .object_group_id
        .as_ref()
        .ok_or_else(|| EdanError::MissingState(message.to_string()))
}

fn missing_params(response: &EdanResponse) -> Option<String> {
    response.get("MissingParams").map(serde_util::error_message)
}
