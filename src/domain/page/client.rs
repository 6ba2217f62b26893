//! Pages sub-client — load and save.

use serde_json::json;

use crate::client::{require_key, Ogmt};
use crate::connection::CallMethod;
use crate::error::EdanError;
use crate::network::endpoints;
use crate::shared::{ObjectGroupId, Outcome, PageId, Params};

use super::wire::{PageEnvelope, SavePageResponse};
use super::ObjectGroupPage;

pub struct Pages<'a> {
    pub(crate) client: &'a Ogmt<'a>,
}

impl<'a> Pages<'a> {
    /// Fetch one page with its object list.
    pub fn load(&self, object_group_id: &ObjectGroupId, page_id: &PageId) -> Outcome<ObjectGroupPage> {
        let mut page = ObjectGroupPage::stub(object_group_id.clone(), page_id.clone());
        self.try_fetch(&mut page).map(|()| page).into()
    }

    /// Populate a page that only carries its identity, e.g. one taken from
    /// a group menu.
    pub fn fetch(&self, page: &mut ObjectGroupPage) -> Outcome<()> {
        self.try_fetch(page).into()
    }

    /// `createPage.htm` for a new page, `editPage.htm` otherwise. The
    /// assigned `page_id` and `uri` are written back.
    pub fn save(&self, page: &mut ObjectGroupPage) -> Outcome<()> {
        self.try_save(page).into()
    }

    // ── Implementation ───────────────────────────────────────────────────

    fn try_fetch(&self, page: &mut ObjectGroupPage) -> Result<(), EdanError> {
        let (Some(group_id), Some(page_id)) = (&page.object_group_id, &page.page_id) else {
            return Err(EdanError::MissingState(
                "Object Group Id and Page Id are required. Could not load object group page."
                    .to_string(),
            ));
        };
        let params = Params::new()
            .with("objectGroupId", group_id)
            .with("pageId", page_id);

        let response = self.client.call(
            endpoints::ADMIN_GET_OBJECT_GROUP,
            &params,
            CallMethod::Get,
            "Could not load object group page.",
        )?;
        require_key(&response, "page", "JSON is null or no page data found.")?;

        let envelope: PageEnvelope = response.parse("page")?;
        page.apply(envelope);
        Ok(())
    }

    pub(crate) fn try_save(&self, page: &mut ObjectGroupPage) -> Result<(), EdanError> {
        let group_id = page.object_group_id.as_ref().ok_or_else(|| {
            EdanError::MissingState("Object Group Id not set. Could not save page.".to_string())
        })?;

        let settings = json!({
            "disableObjects": i64::from(page.settings.disable_object_listing)
        });
        let mut params = Params::new()
            .with("objectGroupId", group_id)
            .with("title", &page.title)
            .with("listTitle", &page.list_title)
            .with("url", &page.uri)
            .with("content", &page.content)
            .with("settings", settings);

        let endpoint = match &page.page_id {
            Some(page_id) => {
                params.insert("pageId", page_id);
                endpoints::EDIT_PAGE
            }
            None => endpoints::CREATE_PAGE,
        };

        let response = self
            .client
            .call(endpoint, &params, CallMethod::Post, "Could not save page.")?;
        require_key(
            &response,
            "pageId",
            "The API call was successfully executed but the API did not return a pageId.",
        )?;

        let saved: SavePageResponse = response.parse("saved page")?;
        page.page_id = saved.page_id;
        page.uri = saved.url.unwrap_or_default();
        tracing::debug!(page_id = ?page.page_id, "Saved object group page");
        Ok(())
    }
}
