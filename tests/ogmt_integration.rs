//! Integration tests driving `Ogmt` through a recording connection.
//!
//! The connection replays canned JSON bodies in order and records every
//! call, so each test checks both the requests sent and the resulting
//! local state.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::{json, Value};

use edan_ogmt::auth::{FixedClock, FixedNonce, RequestSigner, Tier};
use edan_ogmt::network::endpoints;
use edan_ogmt::prelude::*;

#[derive(Debug, Clone)]
struct RecordedCall {
    endpoint: String,
    params: Params,
    method: CallMethod,
}

/// Replays scripted replies and records calls.
#[derive(Default)]
struct RecordingConnection {
    replies: RefCell<VecDeque<Result<Value, Vec<String>>>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl RecordingConnection {
    fn new() -> Self {
        Self::default()
    }

    fn reply(self, body: Value) -> Self {
        self.replies.borrow_mut().push_back(Ok(body));
        self
    }

    fn fail(self, errors: &[&str]) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(errors.iter().map(|e| e.to_string()).collect()));
        self
    }

    fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

impl EdanConnection for RecordingConnection {
    fn call(
        &self,
        endpoint: &str,
        params: &Params,
        method: CallMethod,
    ) -> Result<EdanResponse, TransportError> {
        self.calls.borrow_mut().push(RecordedCall {
            endpoint: endpoint.to_string(),
            params: params.clone(),
            method,
        });
        match self.replies.borrow_mut().pop_front() {
            Some(Ok(body)) => Ok(EdanResponse::from_json(body)),
            Some(Err(errors)) => Err(TransportError { errors }),
            None => Err(TransportError::new("unexpected call")),
        }
    }

    fn app_id(&self) -> &str {
        "OGMT_TEST"
    }
}

// ── Object groups ────────────────────────────────────────────────────────────

#[test]
fn test_group_lifecycle() {
    let conn = RecordingConnection::new()
        .reply(json!({"objectGroupId": "og-1", "url": "whales"}))
        .reply(json!({"pageId": "p-1", "url": "intro"}))
        .reply(json!({"pageId": "p-2", "url": "gallery"}))
        .reply(json!({"message": "Menu saved"}))
        .reply(json!({"objectGroupId": "og-1", "objectsReleased": 1}));
    let ogmt = Ogmt::new(&conn);
    let groups = ogmt.object_groups();

    let mut group = ObjectGroup::new("Whales");
    group.body = "All about whales".into();
    group.set_published(false);
    assert!(groups.save(&mut group).success);
    assert_eq!(group.object_group_id, Some(ObjectGroupId::from("og-1")));
    assert_eq!(group.uri, "whales");

    assert!(groups.save_page(&mut group, ObjectGroupPage::new("Intro")).success);
    assert!(groups.save_page(&mut group, ObjectGroupPage::new("Gallery")).success);
    assert_eq!(groups.menu(&group), [PageId::from("p-1"), PageId::from("p-2")]);

    let order = [PageId::from("p-2")];
    assert!(groups.set_menu(&mut group, Some(&order)).success);
    assert_eq!(groups.menu(&group), [PageId::from("p-2"), PageId::from("p-1")]);

    assert!(groups.mark_for_deletion(&mut group).success);
    assert!(group.is_deleted());
    assert!(!group.is_published());

    let calls = conn.calls();
    assert_eq!(calls.len(), 5);
    assert_eq!(calls[0].endpoint, endpoints::CREATE_OBJECT_GROUP);
    assert_eq!(calls[0].method, CallMethod::Post);
    assert_eq!(calls[0].params.get("description"), Some("All about whales"));
    assert_eq!(calls[0].params.get("published"), Some("1"));
    assert_eq!(calls[1].endpoint, endpoints::CREATE_PAGE);
    assert_eq!(calls[1].params.get("objectGroupId"), Some("og-1"));
    assert_eq!(calls[3].params.get("pageArray"), Some(r#"["p-2","p-1"]"#));
    assert_eq!(calls[4].endpoint, endpoints::RELEASE_OBJECT_GROUP);
}

#[test]
fn test_load_group_with_children() {
    let conn = RecordingConnection::new().reply(json!({
        "objectGroupId": "og-9",
        "title": "Birds",
        "published": 1,
        "featured": "1",
        "feature": {"type": "image", "url": "https://ids.example/bird.jpg"},
        "objects": {
            "size": 2,
            "items": ["bird+song", "unit_code:NMNH"]
        },
        "menu": [{"id": "dpt-1", "url": "a", "title": "A"}]
    }));
    let ogmt = Ogmt::new(&conn);

    let group = ogmt
        .object_groups()
        .load(&ObjectGroupId::from("og-9"), false)
        .into_data()
        .unwrap();

    assert_eq!(conn.calls()[0].endpoint, endpoints::PUBLIC_GET_OBJECT_GROUP);
    assert!(!group.is_published());
    assert!(!group.is_deleted());
    assert!(group.featured);
    assert_eq!(group.image_uri, "https://ids.example/bird.jpg");

    let list = group.object_list.as_ref().unwrap();
    assert_eq!(list.list_type, ListType::SavedSearch);
    assert!(list.items().is_empty());
    assert_eq!(list.query_terms(), Some("bird song"));
    assert_eq!(list.query_facets(), ["unit_code:NMNH"]);

    assert_eq!(group.pages.len(), 1);
    assert!(group.pages[0].title.is_empty());
}

#[test]
fn test_list_groups_with_deleted_filter() {
    let conn = RecordingConnection::new().reply(json!({
        "total": 2,
        "rows": 2,
        "objectGroups": [
            {"objectGroupId": "b", "published": -1},
            {"objectGroupId": "a", "published": -1}
        ]
    }));
    let ogmt = Ogmt::new(&conn);
    let query = ObjectGroupQuery::new().page(1, 2).published(true).deleted(true);

    let collection = ogmt.object_groups().list(&query).into_data().unwrap();
    assert_eq!(collection.total, Some(2));
    assert!(collection.iter().all(ObjectGroup::is_deleted));
    let ids: Vec<_> = collection
        .iter()
        .filter_map(|g| g.object_group_id.as_ref().map(|id| id.as_str()))
        .collect();
    assert_eq!(ids, ["b", "a"]);

    let call = &conn.calls()[0];
    assert_eq!(call.endpoint, endpoints::ADMIN_GET_OBJECT_GROUPS);
    assert_eq!(call.params.get("published"), Some("-1"));
    assert_eq!(call.params.get("start"), Some("1"));
}

#[test]
fn test_transport_failure_surfaces_collaborator_errors_first() {
    let conn = RecordingConnection::new().fail(&["HTTP 500", "body: oops"]);
    let ogmt = Ogmt::new(&conn);
    let outcome = ogmt
        .object_groups()
        .load(&ObjectGroupId::from("og-1"), true);
    assert!(!outcome.success);
    assert!(outcome.data.is_none());
    assert_eq!(
        outcome.errors,
        ["HTTP 500", "body: oops", "Could not load object group."]
    );
}

#[test]
fn test_remote_error_is_verbatim() {
    let conn = RecordingConnection::new().reply(json!({"error": "Invalid objectGroupId"}));
    let ogmt = Ogmt::new(&conn);
    let outcome = ogmt
        .object_groups()
        .load(&ObjectGroupId::from("nope"), true);
    assert_eq!(outcome.errors, ["Invalid objectGroupId"]);
}

#[test]
fn test_preconditions_make_no_call() {
    let conn = RecordingConnection::new();
    let ogmt = Ogmt::new(&conn);
    let mut unsaved = ObjectGroup::new("unsaved");

    assert!(!ogmt.object_groups().mark_for_deletion(&mut unsaved).success);
    assert!(!ogmt
        .object_groups()
        .set_default_page(&mut unsaved, &PageId::from("p"))
        .success);
    assert!(!ogmt.object_groups().set_menu(&mut unsaved, None).success);
    assert!(!ogmt.object_lists().load(&mut ObjectList::default()).success);
    assert!(conn.calls().is_empty());
}

// ── Pages ────────────────────────────────────────────────────────────────────

#[test]
fn test_fetch_menu_page() {
    let conn = RecordingConnection::new()
        .reply(json!({"objectGroupId": "og-1", "menu": [{"id": "dpt-1"}]}))
        .reply(json!({
            "page": {"pageId": "dpt-1", "title": "Intro", "content": "<p>hi</p>",
                     "settings": {"disableObjects": 0}},
            "objects": {"listType": 0, "size": 1, "items": [
                {"content": {"descriptiveNonRepeating": {"record_ID": "nmnh_42"}},
                 "url": "edanmdm:nmnh_42", "type": "edanmdm"}
            ]}
        }));
    let ogmt = Ogmt::new(&conn);

    let mut group = ogmt
        .object_groups()
        .load(&ObjectGroupId::from("og-1"), true)
        .into_data()
        .unwrap();
    let page = &mut group.pages[0];
    assert!(page.title.is_empty());

    assert!(ogmt.pages().fetch(page).success);
    assert_eq!(page.title, "Intro");
    assert!(!page.settings.disable_object_listing);
    let list = page.object_list.as_ref().unwrap();
    assert_eq!(list.items(), ["nmnh_42"]);
    assert_eq!(list.page_id, Some(PageId::from("dpt-1")));

    let call = &conn.calls()[1];
    assert_eq!(call.params.get("objectGroupId"), Some("og-1"));
    assert_eq!(call.params.get("pageId"), Some("dpt-1"));
}

// ── Object lists ─────────────────────────────────────────────────────────────

#[test]
fn test_object_list_save_search_flow() {
    let conn = RecordingConnection::new()
        // clear
        .reply(json!({"ok": 1}))
        // reload after clear
        .reply(json!({"lists": {"listType": 0, "size": 0, "items": []}}))
        // modifyType -> 1
        .reply(json!({"ok": 1}))
        // add
        .reply(json!({"lists": {"listType": 1, "size": 2, "items": ["blue+whale", "unit_code:NMNH"]}}));
    let ogmt = Ogmt::new(&conn);
    let mut list = ObjectList::new(Some(ObjectGroupId::from("og-1")), None);

    let outcome = ogmt.object_lists().save_search(
        &mut list,
        Some("blue whale".into()),
        Some(vec!["unit_code:NMNH".into()]),
    );
    assert!(outcome.success, "{:?}", outcome.errors);
    assert_eq!(list.list_type, ListType::SavedSearch);
    assert_eq!(list.query_terms(), Some("blue whale"));
    assert!(list.items().is_empty());

    let calls = conn.calls();
    let actions: Vec<_> = calls
        .iter()
        .map(|c| c.params.get("action").unwrap_or("-").to_string())
        .collect();
    assert_eq!(actions, ["clear", "-", "modifyType", "add"]);
    assert_eq!(
        calls[3].params.get("items"),
        Some(r#"["blue+whale","unit_code:NMNH"]"#)
    );
    assert!(!calls[3].params.contains_key("pageId"));
}

#[test]
fn test_object_list_load_prefers_lists_key() {
    let conn = RecordingConnection::new().reply(json!({
        "lists": {"listName": "Highlights", "listType": 0, "size": 2, "items": ["r1", "r2"]},
        "listName": "ignored"
    }));
    let ogmt = Ogmt::new(&conn);
    let mut list = ObjectList::new(Some(ObjectGroupId::from("og-1")), Some(PageId::from("p")));
    assert!(ogmt.object_lists().load(&mut list).success);
    assert_eq!(list.list_name, "Highlights");
    assert_eq!(list.items(), ["r1", "r2"]);
    assert_eq!(conn.calls()[0].endpoint, endpoints::GET_OBJECT_LISTING_METADATA);
}

// ── Signing ──────────────────────────────────────────────────────────────────

#[test]
fn test_signed_headers_are_reproducible() {
    use chrono::{TimeZone, Utc};

    let signer = || {
        RequestSigner::new("APP", "secret", Tier::Signed)
            .clock(FixedClock(Utc.with_ymd_and_hms(2016, 7, 4, 16, 0, 0).unwrap()))
            .nonce_source(FixedNonce("abc123def456ghi".into()))
    };
    let first = signer().sign("objectGroupId=og-1").unwrap();
    let second = signer().sign("objectGroupId=og-1").unwrap();
    assert_eq!(first, second);

    let names: Vec<_> = first.iter().map(|(n, _)| *n).collect();
    assert_eq!(
        names,
        ["X-AppId", "X-RequestDate", "X-AppVersion", "X-Nonce", "X-AuthContent"]
    );
    assert_eq!(first[1].1, "2016-07-04 12:00:00");

    let unsigned = RequestSigner::new("APP", "", Tier::Unsigned)
        .sign("q=1")
        .unwrap();
    assert_eq!(unsigned.len(), 3);
}
