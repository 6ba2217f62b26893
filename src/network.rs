//! Network constants for the EDAN service.

use chrono_tz::Tz;

/// Default EDAN server base URL.
pub const DEFAULT_EDAN_SERVER: &str = "http://edan.si.edu/";

/// Value sent in `X-AppVersion`.
pub const DEFAULT_APP_VERSION: &str = "EDANInterface-0.10.1";

/// Timezone in which `X-RequestDate` is rendered.
pub const REFERENCE_TIMEZONE: Tz = chrono_tz::America::New_York;

/// Service paths. These are fixed by the remote service.
pub mod endpoints {
    pub const ADMIN_GET_OBJECT_GROUPS: &str = "ogmt/v1.0/adminogmt/getObjectGroups.htm";
    pub const PUBLIC_GET_OBJECT_GROUPS: &str = "ogmt/v1.0/ogmt/getObjectGroups.htm";
    pub const ADMIN_GET_OBJECT_GROUP: &str = "ogmt/v1.0/adminogmt/getObjectGroup.htm";
    pub const PUBLIC_GET_OBJECT_GROUP: &str = "ogmt/v1.0/ogmt/getObjectGroup.htm";
    pub const CREATE_OBJECT_GROUP: &str = "ogmt/v1.0/adminogmt/createObjectGroup.htm";
    pub const EDIT_OBJECT_GROUP: &str = "ogmt/v1.0/adminogmt/editObjectGroup.htm";
    pub const RELEASE_OBJECT_GROUP: &str = "ogmt/v1.0/adminogmt/releaseObjectGroup.htm";
    pub const SET_DEFAULT_PAGE: &str = "ogmt/v1.0/adminogmt/setDefaultPage.htm";
    pub const SET_MENU: &str = "ogmt/v1.0/adminogmt/setMenu.htm";
    pub const CREATE_PAGE: &str = "ogmt/v1.0/adminogmt/createPage.htm";
    pub const EDIT_PAGE: &str = "ogmt/v1.0/adminogmt/editPage.htm";
    pub const RELEASE_PAGE: &str = "ogmt/v1.0/adminogmt/releasePage.htm";
    pub const EDIT_OBJECT_LISTING: &str = "ogmt/v1.0/adminogmt/editObjectListing.htm";
    pub const GET_OBJECT_LISTING_METADATA: &str =
        "ogmt/v1.0/adminogmt/getObjectListingMetadata.htm";
    pub const UPLOAD_TOKEN_REQUEST: &str = "content/v1.0/fileupload/tokenRequest.htm";

    pub(crate) fn get_object_groups(admin_view: bool) -> &'static str {
        if admin_view {
            ADMIN_GET_OBJECT_GROUPS
        } else {
            PUBLIC_GET_OBJECT_GROUPS
        }
    }

    pub(crate) fn get_object_group(admin_view: bool) -> &'static str {
        if admin_view {
            ADMIN_GET_OBJECT_GROUP
        } else {
            PUBLIC_GET_OBJECT_GROUP
        }
    }
}
