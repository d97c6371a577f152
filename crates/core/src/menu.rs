//! Admin sidebar navigation and role-based filtering.

use serde::Serialize;

use crate::roles::{role_matches, Role};

/// A static navigation item tagged with the roles allowed to see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub title: &'static str,
    pub path: &'static str,
    #[serde(rename = "roles")]
    pub required_roles: &'static [Role],
}

impl MenuEntry {
    pub fn is_visible_to(&self, role: Option<Role>) -> bool {
        role_matches(role, self.required_roles)
    }
}

const ALL_ADMINS: &[Role] = &[Role::SuperAdmin, Role::Receptionist, Role::RestaurantAdmin];
const FRONT_DESK: &[Role] = &[Role::SuperAdmin, Role::Receptionist];
const RESTAURANT: &[Role] = &[Role::SuperAdmin, Role::RestaurantAdmin];
const OWNER_ONLY: &[Role] = &[Role::SuperAdmin];

/// The back-office sidebar, in display order.
pub const ADMIN_MENU: &[MenuEntry] = &[
    MenuEntry {
        title: "Dashboard",
        path: "/admin",
        required_roles: ALL_ADMINS,
    },
    MenuEntry {
        title: "Rooms",
        path: "/admin/rooms",
        required_roles: FRONT_DESK,
    },
    MenuEntry {
        title: "Bookings",
        path: "/admin/bookings",
        required_roles: FRONT_DESK,
    },
    MenuEntry {
        title: "Guests",
        path: "/admin/guests",
        required_roles: FRONT_DESK,
    },
    MenuEntry {
        title: "Staff",
        path: "/admin/staff",
        required_roles: FRONT_DESK,
    },
    MenuEntry {
        title: "Attendance",
        path: "/admin/attendance",
        required_roles: FRONT_DESK,
    },
    MenuEntry {
        title: "User Management",
        path: "/admin/users",
        required_roles: OWNER_ONLY,
    },
    MenuEntry {
        title: "Menu",
        path: "/admin/menu",
        required_roles: RESTAURANT,
    },
    MenuEntry {
        title: "Orders",
        path: "/admin/orders",
        required_roles: RESTAURANT,
    },
    MenuEntry {
        title: "Inventory",
        path: "/admin/inventory",
        required_roles: RESTAURANT,
    },
    MenuEntry {
        title: "QR Codes",
        path: "/admin/qr-codes",
        required_roles: RESTAURANT,
    },
    MenuEntry {
        title: "Invoices",
        path: "/admin/invoices",
        required_roles: ALL_ADMINS,
    },
];

/// Entries of `menu` the given role may see, in menu order.
///
/// Recomputed on every call; with no session the result is empty.
pub fn visible_entries(menu: &[MenuEntry], role: Option<Role>) -> Vec<&MenuEntry> {
    menu.iter().filter(|entry| entry.is_visible_to(role)).collect()
}

/// Look up an entry by path, ignoring a trailing slash.
pub fn find_entry<'a>(menu: &'a [MenuEntry], path: &str) -> Option<&'a MenuEntry> {
    let path = normalize_path(path);
    menu.iter().find(|entry| entry.path == path)
}

/// Strip trailing slashes, keeping `/` itself.
pub(crate) fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}
