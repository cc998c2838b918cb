//! Permission Gate
//!
//! Capability tokens have the form `<resource>.<action>`. A missing token
//! means the affordance is not rendered at all.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::AuthUser;

/// Set of capability tokens granted through the user's role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<String>);

impl PermissionSet {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    pub fn has(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Authenticated session: created at login, dropped at logout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: AuthUser,
}

impl Session {
    pub fn permissions(&self) -> PermissionSet {
        match &self.user.role {
            Some(role) => PermissionSet::new(role.permissions.iter().cloned()),
            None => PermissionSet::default(),
        }
    }

    pub fn has_permission(&self, token: &str) -> bool {
        self.user
            .role
            .as_ref()
            .is_some_and(|role| role.permissions.iter().any(|p| p == token))
    }

    pub fn role_name(&self) -> &str {
        self.user.role.as_ref().map(|r| r.name.as_str()).unwrap_or("")
    }
}

/// Mutating affordances for one resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceGate {
    pub create: bool,
    pub update: bool,
    pub delete: bool,
}

impl ResourceGate {
    pub fn new(permissions: &PermissionSet, resource: &str) -> Self {
        Self {
            create: permissions.has(&format!("{}.create", resource)),
            update: permissions.has(&format!("{}.update", resource)),
            delete: permissions.has(&format!("{}.delete", resource)),
        }
    }

    /// The whole "İşlemler" column is omitted when nothing in it could render
    pub fn shows_actions_column(&self) -> bool {
        self.update || self.delete
    }
}

// ========================
// Catalog
// ========================

/// Grantable token with its label in the role editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionDef {
    pub value: &'static str,
    pub label: &'static str,
}

const fn def(value: &'static str, label: &'static str) -> PermissionDef {
    PermissionDef { value, label }
}

pub const PERMISSION_CATALOG: &[PermissionDef] = &[
    def("users.view", "Kullanıcıları Görüntüle"),
    def("users.create", "Kullanıcı Oluştur"),
    def("users.update", "Kullanıcı Güncelle"),
    def("users.delete", "Kullanıcı Sil"),
    def("roles.view", "Rolleri Görüntüle"),
    def("roles.create", "Rol Oluştur"),
    def("roles.update", "Rol Güncelle"),
    def("roles.delete", "Rol Sil"),
    def("customers.view", "Müşterileri Görüntüle"),
    def("customers.create", "Müşteri Oluştur"),
    def("customers.update", "Müşteri Güncelle"),
    def("customers.delete", "Müşteri Sil"),
    def("leads.view", "Potansiyel Müşterileri Görüntüle"),
    def("leads.create", "Potansiyel Müşteri Oluştur"),
    def("leads.update", "Potansiyel Müşteri Güncelle"),
    def("leads.delete", "Potansiyel Müşteri Sil"),
    def("logs.view", "Logları Görüntüle"),
];

/// Label for a token, the token itself when unknown
pub fn permission_label(token: &str) -> &str {
    PERMISSION_CATALOG
        .iter()
        .find(|p| p.value == token)
        .map(|p| p.label)
        .unwrap_or(token)
}

// ========================
// Navigation
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub permission: Option<&'static str>,
}

const fn nav(name: &'static str, href: &'static str, permission: Option<&'static str>) -> NavItem {
    NavItem { name, href, permission }
}

pub const NAVIGATION: &[NavItem] = &[
    nav("Dashboard", "/dashboard", None),
    nav("Müşteriler", "/dashboard/customers", Some("customers.view")),
    nav("Potansiyel Müşteriler", "/dashboard/leads", Some("leads.view")),
    nav("Arşiv", "/dashboard/leads/archived", Some("leads.view")),
    nav("Danışman Performansı", "/dashboard/performance", Some("users.view")),
    nav("Çalışanlar", "/dashboard/users", Some("users.view")),
    nav("Roller ve Yetkiler", "/dashboard/roles", Some("roles.view")),
    nav("Aktivite Logları", "/dashboard/logs", Some("logs.view")),
    nav("Google Import", "/dashboard/google-import", Some("leads.create")),
    nav("Blog Yönetimi", "/dashboard/blog", None),
    nav("Sistem Ayarları", "/dashboard/settings", None),
];

/// Sidebar entries the user may see
pub fn visible_nav(permissions: &PermissionSet) -> Vec<NavItem> {
    NAVIGATION
        .iter()
        .filter(|item| item.permission.map_or(true, |p| permissions.has(p)))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoleSummary;

    fn session(tokens: &[&str]) -> Session {
        Session {
            token: "t".into(),
            user: AuthUser {
                id: 1,
                first_name: "Hasan".into(),
                last_name: "Yılmaz".into(),
                email: "hasan@han.com".into(),
                role: Some(RoleSummary {
                    id: Some(2),
                    name: "Danışman".into(),
                    permissions: tokens.iter().map(|t| t.to_string()).collect(),
                }),
            },
        }
    }

    #[test]
    fn test_view_only_hides_actions_column() {
        let perms = session(&["leads.view"]).permissions();
        let gate = ResourceGate::new(&perms, "leads");
        assert!(!gate.create);
        assert!(!gate.shows_actions_column());
    }

    #[test]
    fn test_delete_alone_shows_actions_column() {
        let perms = PermissionSet::new(["customers.delete"]);
        let gate = ResourceGate::new(&perms, "customers");
        assert!(gate.shows_actions_column());
        assert!(!gate.update);
        assert!(!ResourceGate::new(&perms, "leads").shows_actions_column());
    }

    #[test]
    fn test_session_without_role_has_nothing() {
        let mut s = session(&[]);
        s.user.role = None;
        assert!(!s.has_permission("leads.view"));
        assert!(s.permissions().is_empty());
        assert_eq!(s.role_name(), "");
    }

    #[test]
    fn test_visible_nav_filters_by_permission() {
        let perms = session(&["leads.view", "logs.view"]).permissions();
        let names: Vec<&str> = visible_nav(&perms).iter().map(|n| n.name).collect();
        assert!(names.contains(&"Dashboard"));
        assert!(names.contains(&"Arşiv"));
        assert!(names.contains(&"Aktivite Logları"));
        assert!(!names.contains(&"Müşteriler"));
        assert!(!names.contains(&"Google Import"));
    }

    #[test]
    fn test_catalog_labels() {
        assert_eq!(PERMISSION_CATALOG.len(), 17);
        assert_eq!(permission_label("roles.delete"), "Rol Sil");
        assert_eq!(permission_label("blog.view"), "blog.view");
    }
}
