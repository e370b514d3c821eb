use serde::{Deserialize, Serialize};

pub mod error;
pub mod list;
pub mod resource;
pub mod store;
pub mod validation;

pub use error::{ApiError, ApiResult};
pub use list::{Generation, ListAction, ListState, ListStatus, RequestTracker};
pub use resource::{Contacts, FieldKind, FieldSpec, Organizations, Resource, ResourceKind};
pub use store::Revisions;
pub use validation::{FieldErrors, FormValues, Validator};

// ============================================
// ORGANIZATIONS
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Body of `POST /organizations/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrganization {
    pub name: String,
    pub address: String,
}

/// Body of `PUT /organizations/{id}`. Absent fields keep their server-side value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl OrganizationPatch {
    /// Only the fields of `desired` that differ from `current`.
    pub fn between(current: &Organization, desired: NewOrganization) -> Self {
        Self {
            name: changed(&current.name, desired.name),
            address: changed(&current.address, desired.address),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none()
    }
}

// ============================================
// CONTACTS
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub organization: Option<Organization>,
    pub created_at: String,
    pub updated_at: String,
}

impl Contact {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body of `POST /contacts/`. A missing organization is omitted, never sent as `null` or `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
}

/// Body of `PUT /contacts/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
}

impl ContactPatch {
    /// Only the fields of `desired` that differ from `current`.
    ///
    /// An unselected organization is left out rather than cleared, so the
    /// server keeps whatever link the contact already has.
    pub fn between(current: &Contact, desired: NewContact) -> Self {
        Self {
            first_name: changed(&current.first_name, desired.first_name),
            last_name: changed(&current.last_name, desired.last_name),
            email: changed(&current.email, desired.email),
            phone: changed(&current.phone, desired.phone),
            organization_id: desired
                .organization_id
                .filter(|id| current.organization_id != Some(*id)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.organization_id.is_none()
    }
}

/// Query of `GET /contacts/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    pub search: Option<String>,
    pub organization_id: Option<i64>,
}

impl ContactFilter {
    pub fn new(search: Option<&str>, organization_id: Option<i64>) -> Self {
        Self {
            search: search.map(str::to_string),
            organization_id,
        }
    }

    /// Query parameters, present only for filters that are actually set.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        if let Some(id) = self.organization_id.filter(|id| *id > 0) {
            pairs.push(("organization_id", id.to_string()));
        }
        pairs
    }
}

fn changed(current: &str, desired: String) -> Option<String> {
    (current != desired).then_some(desired)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> Organization {
        Organization {
            id: 1,
            name: "Acme".to_string(),
            address: "1 Main St".to_string(),
            created_at: "2024-01-01T00:00:00".to_string(),
            updated_at: "2024-01-01T00:00:00".to_string(),
        }
    }

    fn jane() -> Contact {
        Contact {
            id: 7,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1 (555) 010-0000".to_string(),
            organization_id: Some(1),
            organization: Some(acme()),
            created_at: "2024-01-02T00:00:00".to_string(),
            updated_at: "2024-01-02T00:00:00".to_string(),
        }
    }

    #[test]
    fn test_organization_patch_only_changed_fields() {
        let patch = OrganizationPatch::between(
            &acme(),
            NewOrganization {
                name: "Acme".to_string(),
                address: "2 Side St".to_string(),
            },
        );
        assert_eq!(patch.name, None);
        assert_eq!(patch.address.as_deref(), Some("2 Side St"));
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({ "address": "2 Side St" })
        );
    }

    #[test]
    fn test_unchanged_patch_is_empty() {
        let contact = jane();
        let patch = ContactPatch::between(
            &contact,
            NewContact {
                first_name: contact.first_name.clone(),
                last_name: contact.last_name.clone(),
                email: contact.email.clone(),
                phone: contact.phone.clone(),
                organization_id: None,
            },
        );
        assert!(patch.is_empty());
        assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
    }

    #[test]
    fn test_contact_patch_moves_organization() {
        let patch = ContactPatch::between(
            &jane(),
            NewContact {
                first_name: "Jane".to_string(),
                last_name: "Smith".to_string(),
                email: "jane@example.com".to_string(),
                phone: "+1 (555) 010-0000".to_string(),
                organization_id: Some(2),
            },
        );
        assert_eq!(patch.last_name.as_deref(), Some("Smith"));
        assert_eq!(patch.organization_id, Some(2));
        assert_eq!(patch.first_name, None);
    }

    #[test]
    fn test_contact_deserializes_without_organization() {
        let contact: Contact = serde_json::from_value(serde_json::json!({
            "id": 3,
            "first_name": "Ann",
            "last_name": "Lee",
            "email": "ann@example.com",
            "phone": "555",
            "organization_id": null,
            "created_at": "2024-01-01T00:00:00",
            "updated_at": "2024-01-01T00:00:00"
        }))
        .unwrap();
        assert_eq!(contact.organization_id, None);
        assert_eq!(contact.organization, None);
        assert_eq!(contact.full_name(), "Ann Lee");
    }

    #[test]
    fn test_contact_filter_omits_unset_filters() {
        assert!(ContactFilter::default().query_pairs().is_empty());
        assert!(ContactFilter::new(Some("  "), None).query_pairs().is_empty());
        assert_eq!(
            ContactFilter::new(Some("jane"), None).query_pairs(),
            vec![("search", "jane".to_string())]
        );
        assert_eq!(
            ContactFilter::new(None, Some(4)).query_pairs(),
            vec![("organization_id", "4".to_string())]
        );
    }
}
