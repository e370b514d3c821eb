//! One abstraction for both record types.
//!
//! A `Resource` bundles the entity shape, its form layout and validation
//! rules, and its REST paths. Lists, forms and the API client are written
//! once against this trait.

use serde::{Serialize, de::DeserializeOwned};
use std::fmt;

use crate::validation::{FieldErrors, FormValues, Validator, parse_reference};
use crate::{
    Contact, ContactFilter, ContactPatch, NewContact, NewOrganization, Organization,
    OrganizationPatch,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Organizations,
    Contacts,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Organizations => "organizations",
            ResourceKind::Contacts => "contacts",
        }
    }

    /// Kinds whose records embed a snapshot of this kind.
    pub fn dependents(&self) -> &'static [ResourceKind] {
        match self {
            ResourceKind::Organizations => &[ResourceKind::Contacts],
            ResourceKind::Contacts => &[],
        }
    }

    pub fn collection_path(&self) -> String {
        format!("/{}/", self.as_str())
    }

    pub fn item_path(&self, id: i64) -> String {
        format!("/{}/{}", self.as_str(), id)
    }

    /// Collection path with URL-encoded query parameters appended.
    pub fn with_query(&self, pairs: &[(&'static str, String)]) -> String {
        let mut path = self.collection_path();
        for (i, (key, value)) in pairs.iter().enumerate() {
            path.push(if i == 0 { '?' } else { '&' });
            path.push_str(key);
            path.push('=');
            path.push_str(&urlencoding::encode(value));
        }
        path
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    /// Optional foreign key chosen from another resource's records.
    Reference {
        target: ResourceKind,
        empty_label: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Text }
    }

    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }
}

pub trait Resource: Clone + PartialEq + fmt::Debug + 'static {
    type Entity: Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + 'static;
    /// Create body; never carries identifiers or timestamps.
    type Payload: Clone + PartialEq + fmt::Debug + Serialize + 'static;
    /// Partial update body.
    type Patch: Clone + PartialEq + fmt::Debug + Serialize + 'static;
    type Filter: Clone + PartialEq + fmt::Debug + Default + 'static;

    const KIND: ResourceKind;
    const FIELDS: &'static [FieldSpec];

    fn id(entity: &Self::Entity) -> i64;

    /// Short human label, used by selection controls.
    fn label(entity: &Self::Entity) -> String;

    /// Form values pre-populated from an existing record.
    fn values(entity: &Self::Entity) -> FormValues;

    fn validate(values: &FormValues) -> Result<Self::Payload, FieldErrors>;

    fn patch(current: &Self::Entity, desired: Self::Payload) -> Self::Patch;

    fn query(filter: &Self::Filter) -> Vec<(&'static str, String)>;

    fn list_path(filter: &Self::Filter) -> String {
        Self::KIND.with_query(&Self::query(filter))
    }

    fn item_path(id: i64) -> String {
        Self::KIND.item_path(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Organizations;

impl Organizations {
    pub const NAME: &'static str = "name";
    pub const ADDRESS: &'static str = "address";
}

impl Resource for Organizations {
    type Entity = Organization;
    type Payload = NewOrganization;
    type Patch = OrganizationPatch;
    type Filter = ();

    const KIND: ResourceKind = ResourceKind::Organizations;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text(Self::NAME, "Organization Name"),
        FieldSpec::text(Self::ADDRESS, "Address"),
    ];

    fn id(entity: &Organization) -> i64 {
        entity.id
    }

    fn label(entity: &Organization) -> String {
        entity.name.clone()
    }

    fn values(entity: &Organization) -> FormValues {
        FormValues::blank(Self::FIELDS)
            .with(Self::NAME, entity.name.as_str())
            .with(Self::ADDRESS, entity.address.as_str())
    }

    fn validate(values: &FormValues) -> Result<NewOrganization, FieldErrors> {
        Validator::new(values)
            .required(Self::NAME, "Organization name is required")
            .required(Self::ADDRESS, "Address is required")
            .finish_with(|v| NewOrganization {
                name: v.text(Self::NAME),
                address: v.text(Self::ADDRESS),
            })
    }

    fn patch(current: &Organization, desired: NewOrganization) -> OrganizationPatch {
        OrganizationPatch::between(current, desired)
    }

    fn query(_: &()) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contacts;

impl Contacts {
    pub const FIRST_NAME: &'static str = "first_name";
    pub const LAST_NAME: &'static str = "last_name";
    pub const EMAIL: &'static str = "email";
    pub const PHONE: &'static str = "phone";
    pub const ORGANIZATION_ID: &'static str = "organization_id";
}

impl Resource for Contacts {
    type Entity = Contact;
    type Payload = NewContact;
    type Patch = ContactPatch;
    type Filter = ContactFilter;

    const KIND: ResourceKind = ResourceKind::Contacts;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text(Self::FIRST_NAME, "First Name"),
        FieldSpec::text(Self::LAST_NAME, "Last Name"),
        FieldSpec::new(Self::EMAIL, "Email", FieldKind::Email),
        FieldSpec::new(Self::PHONE, "Phone", FieldKind::Tel),
        FieldSpec::new(
            Self::ORGANIZATION_ID,
            "Organization",
            FieldKind::Reference {
                target: ResourceKind::Organizations,
                empty_label: "Select an organization",
            },
        ),
    ];

    fn id(entity: &Contact) -> i64 {
        entity.id
    }

    fn label(entity: &Contact) -> String {
        entity.full_name()
    }

    fn values(entity: &Contact) -> FormValues {
        FormValues::blank(Self::FIELDS)
            .with(Self::FIRST_NAME, entity.first_name.as_str())
            .with(Self::LAST_NAME, entity.last_name.as_str())
            .with(Self::EMAIL, entity.email.as_str())
            .with(Self::PHONE, entity.phone.as_str())
            .with(
                Self::ORGANIZATION_ID,
                entity.organization_id.map(|id| id.to_string()).unwrap_or_default(),
            )
    }

    fn validate(values: &FormValues) -> Result<NewContact, FieldErrors> {
        Validator::new(values)
            .required(Self::FIRST_NAME, "First name is required")
            .required(Self::LAST_NAME, "Last name is required")
            .required(Self::EMAIL, "Email is required")
            .email(Self::EMAIL, "Invalid email format")
            .required(Self::PHONE, "Phone is required")
            .phone(Self::PHONE, "Invalid phone number format")
            .reference(Self::ORGANIZATION_ID, "Select a valid organization")
            .finish_with(|v| NewContact {
                first_name: v.text(Self::FIRST_NAME),
                last_name: v.text(Self::LAST_NAME),
                email: v.text(Self::EMAIL),
                phone: v.text(Self::PHONE),
                organization_id: parse_reference(v.get(Self::ORGANIZATION_ID))
                    .ok()
                    .flatten(),
            })
    }

    fn patch(current: &Contact, desired: NewContact) -> ContactPatch {
        ContactPatch::between(current, desired)
    }

    fn query(filter: &ContactFilter) -> Vec<(&'static str, String)> {
        filter.query_pairs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_values() -> FormValues {
        FormValues::blank(Contacts::FIELDS)
            .with(Contacts::FIRST_NAME, "Jane")
            .with(Contacts::LAST_NAME, "Doe")
            .with(Contacts::EMAIL, "jane@example.com")
            .with(Contacts::PHONE, "+1 (555) 010-0000")
    }

    #[test]
    fn test_paths() {
        assert_eq!(ResourceKind::Organizations.collection_path(), "/organizations/");
        assert_eq!(ResourceKind::Contacts.item_path(9), "/contacts/9");
        assert_eq!(Organizations::list_path(&()), "/organizations/");
        assert_eq!(Contacts::item_path(3), "/contacts/3");
    }

    #[test]
    fn test_contact_search_query() {
        let filter = ContactFilter::new(Some("jane"), None);
        assert_eq!(Contacts::list_path(&filter), "/contacts/?search=jane");

        let filter = ContactFilter::new(Some("o'neil & co"), Some(2));
        assert_eq!(
            Contacts::list_path(&filter),
            "/contacts/?search=o%27neil%20%26%20co&organization_id=2"
        );
        assert_eq!(Contacts::list_path(&ContactFilter::default()), "/contacts/");
    }

    #[test]
    fn test_whitespace_search_sends_no_filter() {
        let filter = ContactFilter::new(Some("   "), None);
        assert_eq!(Contacts::list_path(&filter), "/contacts/");

        let filter = ContactFilter::new(Some(" \t"), Some(3));
        assert_eq!(Contacts::list_path(&filter), "/contacts/?organization_id=3");

        // Inner and surrounding spaces of a real term are sent as typed
        let filter = ContactFilter::new(Some(" jane "), None);
        assert_eq!(Contacts::list_path(&filter), "/contacts/?search=%20jane%20");
    }

    #[test]
    fn test_organization_required_fields() {
        let errors = Organizations::validate(&FormValues::blank(Organizations::FIELDS)).unwrap_err();
        assert_eq!(errors.get("name"), Some("Organization name is required"));
        assert_eq!(errors.get("address"), Some("Address is required"));

        let values = FormValues::blank(Organizations::FIELDS)
            .with(Organizations::NAME, "Acme")
            .with(Organizations::ADDRESS, "   ");
        let errors = Organizations::validate(&values).unwrap_err();
        assert!(!errors.contains("name"));
        assert!(errors.contains("address"));
    }

    #[test]
    fn test_organization_payload_has_exactly_two_fields() {
        let values = FormValues::blank(Organizations::FIELDS)
            .with(Organizations::NAME, "Acme")
            .with(Organizations::ADDRESS, "1 Main St");
        let payload = Organizations::validate(&values).unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({ "name": "Acme", "address": "1 Main St" })
        );
    }

    #[test]
    fn test_contact_required_fields() {
        let errors = Contacts::validate(&FormValues::blank(Contacts::FIELDS)).unwrap_err();
        assert_eq!(errors.get("first_name"), Some("First name is required"));
        assert_eq!(errors.get("last_name"), Some("Last name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("phone"), Some("Phone is required"));
        assert!(!errors.contains("organization_id"));
    }

    #[test]
    fn test_contact_email_and_phone_rules() {
        let bad_email = contact_values().with(Contacts::EMAIL, "jane.example.com");
        assert_eq!(
            Contacts::validate(&bad_email).unwrap_err().get("email"),
            Some("Invalid email format")
        );

        let no_domain = contact_values().with(Contacts::EMAIL, "jane@");
        assert!(Contacts::validate(&no_domain).unwrap_err().contains("email"));

        let single_label = contact_values().with(Contacts::EMAIL, "jane@intranet");
        assert_eq!(
            Contacts::validate(&single_label).unwrap_err().get("email"),
            Some("Invalid email format")
        );

        let letters = contact_values().with(Contacts::PHONE, "555-CALL-NOW");
        assert_eq!(
            Contacts::validate(&letters).unwrap_err().get("phone"),
            Some("Invalid phone number format")
        );

        assert!(Contacts::validate(&contact_values().with(Contacts::PHONE, "(555) 123-4567")).is_ok());
    }

    #[test]
    fn test_contact_without_organization_omits_it() {
        let payload = Contacts::validate(&contact_values()).unwrap();
        assert_eq!(payload.organization_id, None);
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("organization_id").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_contact_organization_converted_to_integer() {
        let values = contact_values().with(Contacts::ORGANIZATION_ID, "42");
        let payload = Contacts::validate(&values).unwrap();
        assert_eq!(payload.organization_id, Some(42));
        assert_eq!(serde_json::to_value(&payload).unwrap()["organization_id"], 42);

        let values = contact_values().with(Contacts::ORGANIZATION_ID, "abc");
        assert_eq!(
            Contacts::validate(&values).unwrap_err().get("organization_id"),
            Some("Select a valid organization")
        );
    }

    #[test]
    fn test_values_round_trip_through_form() {
        let organization = Organization {
            id: 5,
            name: "Acme".into(),
            address: "1 Main St".into(),
            created_at: "t0".into(),
            updated_at: "t1".into(),
        };
        let values = Organizations::values(&organization);
        assert_eq!(values.get(Organizations::NAME), "Acme");
        let payload = Organizations::validate(&values).unwrap();
        assert!(Organizations::patch(&organization, payload).is_empty());
    }

    #[test]
    fn test_organization_change_reaches_contacts() {
        assert_eq!(ResourceKind::Organizations.dependents(), &[ResourceKind::Contacts]);
        assert!(ResourceKind::Contacts.dependents().is_empty());
    }
}
