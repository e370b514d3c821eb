// Test utilities shared across integration tests
use std::sync::Once;

use roster_shared::{
    ApiError, ApiResult, Contact, Generation, ListAction, ListState, Organization,
    RequestTracker, Resource, Revisions,
};
use serde_json::{Value, json};

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init()
            .ok();
    });
}

/// One request as the backend saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// In-memory stand-in for the REST backend.
#[derive(Default)]
pub struct FakeBackend {
    pub requests: Vec<Recorded>,
    /// Answer every PUT and DELETE with a 500.
    pub fail_writes: bool,
    organizations: Vec<Organization>,
    contacts: Vec<Contact>,
    next_id: i64,
    clock: u32,
}

impl FakeBackend {
    fn stamp(&mut self) -> String {
        self.clock += 1;
        format!("2024-01-01T00:00:{:02}", self.clock)
    }

    fn record(&mut self, method: &'static str, path: String, body: Option<Value>) {
        self.requests.push(Recorded { method, path, body });
    }

    pub fn gets(&self) -> Vec<&str> {
        self.requests
            .iter()
            .filter(|r| r.method == "GET")
            .map(|r| r.path.as_str())
            .collect()
    }

    pub fn seed_organization(&mut self, name: &str, address: &str) -> Organization {
        self.next_id += 1;
        let stamp = self.stamp();
        let organization = Organization {
            id: self.next_id,
            name: name.to_string(),
            address: address.to_string(),
            created_at: stamp.clone(),
            updated_at: stamp,
        };
        self.organizations.push(organization.clone());
        organization
    }

    pub fn seed_contact(&mut self, first: &str, last: &str, organization_id: Option<i64>) -> Contact {
        self.next_id += 1;
        let stamp = self.stamp();
        let contact = Contact {
            id: self.next_id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            phone: "555-0100".to_string(),
            organization_id,
            organization: None,
            created_at: stamp.clone(),
            updated_at: stamp,
        };
        self.contacts.push(contact.clone());
        contact
    }

    pub fn list_organizations(&mut self, path: String) -> Vec<Organization> {
        self.record("GET", path, None);
        self.organizations.clone()
    }

    pub fn list_contacts(&mut self, path: String) -> Vec<Contact> {
        self.record("GET", path, None);
        self.contacts
            .iter()
            .map(|c| {
                let mut c = c.clone();
                c.organization = c
                    .organization_id
                    .and_then(|id| self.organizations.iter().find(|o| o.id == id).cloned());
                c
            })
            .collect()
    }

    pub fn create_organization(&mut self, body: Value) -> Organization {
        self.record("POST", "/organizations/".to_string(), Some(body.clone()));
        self.seed_organization(
            body["name"].as_str().unwrap_or_default(),
            body["address"].as_str().unwrap_or_default(),
        )
    }

    fn reject_write(&self) -> ApiResult<()> {
        if self.fail_writes {
            return Err(ApiError::Status(500));
        }
        Ok(())
    }

    pub fn update_organization(&mut self, id: i64, body: Value) -> ApiResult<Organization> {
        self.record("PUT", format!("/organizations/{id}"), Some(body.clone()));
        self.reject_write()?;
        let stamp = self.stamp();
        let organization = self
            .organizations
            .iter_mut()
            .find(|o| o.id == id)
            .expect("organization exists");
        if let Some(name) = body["name"].as_str() {
            organization.name = name.to_string();
        }
        if let Some(address) = body["address"].as_str() {
            organization.address = address.to_string();
        }
        organization.updated_at = stamp;
        Ok(organization.clone())
    }

    pub fn delete_organization(&mut self, id: i64) -> ApiResult<()> {
        self.record("DELETE", format!("/organizations/{id}"), None);
        self.reject_write()?;
        self.organizations.retain(|o| o.id != id);
        Ok(())
    }
}

/// Drives a `ListState` the way a list view does: one fetch per change of
/// its dependencies (filter, revision).
pub struct ListHarness<R: Resource> {
    pub state: ListState<R>,
    pub tracker: RequestTracker,
    last_deps: Option<(R::Filter, u64)>,
}

impl<R: Resource> Default for ListHarness<R> {
    fn default() -> Self {
        Self {
            state: ListState::default(),
            tracker: RequestTracker::default(),
            last_deps: None,
        }
    }
}

impl<R: Resource> ListHarness<R> {
    /// Begin a fetch if the dependencies moved, returning its generation.
    pub fn observe(&mut self, filter: &R::Filter, revisions: &Revisions) -> Option<Generation> {
        let deps = (filter.clone(), revisions.get(R::KIND));
        if self.last_deps.as_ref() == Some(&deps) {
            return None;
        }
        self.last_deps = Some(deps);
        let generation = self.tracker.next();
        self.state.apply(ListAction::Begin(generation));
        Some(generation)
    }

    pub fn resolve(&mut self, generation: Generation, rows: Vec<R::Entity>) -> bool {
        self.state.apply(ListAction::Loaded(generation, rows))
    }
}

pub fn body_of<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|_| json!(null))
}
