//! Per-resource revision counters.
//!
//! A revision is bumped whenever the server copy of a collection is known to
//! have changed. Anything that fetched the collection subscribes to its
//! revision and fetches again when it moves.

use tracing::debug;

use crate::resource::ResourceKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Revisions {
    organizations: u64,
    contacts: u64,
}

impl Revisions {
    pub fn get(&self, kind: ResourceKind) -> u64 {
        match kind {
            ResourceKind::Organizations => self.organizations,
            ResourceKind::Contacts => self.contacts,
        }
    }

    /// Mark `kind` and everything embedding it as stale.
    pub fn invalidate(&mut self, kind: ResourceKind) {
        self.bump(kind);
        self.invalidate_dependents(kind);
    }

    /// Mark only the kinds embedding `kind` as stale.
    pub fn invalidate_dependents(&mut self, kind: ResourceKind) {
        for dependent in kind.dependents() {
            self.bump(*dependent);
        }
    }

    fn bump(&mut self, kind: ResourceKind) {
        let slot = match kind {
            ResourceKind::Organizations => &mut self.organizations,
            ResourceKind::Contacts => &mut self.contacts,
        };
        *slot = slot.wrapping_add(1);
        debug!(%kind, revision = *slot, "resource invalidated");
    }
}
