// Shared revision store
//
// Lists subscribe to the revision of their resource kind; mutations elsewhere
// in the tree invalidate it and every mounted list of that kind re-fetches.

use std::rc::Rc;

use roster_shared::{ResourceKind, Revisions};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    Invalidate(ResourceKind),
    InvalidateDependents(ResourceKind),
}

#[derive(Debug, Clone, Default, PartialEq)]
struct RevisionStore(Revisions);

impl Reducible for RevisionStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut revisions = self.0;
        match action {
            StoreAction::Invalidate(kind) => revisions.invalidate(kind),
            StoreAction::InvalidateDependents(kind) => revisions.invalidate_dependents(kind),
        }
        Rc::new(Self(revisions))
    }
}

// ===== Store Context =====

#[derive(Clone, PartialEq)]
pub struct StoreContext {
    pub revisions: Revisions,
    pub dispatch: Callback<StoreAction>,
}

impl StoreContext {
    pub fn revision(&self, kind: ResourceKind) -> u64 {
        self.revisions.get(kind)
    }

    /// The server copy of `kind` changed; so did everything embedding it.
    pub fn invalidate(&self, kind: ResourceKind) {
        self.dispatch.emit(StoreAction::Invalidate(kind));
    }

    pub fn invalidate_dependents(&self, kind: ResourceKind) {
        self.dispatch.emit(StoreAction::InvalidateDependents(kind));
    }
}

#[derive(Properties, PartialEq)]
pub struct StoreProviderProps {
    pub children: Html,
}

#[function_component(StoreProvider)]
pub fn store_provider(props: &StoreProviderProps) -> Html {
    let store = use_reducer(RevisionStore::default);

    let dispatch = {
        let store = store.clone();
        Callback::from(move |action: StoreAction| store.dispatch(action))
    };

    let ctx = StoreContext {
        revisions: store.0,
        dispatch,
    };

    html! {
        <ContextProvider<StoreContext> context={ctx}>
            { props.children.clone() }
        </ContextProvider<StoreContext>>
    }
}

/// Hook to access the shared store
#[hook]
pub fn use_store() -> StoreContext {
    use_context::<StoreContext>().expect("StoreContext not found")
}
