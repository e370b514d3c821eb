use std::rc::Rc;

use gloo::dialogs::{alert, confirm};
use roster_shared::{
    ListAction, ListState, ListStatus, NewOrganization, Organization, OrganizationPatch,
    Organizations, RequestTracker, Resource, ResourceKind,
};
use tracing::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::entity_form::EntityForm;
use super::entity_view::{EntityView, RowActions};
use super::modal::Modal;
use crate::services;
use crate::store::use_store;

struct ListStore<R: Resource>(ListState<R>);

impl<R: Resource> Default for ListStore<R> {
    fn default() -> Self {
        Self(ListState::default())
    }
}

impl<R: Resource> Reducible for ListStore<R> {
    type Action = ListAction<R>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if !self.0.admits(&action) {
            return self;
        }
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(Self(state))
    }
}

#[derive(Properties, PartialEq)]
pub struct EntityListProps<R: EntityView> {
    #[prop_or_default]
    pub filter: R::Filter,
    /// Render an "Add" button with its own create modal.
    #[prop_or_default]
    pub show_create: bool,
}

/// Table of every record matching `filter`, re-fetched whenever the filter
/// or the resource's revision in the shared store changes.
#[function_component(EntityList)]
pub fn entity_list<R: EntityView>(props: &EntityListProps<R>) -> Html {
    let store = use_store();
    let list = use_reducer(ListStore::<R>::default);
    let tracker = use_mut_ref(RequestTracker::default);
    let retry = use_state(|| 0u32);

    let editing = use_state(|| None::<R::Entity>);
    let editing_organization = use_state(|| None::<Organization>);
    let creating = use_state(|| false);
    let submitting = use_state(|| false);

    let revision = store.revision(R::KIND);

    // Fetch on mount and on every filter, revision or retry change
    {
        let list = list.dispatcher();
        let tracker = tracker.clone();
        use_effect_with(
            (props.filter.clone(), revision, *retry),
            move |(filter, revision, _)| {
                let generation = tracker.borrow_mut().next();
                debug!(kind = %R::KIND, generation = generation.value(), revision, "fetching list");
                list.dispatch(ListAction::Begin(generation));

                let filter = filter.clone();
                spawn_local(async move {
                    match services::list::<R>(&filter).await {
                        Ok(rows) => list.dispatch(ListAction::Loaded(generation, rows)),
                        Err(_) => list.dispatch(ListAction::Failed(
                            generation,
                            format!("Failed to load {}", R::TITLE.to_lowercase()),
                        )),
                    }
                });
                || ()
            },
        );
    }

    let on_retry = {
        let retry = retry.clone();
        Callback::from(move |_: MouseEvent| retry.set(*retry + 1))
    };

    let on_create_submit = {
        let creating = creating.clone();
        let submitting = submitting.clone();
        let store = store.clone();
        Callback::from(move |payload: R::Payload| {
            let creating = creating.clone();
            let submitting = submitting.clone();
            let store = store.clone();
            submitting.set(true);
            spawn_local(async move {
                match services::create::<R>(&payload).await {
                    Ok(_) => {
                        creating.set(false);
                        store.invalidate(R::KIND);
                    }
                    Err(_) => alert(&format!("Failed to create {}", R::noun())),
                }
                submitting.set(false);
            });
        })
    };

    let on_edit_submit = {
        let editing = editing.clone();
        let submitting = submitting.clone();
        let store = store.clone();
        Callback::from(move |payload: R::Payload| {
            let Some(current) = (*editing).clone() else {
                return;
            };
            let id = R::id(&current);
            let patch = R::patch(&current, payload);
            let editing = editing.clone();
            let submitting = submitting.clone();
            let store = store.clone();
            submitting.set(true);
            spawn_local(async move {
                match services::update::<R>(id, &patch).await {
                    Ok(_) => {
                        editing.set(None);
                        store.invalidate(R::KIND);
                    }
                    Err(_) => alert(&format!("Failed to update {}", R::noun())),
                }
                submitting.set(false);
            });
        })
    };

    let on_organization_submit = {
        let editing_organization = editing_organization.clone();
        let submitting = submitting.clone();
        let store = store.clone();
        Callback::from(move |payload: NewOrganization| {
            let Some(current) = (*editing_organization).clone() else {
                return;
            };
            let patch = OrganizationPatch::between(&current, payload);
            let editing_organization = editing_organization.clone();
            let submitting = submitting.clone();
            let store = store.clone();
            submitting.set(true);
            spawn_local(async move {
                match services::organizations::update(current.id, &patch).await {
                    Ok(_) => {
                        editing_organization.set(None);
                        store.invalidate(ResourceKind::Organizations);
                    }
                    Err(_) => alert("Failed to update organization"),
                }
                submitting.set(false);
            });
        })
    };

    let on_delete = {
        let list = list.dispatcher();
        let store = store.clone();
        Callback::from(move |id: i64| {
            if !confirm(&format!("Are you sure you want to delete this {}?", R::noun())) {
                return;
            }
            let list = list.clone();
            let store = store.clone();
            spawn_local(async move {
                match services::delete::<R>(id).await {
                    Ok(()) => {
                        list.dispatch(ListAction::Remove(id));
                        store.invalidate_dependents(R::KIND);
                    }
                    Err(_) => alert(&format!("Failed to delete {}", R::noun())),
                }
            });
        })
    };

    let close_create = {
        let creating = creating.clone();
        Callback::from(move |_: ()| creating.set(false))
    };
    let close_edit = {
        let editing = editing.clone();
        Callback::from(move |_: ()| editing.set(None))
    };
    let close_organization = {
        let editing_organization = editing_organization.clone();
        Callback::from(move |_: ()| editing_organization.set(None))
    };

    let row_actions = RowActions {
        edit_organization: {
            let editing_organization = editing_organization.clone();
            Callback::from(move |organization| editing_organization.set(Some(organization)))
        },
    };

    let body = match list.0.status() {
        ListStatus::Loading => html! {
            <div class="p-6 text-center text-gray-400">{ format!("Loading {}...", R::TITLE.to_lowercase()) }</div>
        },
        ListStatus::Failed(message) => html! {
            <div class="p-6 text-center">
                <p class="text-red-400 mb-3">{ format!("Error: {message}") }</p>
                <button
                    type="button"
                    onclick={on_retry}
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 text-white rounded-lg text-sm"
                >
                    {"Retry"}
                </button>
            </div>
        },
        ListStatus::Ready(rows) if rows.is_empty() => html! {
            <div class="p-6 text-center text-gray-400">{ R::EMPTY }</div>
        },
        ListStatus::Ready(rows) => html! {
            <table class="min-w-full divide-y divide-gray-700">
                <thead class="bg-gray-800">
                    <tr>
                        { for R::COLUMNS.iter().map(|column| html! {
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider">{ *column }</th>
                        })}
                        <th class="px-6 py-3 text-right text-xs font-medium text-gray-400 uppercase tracking-wider">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody class="bg-gray-900 divide-y divide-gray-800">
                    { for rows.iter().map(|row| {
                        let id = R::id(row);
                        let on_edit = {
                            let editing = editing.clone();
                            let row = row.clone();
                            Callback::from(move |_: MouseEvent| editing.set(Some(row.clone())))
                        };
                        let on_delete = {
                            let on_delete = on_delete.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(id))
                        };
                        html! {
                            <tr key={id} class="hover:bg-gray-800">
                                { R::cells(row, &row_actions) }
                                <td class="px-6 py-4 whitespace-nowrap text-right text-sm space-x-3">
                                    <button type="button" onclick={on_edit} class="text-blue-400 hover:text-blue-300">{"Edit"}</button>
                                    <button type="button" onclick={on_delete} class="text-red-400 hover:text-red-300">{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        },
    };

    html! {
        <div>
            if props.show_create {
                <div class="flex justify-end mb-4">
                    <button
                        type="button"
                        onclick={{
                            let creating = creating.clone();
                            Callback::from(move |_: MouseEvent| creating.set(true))
                        }}
                        class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-lg text-sm font-medium"
                    >
                        { format!("Add {}", R::SINGULAR) }
                    </button>
                </div>
            }

            <div class="bg-gray-800 rounded-lg border border-gray-700 overflow-hidden">
                { body }
            </div>

            if *creating {
                <Modal
                    title={format!("Add {}", R::SINGULAR)}
                    close_disabled={*submitting}
                    on_close={close_create.clone()}
                >
                    <EntityForm<R>
                        on_submit={on_create_submit}
                        on_cancel={close_create}
                        submitting={*submitting}
                    />
                </Modal>
            }

            if let Some(entity) = (*editing).clone() {
                <Modal
                    title={format!("Edit {}", R::SINGULAR)}
                    close_disabled={*submitting}
                    on_close={close_edit.clone()}
                >
                    <EntityForm<R>
                        key={R::id(&entity)}
                        initial={R::values(&entity)}
                        on_submit={on_edit_submit}
                        on_cancel={close_edit}
                        submitting={*submitting}
                    />
                </Modal>
            }

            if let Some(organization) = (*editing_organization).clone() {
                <Modal
                    title="Edit Organization"
                    close_disabled={*submitting}
                    on_close={close_organization.clone()}
                >
                    <EntityForm<Organizations>
                        key={organization.id}
                        initial={Organizations::values(&organization)}
                        on_submit={on_organization_submit}
                        on_cancel={close_organization}
                        submitting={*submitting}
                    />
                </Modal>
            }
        </div>
    }
}
