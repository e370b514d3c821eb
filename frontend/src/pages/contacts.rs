use gloo::dialogs::alert;
use roster_shared::validation::parse_reference;
use roster_shared::{ContactFilter, Contacts, NewContact, ResourceKind};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::entity_view::EntityView;
use crate::components::{EntityForm, EntityList, Modal, ReferenceSelect};
use crate::services::contacts;
use crate::store::use_store;

#[function_component(ContactsPage)]
pub fn contacts_page() -> Html {
    let store = use_store();
    let search = use_state(String::new);
    let organization = use_state(String::new);
    let creating = use_state(|| false);
    let submitting = use_state(|| false);

    let filter = ContactFilter::new(
        Some(search.as_str()),
        parse_reference(&organization).ok().flatten(),
    );

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_organization = {
        let organization = organization.clone();
        Callback::from(move |selected: String| organization.set(selected))
    };

    let toggle_create_modal = {
        let creating = creating.clone();
        Callback::from(move |_: ()| creating.set(!*creating))
    };

    let on_create = {
        let creating = creating.clone();
        let submitting = submitting.clone();
        Callback::from(move |payload: NewContact| {
            let creating = creating.clone();
            let submitting = submitting.clone();
            let store = store.clone();
            submitting.set(true);
            spawn_local(async move {
                match contacts::create(&payload).await {
                    Ok(_) => {
                        creating.set(false);
                        store.invalidate(ResourceKind::Contacts);
                    }
                    Err(_) => alert("Failed to create contact. Please try again."),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-semibold text-white">{ Contacts::TITLE }</h1>
                <button
                    type="button"
                    onclick={toggle_create_modal.reform(|_: MouseEvent| ())}
                    class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-lg text-sm font-medium"
                >
                    {"Add Contact"}
                </button>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-4">
                <input
                    type="text"
                    placeholder="Search contacts..."
                    value={(*search).clone()}
                    oninput={on_search}
                    class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                />
                <ReferenceSelect
                    kind={ResourceKind::Organizations}
                    value={(*organization).clone()}
                    empty_label="All organizations"
                    on_change={on_organization}
                />
            </div>

            <EntityList<Contacts> {filter} />

            if *creating {
                <Modal
                    title="Add Contact"
                    close_disabled={*submitting}
                    on_close={toggle_create_modal.clone()}
                >
                    <EntityForm<Contacts>
                        on_submit={on_create}
                        on_cancel={toggle_create_modal.clone()}
                        submitting={*submitting}
                    />
                </Modal>
            }
        </div>
    }
}
