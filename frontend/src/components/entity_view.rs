//! How each resource renders in a table.

use roster_shared::{Contact, Contacts, Organization, Organizations, Resource};
use yew::prelude::*;

/// Row-level callbacks a view may hand to its cells.
#[derive(Clone, PartialEq)]
pub struct RowActions {
    /// Open the organization form for a contact's linked organization.
    pub edit_organization: Callback<Organization>,
}

pub trait EntityView: Resource {
    /// Plural page heading; lowercased in loading and error text.
    const TITLE: &'static str;
    const SINGULAR: &'static str;
    const EMPTY: &'static str;
    const COLUMNS: &'static [&'static str];

    /// One `<td>` per entry of `COLUMNS`.
    fn cells(entity: &Self::Entity, actions: &RowActions) -> Html;

    fn noun() -> String {
        Self::SINGULAR.to_lowercase()
    }
}

const CELL: &str = "px-6 py-4 whitespace-nowrap text-sm text-gray-300";

impl EntityView for Organizations {
    const TITLE: &'static str = "Organizations";
    const SINGULAR: &'static str = "Organization";
    const EMPTY: &'static str = "No organizations found.";
    const COLUMNS: &'static [&'static str] = &["Name", "Address"];

    fn cells(organization: &Organization, _: &RowActions) -> Html {
        html! {
            <>
                <td class={CELL}>{ organization.name.clone() }</td>
                <td class={CELL}>{ organization.address.clone() }</td>
            </>
        }
    }
}

impl EntityView for Contacts {
    const TITLE: &'static str = "Contacts";
    const SINGULAR: &'static str = "Contact";
    const EMPTY: &'static str = "No contacts found.";
    const COLUMNS: &'static [&'static str] = &["Name", "Email", "Phone", "Organization"];

    fn cells(contact: &Contact, actions: &RowActions) -> Html {
        let organization = match &contact.organization {
            Some(organization) => {
                let on_edit = {
                    let edit = actions.edit_organization.clone();
                    let organization = organization.clone();
                    Callback::from(move |_: MouseEvent| edit.emit(organization.clone()))
                };
                html! {
                    <span class="flex items-center space-x-2">
                        <span>{ organization.name.clone() }</span>
                        <button
                            type="button"
                            onclick={on_edit}
                            title="Edit organization"
                            class="text-blue-400 hover:text-blue-300"
                        >
                            {"✎"}
                        </button>
                    </span>
                }
            }
            None => html! { <span class="text-gray-500">{"N/A"}</span> },
        };

        html! {
            <>
                <td class={CELL}>{ contact.full_name() }</td>
                <td class={CELL}>{ contact.email.clone() }</td>
                <td class={CELL}>{ contact.phone.clone() }</td>
                <td class={CELL}>{ organization }</td>
            </>
        }
    }
}
