use roster_shared::{ApiError, Contacts, Organizations, ResourceKind};
use tracing::error;
use yew::prelude::*;
use yew_hooks::use_async;

use crate::services;
use crate::store::use_store;

#[derive(Properties, PartialEq)]
pub struct ReferenceSelectProps {
    pub kind: ResourceKind,
    /// Selected id as text; empty for none.
    pub value: AttrValue,
    pub empty_label: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Selection control over another resource's records. Fetches its own
/// options on mount and again whenever that resource is invalidated.
#[function_component(ReferenceSelect)]
pub fn reference_select(props: &ReferenceSelectProps) -> Html {
    let kind = props.kind;
    let revision = use_store().revision(kind);

    let options = use_async(async move {
        let fetched = match kind {
            ResourceKind::Organizations => services::reference_options::<Organizations>().await,
            ResourceKind::Contacts => services::reference_options::<Contacts>().await,
        };
        fetched.map_err(|e: ApiError| {
            error!(%kind, code = e.code(), "failed to load selection options: {e}");
            e
        })
    });

    {
        let options = options.clone();
        use_effect_with(revision, move |_| {
            options.run();
            || ()
        });
    }

    let loading = options.loading || (options.data.is_none() && options.error.is_none());

    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <>
            <select
                id={props.id.clone()}
                value={props.value.clone()}
                {onchange}
                disabled={props.disabled || loading}
                class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
            >
                <option value="" selected={props.value.is_empty()}>{ props.empty_label.clone() }</option>
                { for options.data.iter().flatten().map(|(id, label)| {
                    let value = id.to_string();
                    let selected = *props.value == *value;
                    html! { <option value={value} {selected}>{ label.clone() }</option> }
                })}
            </select>
            if loading {
                <p class="mt-1 text-xs text-gray-400">{ format!("Loading {kind}...") }</p>
            }
        </>
    }
}
