use roster_shared::{FieldErrors, FieldKind, FieldSpec, FormValues};
use yew::prelude::*;

use super::entity_view::EntityView;
use super::reference_select::ReferenceSelect;

const INPUT: &str = "w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500";

#[derive(Properties, PartialEq)]
pub struct EntityFormProps<R: EntityView> {
    /// Pre-populated values when editing; blank fields when creating.
    #[prop_or_default]
    pub initial: Option<FormValues>,
    pub on_submit: Callback<R::Payload>,
    #[prop_or_default]
    pub submitting: bool,
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

/// Create/edit form for any resource. Validation runs on submit; once a
/// submit has failed, every edit re-validates so messages clear as fields
/// are fixed.
#[function_component(EntityForm)]
pub fn entity_form<R: EntityView>(props: &EntityFormProps<R>) -> Html {
    let values = {
        let initial = props.initial.clone();
        use_state(move || initial.unwrap_or_else(|| FormValues::blank(R::FIELDS)))
    };
    let errors = use_state(FieldErrors::default);
    let attempted = use_state(|| false);

    let set_field = {
        let values = values.clone();
        let errors = errors.clone();
        let attempted = attempted.clone();
        Callback::from(move |(field, value): (&'static str, String)| {
            let updated = (*values).clone().with(field, value);
            if *attempted {
                errors.set(R::validate(&updated).err().unwrap_or_default());
            }
            values.set(updated);
        })
    };

    let onsubmit = {
        let values = values.clone();
        let errors = errors.clone();
        let attempted = attempted.clone();
        let on_submit = props.on_submit.clone();
        let submitting = props.submitting;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submitting {
                return;
            }
            attempted.set(true);
            match R::validate(&*values) {
                Ok(payload) => {
                    errors.set(FieldErrors::default());
                    on_submit.emit(payload);
                }
                Err(found) => errors.set(found),
            }
        })
    };

    let field_view = |field: &FieldSpec| -> Html {
        let name = field.name;
        let value = values.get(name).to_string();
        let error = errors.get(name).map(str::to_string);

        let control = match field.kind {
            FieldKind::Reference { target, empty_label } => {
                let set_field = set_field.clone();
                html! {
                    <ReferenceSelect
                        id={name}
                        kind={target}
                        value={value}
                        empty_label={empty_label}
                        disabled={props.submitting}
                        on_change={Callback::from(move |selected: String| set_field.emit((name, selected)))}
                    />
                }
            }
            kind => {
                let input_type = match kind {
                    FieldKind::Email => "email",
                    FieldKind::Tel => "tel",
                    _ => "text",
                };
                let set_field = set_field.clone();
                html! {
                    <input
                        type={input_type}
                        id={name}
                        {name}
                        value={value}
                        disabled={props.submitting}
                        oninput={Callback::from(move |e: InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            set_field.emit((name, input.value()));
                        })}
                        class={INPUT}
                    />
                }
            }
        };

        html! {
            <div>
                <label for={name} class="block text-sm font-medium text-gray-300 mb-1">{ field.label }</label>
                { control }
                if let Some(message) = error {
                    <p data-error={name} class="mt-1 text-sm text-red-400">{ message }</p>
                }
            </div>
        }
    };

    let submit_label = if props.submitting {
        "Saving...".to_string()
    } else {
        format!("Save {}", R::SINGULAR)
    };

    html! {
        <form {onsubmit} novalidate=true>
            <div class="space-y-4">
                { for R::FIELDS.iter().map(field_view) }
            </div>
            <div class="mt-6 flex justify-end space-x-2">
                if let Some(on_cancel) = props.on_cancel.clone() {
                    <button
                        type="button"
                        disabled={props.submitting}
                        onclick={Callback::from(move |_: MouseEvent| on_cancel.emit(()))}
                        class="px-4 py-2 border border-gray-600 text-gray-300 rounded-lg hover:bg-gray-700"
                    >
                        {"Cancel"}
                    </button>
                }
                <button
                    type="submit"
                    disabled={props.submitting}
                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg disabled:opacity-50"
                >
                    { submit_label }
                </button>
            </div>
        </form>
    }
}
