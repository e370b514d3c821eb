use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    /// Keeps the dialog open while a submission is in flight.
    #[prop_or_default]
    pub close_disabled: bool,
    pub children: Html,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        let disabled = props.close_disabled;
        Callback::from(move |_: MouseEvent| {
            if !disabled {
                on_close.emit(());
            }
        })
    };

    html! {
        <div class="fixed inset-0 z-50 overflow-y-auto">
            <div class="flex min-h-full items-center justify-center p-4">
                // Backdrop
                <div class="fixed inset-0 bg-black/50" onclick={close.clone()}></div>

                <div class="relative bg-gray-800 rounded-lg shadow-xl border border-gray-700 w-full max-w-lg">
                    <div class="px-6 py-4 border-b border-gray-700 flex items-center justify-between">
                        <h3 class="text-lg font-medium text-white">{ props.title.clone() }</h3>
                        <button
                            type="button"
                            onclick={close}
                            disabled={props.close_disabled}
                            class="text-gray-400 hover:text-white"
                        >
                            <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                            </svg>
                        </button>
                    </div>
                    <div class="p-6">
                        { props.children.clone() }
                    </div>
                </div>
            </div>
        </div>
    }
}
