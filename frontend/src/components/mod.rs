pub mod entity_form;
pub mod entity_list;
pub mod entity_view;
pub mod layout;
pub mod modal;
pub mod reference_select;

#[cfg(all(test, target_arch = "wasm32"))]
mod test_dom;

pub use entity_form::EntityForm;
pub use entity_list::EntityList;
pub use modal::Modal;
pub use reference_select::ReferenceSelect;
