use roster_shared::Organizations;
use yew::prelude::*;

use crate::components::EntityList;
use crate::components::entity_view::EntityView;

#[function_component(OrganizationsPage)]
pub fn organizations_page() -> Html {
    html! {
        <div>
            <h1 class="text-2xl font-semibold text-white mb-4">{ Organizations::TITLE }</h1>
            <EntityList<Organizations> show_create=true />
        </div>
    }
}
