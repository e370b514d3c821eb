use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="max-w-3xl mx-auto">
            <div class="bg-gray-800 rounded-lg border border-gray-700 p-8">
                <h1 class="text-2xl font-bold text-white mb-2">{"Roster"}</h1>
                <p class="text-gray-400 mb-6">{"Keep track of the organizations you work with and the people in them."}</p>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <HomeCard
                        route={Route::Contacts}
                        title="Contacts"
                        description="Search, add and edit people."
                    />
                    <HomeCard
                        route={Route::Organizations}
                        title="Organizations"
                        description="Manage companies and their addresses."
                    />
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HomeCardProps {
    route: Route,
    title: &'static str,
    description: &'static str,
}

#[function_component(HomeCard)]
fn home_card(props: &HomeCardProps) -> Html {
    html! {
        <Link<Route>
            to={props.route.clone()}
            classes="block bg-gray-700 hover:bg-gray-600 rounded-lg p-5 border border-gray-600"
        >
            <h2 class="text-lg font-semibold text-white">{props.title}</h2>
            <p class="text-sm text-gray-300 mt-1">{props.description}</p>
        </Link<Route>>
    }
}
