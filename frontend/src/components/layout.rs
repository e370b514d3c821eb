use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contacts")]
    Contacts,
    #[at("/organizations")]
    Organizations,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let current_route = use_route::<Route>().unwrap_or(Route::NotFound);

    html! {
        <div class="min-h-screen bg-gray-900 flex flex-col">
            <header class="bg-gray-800 border-b border-gray-700 h-14 flex-shrink-0">
                <div class="h-full flex items-center px-4 space-x-6">
                    <Link<Route> to={Route::Home} classes="flex items-center space-x-2">
                        <div class="w-8 h-8 bg-blue-500 rounded flex items-center justify-center">
                            <span class="text-white font-bold text-lg">{"R"}</span>
                        </div>
                        <span class="text-white font-semibold text-lg">{"Roster"}</span>
                    </Link<Route>>

                    <nav class="flex items-center space-x-1">
                        <NavTab route={Route::Home} label="Home" current={current_route.clone()} />
                        <NavTab route={Route::Contacts} label="Contacts" current={current_route.clone()} />
                        <NavTab route={Route::Organizations} label="Organizations" current={current_route.clone()} />
                    </nav>
                </div>
            </header>

            <main class="flex-1 overflow-y-auto p-6">
                {props.children.clone()}
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NavTabProps {
    route: Route,
    label: &'static str,
    current: Route,
}

#[function_component(NavTab)]
fn nav_tab(props: &NavTabProps) -> Html {
    let is_active = props.route == props.current;
    let classes = if is_active {
        "px-3 py-2 text-sm font-medium text-white border-b-2 border-blue-500"
    } else {
        "px-3 py-2 text-sm font-medium text-gray-300 hover:text-white border-b-2 border-transparent hover:border-gray-500"
    };

    html! {
        <Link<Route> to={props.route.clone()} classes={classes}>
            {props.label}
        </Link<Route>>
    }
}
