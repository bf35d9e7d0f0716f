//! Root application component with routing and context providers.
//!
//! This is the composition root: it builds the one `ApiClient` the whole app
//! shares and seeds auth state from the persisted session.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::ApiClient;
use crate::pages::{login::LoginPage, products::ProductsPage};
use crate::state::auth::AuthState;

/// Root application component.
///
/// Provides the shared client and auth state, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let client = ApiClient::browser(ClientConfig::default());
    let auth = RwSignal::new(AuthState::from_session(client.session()));

    provide_context(client);
    provide_context(auth);

    view! {
        <Title text="Storefront"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=ProductsPage/>
            </Routes>
        </Router>
    }
}
