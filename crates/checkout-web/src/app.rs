//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::{CancelPage, ShopPage, SuccessPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=ShopPage />
                    <Route path=path!("/success") view=SuccessPage />
                    <Route path=path!("/cancel") view=CancelPage />
                </Routes>
            </main>
        </Router>
    }
}
