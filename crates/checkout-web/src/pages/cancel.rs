//! Cancel Page

use leptos::prelude::*;

#[component]
pub fn CancelPage() -> impl IntoView {
    view! {
        <div class="outcome">
            <header class="shop-header">
                <h1>"Payment Cancelled"</h1>
            </header>
            <section class="message-container">
                <p>"Your order has been cancelled."</p>
                <p>"No charges have been made to your account."</p>
                <a href="/" class="back-button">"Return to Shop"</a>
            </section>
        </div>
    }
}
