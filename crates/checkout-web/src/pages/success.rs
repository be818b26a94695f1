//! Success Page

use leptos::prelude::*;

#[component]
pub fn SuccessPage() -> impl IntoView {
    view! {
        <div class="outcome">
            <header class="shop-header">
                <h1>"Payment Successful!"</h1>
            </header>
            <section class="message-container">
                <p>"Thank you for your purchase!"</p>
                <p>"We've sent you an email with your order details."</p>
                <a href="/" class="back-button">"Return to Shop"</a>
            </section>
        </div>
    }
}
