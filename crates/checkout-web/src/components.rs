//! UI Components

use leptos::prelude::*;

use checkout_core::{Product, money};

/// Product card with a selectable badge
#[component]
pub fn ProductCard(
    product: Product,
    #[prop(into)] selected: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class=move || {
                if selected.get() { "product-card selected" } else { "product-card" }
            }
            on:click=move |_| on_select.run(())
        >
            <div class="product-image">
                <img src=product.image.clone() alt=product.name.clone() />
                <Show when=move || selected.get()>
                    <div class="selected-badge">"✓"</div>
                </Show>
            </div>
            <div class="product-info">
                <h3>{product.name.clone()}</h3>
                <p>{product.description.clone()}</p>
                <div class="product-price">{money::format_minor(product.price)}</div>
            </div>
        </div>
    }
}

/// Terminal outcome shown after returning from the hosted page
#[component]
pub fn OutcomeMessage(message: String) -> impl IntoView {
    view! {
        <section class="message-container">
            <p>{message}</p>
            <a href="/" class="back-button">"Back to Payment"</a>
        </section>
    }
}
