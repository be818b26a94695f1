//! Shop Page
//!
//! Amount entry, product selection, and the checkout trigger. Returning
//! from the hosted payment page lands back here with a `success` or
//! `canceled` query parameter that selects the terminal message.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use checkout_core::{Cart, LineItem, Product, money};

use crate::api;
use crate::components::{OutcomeMessage, ProductCard};

/// Mirror of the amount input filter: digits with at most two decimals
fn is_partial_amount(value: &str) -> bool {
    let mut parts = value.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    let frac = parts.next();
    !whole.is_empty()
        && whole.chars().all(|c| c.is_ascii_digit())
        && frac.is_none_or(|f| f.len() <= 2 && f.chars().all(|c| c.is_ascii_digit()))
}

#[component]
pub fn ShopPage() -> impl IntoView {
    let query = use_query_map();
    let outcome = move || {
        query.with(|q| {
            if q.get("success").is_some() {
                Some("Payment successful! You will receive an email confirmation.".to_string())
            } else if q.get("canceled").is_some() {
                Some("Payment canceled -- you can try again when you're ready.".to_string())
            } else {
                None
            }
        })
    };

    let (amount, set_amount) = signal(String::new());
    let (cart, set_cart) = signal(Cart::new());
    let (loading, set_loading) = signal(false);
    let (products, set_products) = signal(Vec::<Product>::new());
    let (catalog_error, set_catalog_error) = signal(None::<String>);

    Effect::new(move |_| {
        leptos::task::spawn_local(async move {
            match api::load_products().await {
                Ok(list) => set_products.set(list),
                Err(e) => set_catalog_error.set(Some(e.user_message())),
            }
        });
    });

    // The triggering control stays disabled while a request is in flight,
    // so no two session requests run concurrently from one interaction.
    let start_checkout = move |items: Vec<LineItem>| {
        if loading.get_untracked() {
            return;
        }
        set_loading.set(true);
        leptos::task::spawn_local(async move {
            if let Err(e) = api::checkout(&items).await {
                api::alert(&e.user_message());
            }
            set_loading.set(false);
        });
    };

    let pay_amount = move |_| match money::parse_amount(&amount.get_untracked()) {
        Ok(minor) => {
            let item =
                LineItem::new("Custom Payment", minor, 1).with_description("One-time payment");
            start_checkout(vec![item]);
        }
        Err(e) => api::alert(&e.user_message()),
    };

    let pay_cart = move |_| {
        let items = cart.with_untracked(Cart::line_items);
        start_checkout(items);
    };

    let on_amount_input = move |ev| {
        let value = event_target_value(&ev);
        if value.is_empty() || is_partial_amount(&value) {
            set_amount.set(value);
        }
    };

    let amount_valid = move || money::parse_amount(&amount.get()).is_ok();

    view! {
        <div class="shop">
            <header class="shop-header">
                <h1>"Payment Form"</h1>
            </header>

            {move || match outcome() {
                Some(message) => view! { <OutcomeMessage message /> }.into_any(),
                None => {
                    view! {
                        <div class="payment-container">
                            <div class="payment-form">
                                <h2>"Enter Payment Amount"</h2>
                                <div class="amount-input-container">
                                    <span class="currency-symbol">"£"</span>
                                    <input
                                        type="text"
                                        placeholder="0.00"
                                        class="amount-input"
                                        prop:value=move || amount.get()
                                        on:input=on_amount_input
                                    />
                                </div>
                                <button
                                    class="checkout-button"
                                    on:click=pay_amount
                                    disabled=move || loading.get() || !amount_valid()
                                >
                                    "Pay Now"
                                </button>
                            </div>

                            <div class="product-list-container">
                                <h2>"Select Products"</h2>
                                {move || {
                                    catalog_error
                                        .get()
                                        .map(|e| view! { <div class="error">{e}</div> })
                                }}
                                <div class="product-list">
                                    <For
                                        each=move || products.get()
                                        key=|product| product.id.clone()
                                        children=move |product| {
                                            let selected = Signal::derive({
                                                let id = product.id.clone();
                                                move || cart.with(|c| c.contains(&id))
                                            });
                                            let on_select = Callback::new({
                                                let product = product.clone();
                                                move |()| set_cart.update(|c| c.toggle(&product))
                                            });
                                            view! {
                                                <ProductCard product selected on_select />
                                            }
                                        }
                                    />
                                </div>

                                <Show when=move || !cart.with(Cart::is_empty)>
                                    <div class="selected-products">
                                        <h3>"Selected Products"</h3>
                                        <table class="selected-table">
                                            <thead>
                                                <tr>
                                                    <th>"Product"</th>
                                                    <th>"Price"</th>
                                                    <th>"Quantity"</th>
                                                    <th>"Subtotal"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                <For
                                                    each=move || cart.get().selections().to_vec()
                                                    key=|sel| (sel.product.id.clone(), sel.quantity)
                                                    children=move |sel| {
                                                        let id = sel.product.id.clone();
                                                        let subtotal = sel
                                                            .product
                                                            .price
                                                            .saturating_mul(i64::from(sel.quantity));
                                                        view! {
                                                            <tr>
                                                                <td>{sel.product.name.clone()}</td>
                                                                <td>
                                                                    {money::format_minor(sel.product.price)}
                                                                </td>
                                                                <td>
                                                                    <input
                                                                        type="number"
                                                                        min="1"
                                                                        prop:value=sel.quantity.to_string()
                                                                        on:change=move |ev| {
                                                                            let quantity = event_target_value(&ev)
                                                                                .parse()
                                                                                .unwrap_or(1);
                                                                            set_cart
                                                                                .update(|c| c.set_quantity(&id, quantity));
                                                                        }
                                                                    />
                                                                </td>
                                                                <td>{money::format_minor(subtotal)}</td>
                                                            </tr>
                                                        }
                                                    }
                                                />
                                            </tbody>
                                            <tfoot>
                                                <tr>
                                                    <td colspan="3" class="total-label">
                                                        "Total:"
                                                    </td>
                                                    <td class="total-amount">
                                                        {move || {
                                                            money::format_minor(cart.with(Cart::total))
                                                        }}
                                                    </td>
                                                </tr>
                                            </tfoot>
                                        </table>

                                        <button
                                            class="checkout-button"
                                            on:click=pay_cart
                                            disabled=move || loading.get()
                                        >
                                            "Proceed to Checkout"
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}

            <Show when=move || loading.get()>
                <div class="loading-overlay">
                    <div class="spinner"></div>
                    <p>"Processing your payment..."</p>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_filter() {
        assert!(is_partial_amount("12"));
        assert!(is_partial_amount("12."));
        assert!(is_partial_amount("12.3"));
        assert!(is_partial_amount("12.34"));

        assert!(!is_partial_amount("12.345"));
        assert!(!is_partial_amount(".5"));
        assert!(!is_partial_amount("12a"));
        assert!(!is_partial_amount("1.2.3"));
    }
}
