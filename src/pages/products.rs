//! Catalog page listing products with search and add-to-cart.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Every call goes through the shared
//! `ApiClient`, so an expired token lands the user back on `/login`.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_input::FormInput;
use crate::net::types::{AddCartItem, Product, User};
use crate::net::{ApiClient, api};
use crate::state::auth::AuthState;
use crate::state::catalog::CatalogState;
use crate::util::auth::install_unauth_redirect;

fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

fn stock_label(quantity: Option<i32>) -> &'static str {
    match quantity {
        Some(q) if q <= 0 => "Out of stock",
        Some(_) | None => "In stock",
    }
}

fn cart_notice(product_name: &str, total_items: i32) -> String {
    let noun = if total_items == 1 { "item" } else { "items" };
    format!("Added {product_name}. Cart now has {total_items} {noun}.")
}

fn header_name(user: Option<&User>) -> String {
    user.map_or_else(|| "Guest".to_owned(), User::display_name)
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let catalog = RwSignal::new(CatalogState::default());
    let search = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<String>);

    install_unauth_redirect(auth, use_navigate());

    let load = {
        let client = client.clone();
        move |term: String| {
            let client = client.clone();
            catalog.update(CatalogState::begin_fetch);
            leptos::task::spawn_local(async move {
                let term = term.trim();
                let outcome = if term.is_empty() {
                    api::fetch_products(&client).await
                } else {
                    api::search_products(&client, term).await
                };
                catalog.update(|s| s.apply(outcome));
            });
        }
    };

    if auth.get_untracked().user.is_some() {
        load(String::new());
    }

    let on_search = {
        let load = load.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            load(search.get_untracked());
        }
    };

    let on_logout = {
        let client = client.clone();
        move |_| {
            api::logout(&client);
            auth.set(AuthState::default());
        }
    };

    let add_to_cart = {
        let client = client.clone();
        Callback::new(move |product: Product| {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let item = AddCartItem::for_product(&product, 1);
                match api::add_cart_item(&client, &item).await {
                    Ok(cart) => notice.set(Some(cart_notice(&product.name, cart.total_items))),
                    Err(err) => notice.set(Some(err.user_message())),
                }
            });
        })
    };

    let user_name = move || header_name(auth.get().user.as_ref());

    view! {
        <div class="catalog-page">
            <header class="catalog-header">
                <h1>"Products"</h1>
                <span class="catalog-header__user">{user_name}</span>
                <button class="catalog-header__logout" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <form class="catalog-search" on:submit=on_search>
                <FormInput
                    label="Search"
                    id="catalog-search"
                    input_type="search"
                    placeholder="Lamp, desk, chair..."
                    full_width=false
                    value=Signal::derive(move || Some(search.get()))
                    on_input=Callback::new(move |v: String| search.set(v))
                />
                <button class="catalog-search__button" type="submit">
                    "Search"
                </button>
            </form>
            <Show when=move || notice.get().is_some()>
                <p class="catalog-notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || catalog.get().error.is_some()>
                <p class="catalog-error">{move || catalog.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || catalog.get().loading>
                <p class="catalog-loading">"Loading..."</p>
            </Show>
            <ul class="product-list">
                <For
                    each=move || catalog.get().items
                    key=|product| product.id
                    children=move |product: Product| {
                        let to_add = product.clone();
                        view! {
                            <li class="product-list__item">
                                <span class="product-list__name">{product.name}</span>
                                <span class="product-list__price">{format_price(product.price)}</span>
                                <span class="product-list__stock">{stock_label(product.quantity)}</span>
                                <button
                                    class="product-list__add"
                                    disabled=product.quantity.is_some_and(|q| q <= 0)
                                    on:click=move |_| add_to_cart.run(to_add.clone())
                                >
                                    "Add to cart"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
