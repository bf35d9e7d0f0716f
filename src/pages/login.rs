//! Login page: email + password form backed by `POST /api/auth/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is where the 401 handler sends the browser. A successful login stores
//! the session through the shared `ApiClient` and moves on to the catalog.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_input::FormInput;
use crate::net::{ApiClient, api};
use crate::state::auth::AuthState;

const EMAIL_REQUIRED: &str = "Email is required";
const EMAIL_INVALID: &str = "Enter a valid email address";
const PASSWORD_REQUIRED: &str = "Password is required";

/// Per-field validation messages for the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct LoginFieldErrors {
    email: Option<&'static str>,
    password: Option<&'static str>,
}

/// Trim and check the login fields before anything is sent.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), LoginFieldErrors> {
    let email = email.trim();
    let mut errors = LoginFieldErrors::default();
    if email.is_empty() {
        errors.email = Some(EMAIL_REQUIRED);
    } else if !looks_like_email(email) {
        errors.email = Some(EMAIL_INVALID);
    }
    if password.is_empty() {
        errors.password = Some(PASSWORD_REQUIRED);
    }
    if errors == LoginFieldErrors::default() {
        Ok((email.to_owned(), password.to_owned()))
    } else {
        Err(errors)
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let form_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let email_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(input) = email_ref.get() {
            let _ = input.focus();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        form_error.set(None);
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(fields) => {
                    email_error.set(None);
                    password_error.set(None);
                    fields
                }
                Err(errors) => {
                    email_error.set(errors.email.map(str::to_owned));
                    password_error.set(errors.password.map(str::to_owned));
                    return;
                }
            };

        busy.set(true);
        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&client, &email_value, &password_value).await {
                Ok(user) => {
                    auth.set(AuthState { user, loading: false });
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => {
                    leptos::logging::warn!("login failed: {err}");
                    form_error.set(Some(err.user_message()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit novalidate=true>
                    <FormInput
                        label="Email"
                        id="login-email"
                        name="email"
                        input_type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        node_ref=email_ref
                        value=Signal::derive(move || Some(email.get()))
                        error=Signal::derive(move || email_error.get())
                        disabled=Signal::derive(move || Some(busy.get()))
                        on_input=Callback::new(move |v: String| email.set(v))
                    />
                    <FormInput
                        label="Password"
                        id="login-password"
                        name="password"
                        input_type="password"
                        autocomplete="current-password"
                        value=Signal::derive(move || Some(password.get()))
                        error=Signal::derive(move || password_error.get())
                        disabled=Signal::derive(move || Some(busy.get()))
                        on_input=Callback::new(move |v: String| password.set(v))
                    />
                    <Show when=move || form_error.get().is_some()>
                        <p class="login-message login-message--error">
                            {move || form_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
