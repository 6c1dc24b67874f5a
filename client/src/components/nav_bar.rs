//! Top navigation bar with auth-dependent links.

use leptos::prelude::*;

use crate::auth::AuthContext;
use crate::state::auth::AuthState;
use crate::state::registration::Role;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ctx = expect_context::<AuthContext>();

    let signed_in = move || auth.get().is_authenticated();
    let greeting = move || auth.get().display_name().unwrap_or_default();
    let orders_label = move || match auth.get().role() {
        Some(Role::Organizer) => "Ventas",
        _ => "Mis entradas",
    };
    let on_logout = move |_: leptos::ev::MouseEvent| ctx.logout();

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"Evently"</a>
            <div class="nav-bar__links">
                <a href="/">"Eventos"</a>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <a href="/login">"Iniciar sesión"</a>
                            <a class="nav-bar__cta" href="/register">"Registrarse"</a>
                        }
                    }
                >
                    <a href="/orders">{orders_label}</a>
                    <a href="/profile" class="nav-bar__user">{greeting}</a>
                    <button class="nav-bar__logout" on:click=on_logout.clone()>"Cerrar sesión"</button>
                </Show>
            </div>
        </nav>
    }
}
