//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::use_navigate;
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::AuthContext;
use crate::components::{nav_bar::NavBar, toast_host::ToastHost};
use crate::config::API_URL_META;
use crate::pages::{
    change_password::ChangePasswordPage, event_detail::EventDetailPage, events::EventsPage,
    google_callback::GoogleCallbackPage, login::LoginPage, orders::OrdersPage, profile::ProfilePage,
    register::RegisterPage, reset_password::ResetPasswordPage,
};
use crate::routing::{LOGIN_PATH, NavState};
use crate::state::{auth::AuthState, toasts::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_url` is exposed to the browser bundle through a meta tag so one host
/// setting decides which backend every request goes to.
pub fn shell(options: LeptosOptions, api_url: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_URL_META content=api_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth, toast and navigation contexts, hydrates the session
/// once in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    let nav = RwSignal::new(NavState::default());
    let ctx = AuthContext::browser(auth, toasts, nav);

    provide_context(auth);
    provide_context(toasts);
    provide_context(nav);
    provide_context(ctx.clone());

    // Effects only run in the browser, where the durable cache lives.
    Effect::new(move || {
        ctx.hydrate();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/evently.css"/>
        <Title text="Evently"/>

        <Router>
            <LoginRedirects nav/>
            <NavBar/>
            <ToastHost/>
            <main class="app-main">
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route path=StaticSegment("") view=EventsPage/>
                    <Route path=(StaticSegment("events"), ParamSegment("id")) view=EventDetailPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("google"), StaticSegment("callback"))
                        view=GoogleCallbackPage
                    />
                    <Route path=StaticSegment("forgot-password") view=ResetPasswordPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("change-password") view=ChangePasswordPage/>
                    <Route path=StaticSegment("orders") view=OrdersPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Performs the login redirects requested through [`NavState`].
#[component]
fn LoginRedirects(nav: RwSignal<NavState>) -> impl IntoView {
    let navigate = use_navigate();
    let handled = RwSignal::new(nav.get_untracked().login_redirect_seq);

    Effect::new(move || {
        let seq = nav.get().login_redirect_seq;
        if seq == handled.get_untracked() {
            return;
        }
        handled.set(seq);
        navigate(LOGIN_PATH, NavigateOptions::default());
    });
}
