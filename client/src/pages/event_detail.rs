//! Event detail with the ticket order form.
//!
//! Anyone may view an event; ordering needs a session, so signed-out
//! visitors get a login link instead of the form.

#[cfg(test)]
#[path = "event_detail_test.rs"]
mod event_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::auth::AuthContext;
use crate::components::field_error::{FieldError, FormNotice};
use crate::net::types::{CreateOrderRequest, Event};
use crate::notify::{Notice, Notifier};
use crate::pages::form::FieldFeedback;
use crate::state::auth::AuthState;
use crate::state::registration::FormError;
use crate::state::toasts::{ToastNotifier, ToastState};
use crate::util::format::{format_datetime, format_price};
use crate::util::mount::MountGuard;

/// Most tickets a single order may request.
pub const MAX_TICKETS_PER_ORDER: u32 = 10;

/// Parse the quantity input against the per-order cap and the remaining stock.
pub(crate) fn parse_quantity(raw: &str, available: Option<u32>) -> Result<u32, FormError> {
    let quantity: u32 = raw
        .trim()
        .parse()
        .map_err(|_| FormError::new("quantity", "Ingresa una cantidad válida."))?;
    if quantity == 0 || quantity > MAX_TICKETS_PER_ORDER {
        return Err(FormError::new("quantity", "Puedes comprar entre 1 y 10 entradas."));
    }
    if available.is_some_and(|left| quantity > left) {
        return Err(FormError::new("quantity", "No hay suficientes entradas disponibles."));
    }
    Ok(quantity)
}

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ctx = expect_context::<AuthContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let mount = MountGuard::new();

    let event = RwSignal::new(None::<Event>);
    let missing = RwSignal::new(false);
    let quantity = RwSignal::new("1".to_owned());
    let busy = RwSignal::new(false);
    let feedback = RwSignal::new(None::<FieldFeedback>);
    let ordered = RwSignal::new(false);

    Effect::new(move || {
        if ordered.get() {
            navigate("/orders", NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    {
        let ctx = ctx.clone();
        let mount = mount.clone();
        let event_id = params.with_untracked(|p| p.get("id")).unwrap_or_default();
        leptos::task::spawn_local(async move {
            let result = ctx.api().get_event(&event_id).await;
            if !mount.is_alive() {
                return;
            }
            match result {
                Ok(found) => event.set(Some(found)),
                Err(_) => missing.set(true),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = params;
    }

    let on_order = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(current) = event.get_untracked() else {
            return;
        };
        let count = match parse_quantity(&quantity.get_untracked(), current.available) {
            Ok(count) => count,
            Err(e) => {
                feedback.set(Some(e.into()));
                return;
            }
        };
        feedback.set(None);
        busy.set(true);

        let ctx = ctx.clone();
        let mount = mount.clone();
        let request = CreateOrderRequest { event_id: current.id, quantity: count };
        leptos::task::spawn_local(async move {
            let result = ctx.api().create_order(&request).await;
            if !mount.is_alive() {
                return;
            }
            busy.set(false);
            match result {
                Ok(_) => {
                    ToastNotifier::new(toasts).notify(Notice::success("¡Compra registrada!"));
                    ordered.set(true);
                }
                Err(e) => feedback.set(FieldFeedback::from_api(&e, &["quantity"])),
            }
        });
    };

    let order_form = move || {
        if !auth.get().is_authenticated() {
            return view! {
                <p class="event-detail__login">
                    <a href="/login">"Inicia sesión"</a>
                    " para comprar entradas."
                </p>
            }
            .into_any();
        }
        view! {
            <form class="order-form" on:submit=on_order.clone()>
                <FormNotice feedback/>
                <label class="form-field">
                    <span>"Entradas"</span>
                    <input
                        type="number"
                        min="1"
                        max=MAX_TICKETS_PER_ORDER.to_string()
                        prop:value=move || quantity.get()
                        on:input=move |ev| quantity.set(event_target_value(&ev))
                    />
                    <FieldError feedback field="quantity"/>
                </label>
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Comprar"
                </button>
            </form>
        }
        .into_any()
    };

    view! {
        <div class="page event-detail">
            {move || {
                if missing.get() {
                    return view! { <p class="page-status">"Evento no disponible."</p> }.into_any();
                }
                let Some(current) = event.get() else {
                    return view! { <p class="page-status">"Cargando evento..."</p> }.into_any();
                };
                let sold_out = current.is_sold_out();
                let order_form = order_form.clone();
                view! {
                    <article>
                        <h1>{current.title}</h1>
                        {current.image_url.map(|src| view! { <img class="event-detail__image" src=src alt=""/> })}
                        <p class="event-detail__meta">
                            {current.date.as_deref().map(format_datetime)}
                            " · "
                            {current.location.unwrap_or_default()}
                        </p>
                        <p class="event-detail__price">{format_price(current.price)}</p>
                        {current.description.map(|d| view! { <p class="event-detail__description">{d}</p> })}
                        <Show
                            when=move || !sold_out
                            fallback=|| view! { <p class="event-detail__sold-out">"Entradas agotadas"</p> }
                        >
                            {order_form.clone()}
                        </Show>
                    </article>
                }
                    .into_any()
            }}
        </div>
    }
}
