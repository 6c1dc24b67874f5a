//! Orders table: the participant's tickets, or an organizer's sales.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. The list is requested once the session is known to be
//! authenticated, since a direct load mounts the page before hydration.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::AuthContext;
use crate::net::types::Order;
use crate::state::auth::AuthState;
use crate::state::registration::Role;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::{format_datetime, format_price};
use crate::util::mount::MountGuard;

/// Spanish label for a backend order status.
pub(crate) fn status_label(status: Option<&str>) -> String {
    match status.map(str::trim).map(str::to_ascii_lowercase).as_deref() {
        None | Some("") => "—".to_owned(),
        Some("pending") => "Pendiente".to_owned(),
        Some("paid" | "completed" | "confirmed") => "Pagado".to_owned(),
        Some("cancelled" | "canceled") => "Cancelado".to_owned(),
        Some("refunded") => "Reembolsado".to_owned(),
        Some(_) => status.unwrap_or_default().trim().to_owned(),
    }
}

/// Sum of known order totals.
pub(crate) fn orders_total(orders: &[Order]) -> f64 {
    orders.iter().filter_map(|o| o.total).sum()
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ctx = expect_context::<AuthContext>();
    let mount = MountGuard::new();
    install_unauth_redirect(auth, use_navigate());

    let orders = RwSignal::new(None::<Vec<Order>>);
    let requested = RwSignal::new(false);

    Effect::new(move || {
        if requested.get() || !auth.get().is_authenticated() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        {
            let ctx = ctx.clone();
            let mount = mount.clone();
            leptos::task::spawn_local(async move {
                let result = ctx.api().list_orders().await;
                if mount.is_alive() {
                    orders.set(Some(result.unwrap_or_default()));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&ctx, &mount);
        }
    });

    let title = move || match auth.get().role() {
        Some(Role::Organizer) => "Ventas de mis eventos",
        _ => "Mis entradas",
    };

    view! {
        <div class="page orders-page">
            <h1>{title}</h1>
            {move || match orders.get() {
                None => view! { <p class="page-status">"Cargando pedidos..."</p> }.into_any(),
                Some(list) if list.is_empty() => {
                    view! {
                        <p class="page-status">
                            "Aún no tienes pedidos. "
                            <a href="/">"Explora eventos"</a>
                        </p>
                    }
                        .into_any()
                }
                Some(list) => {
                    let total = format_price(Some(orders_total(&list)));
                    view! {
                        <table class="orders-table">
                            <thead>
                                <tr>
                                    <th>"Pedido"</th>
                                    <th>"Evento"</th>
                                    <th>"Entradas"</th>
                                    <th>"Total"</th>
                                    <th>"Estado"</th>
                                    <th>"Fecha"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|order| {
                                        let event_href = format!("/events/{}", order.event_id);
                                        let event_label = order.event_title.clone().unwrap_or_else(|| format!("#{}", order.event_id));
                                        view! {
                                            <tr>
                                                <td>{format!("#{}", order.id)}</td>
                                                <td><a href=event_href>{event_label}</a></td>
                                                <td>{order.quantity}</td>
                                                <td>{format_price(order.total)}</td>
                                                <td>{status_label(order.status.as_deref())}</td>
                                                <td>{order.created_at.as_deref().map(format_datetime).unwrap_or_default()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                            <tfoot>
                                <tr>
                                    <td colspan="3">"Total"</td>
                                    <td colspan="3">{total}</td>
                                </tr>
                            </tfoot>
                        </table>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
