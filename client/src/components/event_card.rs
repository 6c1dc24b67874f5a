//! Summary card for one event in the discovery list.

use leptos::prelude::*;

use crate::net::types::Event;
use crate::util::format::{format_datetime, format_price};

#[component]
pub fn EventCard(event: Event) -> impl IntoView {
    let href = format!("/events/{}", event.id);
    let date = event.date.as_deref().map(format_datetime);
    let sold_out = event.is_sold_out();

    view! {
        <a class="event-card" class:event-card--sold-out=sold_out href=href>
            {event.image_url.map(|src| view! { <img class="event-card__image" src=src alt=""/> })}
            <span class="event-card__title">{event.title}</span>
            {date.map(|d| view! { <span class="event-card__date">{d}</span> })}
            {event.location.map(|l| view! { <span class="event-card__location">{l}</span> })}
            <span class="event-card__price">{format_price(event.price)}</span>
            <Show when=move || sold_out>
                <span class="event-card__badge">"Agotado"</span>
            </Show>
        </a>
    }
}
