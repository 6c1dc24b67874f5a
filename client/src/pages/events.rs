//! Event discovery: the public landing route.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use leptos::prelude::*;

use crate::auth::AuthContext;
use crate::components::event_card::EventCard;
use crate::net::types::Event;
use crate::util::mount::MountGuard;

/// Events whose title or location contains every word of `query`.
pub(crate) fn filter_events(events: &[Event], query: &str) -> Vec<Event> {
    let words: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    events
        .iter()
        .filter(|event| {
            let haystack = format!("{} {}", event.title, event.location.as_deref().unwrap_or_default()).to_lowercase();
            words.iter().all(|w| haystack.contains(w.as_str()))
        })
        .cloned()
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
enum Listing {
    #[default]
    Loading,
    Ready(Vec<Event>),
    Failed,
}

#[component]
pub fn EventsPage() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let mount = MountGuard::new();
    let listing = RwSignal::new(Listing::Loading);
    let query = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = ctx.api().list_events().await;
        if mount.is_alive() {
            listing.set(result.map_or(Listing::Failed, Listing::Ready));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ctx, mount);
    }

    view! {
        <div class="page events-page">
            <header class="events-page__header">
                <h1>"Próximos eventos"</h1>
                <input
                    class="events-page__search"
                    type="search"
                    placeholder="Buscar por nombre o lugar"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </header>
            {move || match listing.get() {
                Listing::Loading => view! { <p class="page-status">"Cargando eventos..."</p> }.into_any(),
                Listing::Failed => view! { <p class="page-status">"No se pudieron cargar los eventos."</p> }.into_any(),
                Listing::Ready(events) => {
                    let visible = filter_events(&events, &query.get());
                    if visible.is_empty() {
                        view! { <p class="page-status">"No hay eventos que coincidan."</p> }.into_any()
                    } else {
                        view! {
                            <div class="events-grid">
                                {visible.into_iter().map(|event| view! { <EventCard event/> }).collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
