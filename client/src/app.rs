use crate::image_grid::ImageGrid;
use crate::search_bar::SearchBar;
use crate::unsplash::UnsplashClient;
use data::{ApiConfig, SearchSession, SearchStatus};
use leptos::prelude::*;
use log::{info, warn};
use masonry::GridConfig;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    let api = ApiConfig::from_build_env();
    if api.access_key.is_none() {
        warn!("UNSPLASH_ACCESS_KEY was not set at build time, searches will fail");
    }
    info!("Searching photos via {}", api.base_url);

    provide_context(GridConfig::default());
    let session = RwSignal::new(SearchSession::new(api.per_page));
    let client = StoredValue::new(UnsplashClient::new(api));

    let perform_search = move |term: String| {
        if term.is_empty() {
            return;
        }
        let Some(ticket) = session.try_update(|s| s.begin(&term)).flatten() else {
            return;
        };
        let client = client.get_value();
        spawn_local(async move {
            let outcome = ticket.execute(&client).await;
            session.update(|s| {
                s.complete(outcome);
            });
        });
    };

    let photos = Memo::new(move |_| session.with(|s| s.results().to_vec()));
    let searching = Signal::derive(move || session.with(SearchSession::is_loading));
    let total = Signal::derive(move || {
        session.with(|s| (s.status() == &SearchStatus::Loaded).then(|| s.total()))
    });

    let banner = move || match session.with(|s| s.status().clone()) {
        SearchStatus::Failed(err) => Some(
            view! {
                <p role="alert" style="margin: 0 1rem 1rem; color: #b00020;">
                    {err.to_string()}
                </p>
            }
            .into_any(),
        ),
        SearchStatus::Loaded if photos.with(Vec::is_empty) => Some(
            view! { <p style="margin: 0 1rem 1rem; color: #666;">"No photos found."</p> }
                .into_any(),
        ),
        _ => None,
    };

    view! {
        <div style="display: flex; flex-direction: column; min-height: 100vh; font-family: sans-serif;">
            <SearchBar on_submit=perform_search searching=searching total=total />
            <main style="flex: 1; padding: 0 1rem 1rem;">
                {banner}
                <ImageGrid photos=photos />
            </main>
        </div>
    }
}
