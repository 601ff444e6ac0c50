use data::Photo;
use leptos::html::Img;
use leptos::prelude::*;
use log::warn;
use masonry::{GridConfig, TileLayout};

/// One photo of the grid. The tile spans as many grid rows as its image is
/// tall, measured once after the image has loaded.
#[component]
pub fn ImageCard(photo: Photo) -> impl IntoView {
    let grid = expect_context::<GridConfig>();
    let layout = RwSignal::new(TileLayout::default());
    let image_ref = NodeRef::<Img>::new();

    let alt = photo.alt_text().to_string();
    let alt_for_placeholder = alt.clone();
    let src = photo.display_url().to_string();
    let background = photo.color.clone().unwrap_or_else(|| "#ddd".to_string());
    let photo_id = StoredValue::new(photo.id.clone());

    // Both listeners live as long as the <img> and go away with the tile.
    let on_load = move |_| {
        if let Some(image) = image_ref.get_untracked() {
            let height = f64::from(image.client_height());
            layout.update(|tile| {
                tile.on_load(height, &grid);
            });
        }
    };
    let on_error = move |_| {
        warn!("Image {} failed to load", photo_id.get_value());
        layout.update(|tile| {
            tile.on_error(&grid);
        });
    };

    let tile_style = move || {
        format!(
            "{} background-color: {};",
            grid.tile_style(layout.get().span()),
            background
        )
    };

    view! {
        <div style=tile_style>
            <Show
                when=move || layout.get().is_failed()
                fallback=move || view! {
                    <img
                        node_ref=image_ref
                        src=src.clone()
                        alt=alt.clone()
                        on:load=on_load
                        on:error=on_error
                        style="width: 100%; display: block;"
                    />
                }
            >
                <div
                    title=alt_for_placeholder.clone()
                    style="height: 100%; overflow: hidden; font-size: 0.7rem; color: #333;"
                >
                    {alt_for_placeholder.clone()}
                </div>
            </Show>
        </div>
    }
}
