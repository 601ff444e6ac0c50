use crate::image_card::ImageCard;
use data::Photo;
use leptos::control_flow::For;
use leptos::prelude::*;
use masonry::GridConfig;

#[component]
pub fn ImageGrid(photos: Memo<Vec<Photo>>) -> impl IntoView {
    let grid = expect_context::<GridConfig>();

    view! {
        <div style=grid.container_style()>
            <For
                each=move || photos.get()
                key=|photo| photo.id.clone()
                children=move |photo| view! { <ImageCard photo=photo/> }
            />
        </div>
    }
}
