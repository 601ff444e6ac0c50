use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn SearchBar(
    on_submit: impl Fn(String) + 'static + Copy,
    #[prop(into)] searching: Signal<bool>,
    #[prop(into)] total: Signal<Option<u64>>,
) -> impl IntoView {
    let (term, set_term) = signal(String::new());

    let on_form_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit(term.get());
    };

    view! {
        <form
            autocomplete="off"
            novalidate=true
            on:submit=on_form_submit
            style="
                display: flex;
                flex-wrap: wrap;
                align-items: center;
                gap: 1rem;
                padding: 1rem;
            "
        >
            <label style="display: flex; flex-direction: column; font-size: 0.8rem; color: #666;">
                "Image Search"
                <input
                    type="search"
                    prop:value=term
                    on:input=move |ev| set_term.set(event_target_value(&ev))
                    style="
                        width: 200px;
                        margin: 0.25rem 0.5rem 0;
                        padding: 0.25rem 0;
                        font-size: 1rem;
                        border: none;
                        border-bottom: 1px solid #888;
                        outline: none;
                    "
                />
            </label>
            <Show
                when=move || searching.get()
                fallback=move || {
                    total
                        .get()
                        .map(|total| view! { <span style="color: #888;">{format!("{total} photos")}</span> })
                }
            >
                <span style="color: #888;">"Searching…"</span>
            </Show>
        </form>
    }
}
