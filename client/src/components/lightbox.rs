//! Full-screen viewer for the selected gallery photo.

use leptos::prelude::*;

use crate::net::types::{CmsDate, GalleryItem};
use crate::state::gallery::image_alt;

/// Lightbox for one photo. Closes on backdrop click, the close button, or Escape.
#[component]
pub fn Lightbox(item: GalleryItem, on_close: Callback<()>) -> impl IntoView {
    let backdrop_ref = NodeRef::<leptos::html::Div>::new();
    let alt = image_alt(&item);
    let taken = item.date_taken.as_ref().map(CmsDate::long_label);
    let GalleryItem { gallery_image, caption, photographer, .. } = item;

    // Focus the backdrop so Escape reaches the keydown handler.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if let Some(el) = backdrop_ref.get() {
                let _ = el.focus();
            }
        });
    }

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div
            class="lightbox"
            role="dialog"
            aria-modal="true"
            tabindex="0"
            node_ref=backdrop_ref
            on:click=move |_| on_close.run(())
            on:keydown=on_keydown
        >
            <div class="lightbox__panel" on:click=move |ev| ev.stop_propagation()>
                <button class="lightbox__close" aria-label="Close" on:click=move |_| on_close.run(())>
                    "×"
                </button>
                {gallery_image.map(|src| view! { <img class="lightbox__image" src=src alt=alt/> })}
                <div class="lightbox__details">
                    {caption.map(|text| view! { <h3 class="lightbox__caption">{text}</h3> })}
                    <div class="lightbox__meta">
                        {photographer.map(|name| view! { <span>{format!("📷 Photographer: {name}")}</span> })}
                        {taken.map(|label| view! { <span>{label}</span> })}
                    </div>
                </div>
            </div>
        </div>
    }
}
