//! Grid card for one gallery photo.

use leptos::prelude::*;

use crate::net::types::{CmsDate, GalleryItem};
use crate::state::gallery::image_alt;

/// A clickable photo card. Odd-indexed cards sit lower to stagger the grid.
#[component]
pub fn GalleryCard(item: GalleryItem, index: usize, on_open: Callback<String>) -> impl IntoView {
    let id = item.id.clone();
    let alt = image_alt(&item);
    let taken = item.date_taken.as_ref().map(CmsDate::short_label);
    let offset = index % 2 == 1;
    let reveal_delay = format!("--reveal-delay: {}ms", index * 100);
    let GalleryItem { gallery_image, caption, photographer, .. } = item;

    view! {
        <figure
            class="gallery-card"
            class:gallery-card--offset=offset
            style=reveal_delay
            on:click=move |_| on_open.run(id.clone())
        >
            <div class="gallery-card__frame">
                {gallery_image.map(|src| view! { <img class="gallery-card__image" src=src alt=alt loading="lazy"/> })}
                <figcaption class="gallery-card__overlay">
                    {caption.map(|text| view! { <p class="gallery-card__caption">{text}</p> })}
                    <div class="gallery-card__meta">
                        {photographer.map(|name| view! { <span>{format!("📷 {name}")}</span> })}
                        {taken.map(|label| view! { <span>{label}</span> })}
                    </div>
                </figcaption>
            </div>
        </figure>
    }
}
