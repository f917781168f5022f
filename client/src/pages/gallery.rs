//! Gallery page: photo grid backed by the `eventgallery` collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routed at `/gallery`. Issues one gallery query on mount; the result is
//! dropped if the page has already been unmounted.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::gallery_card::GalleryCard;
use crate::components::header::Header;
use crate::components::lightbox::Lightbox;
use crate::state::content::ContentStatus;
use crate::state::gallery::GalleryState;

/// Gallery page with loading, empty ("coming soon"), and grid states.
#[component]
pub fn GalleryPage() -> impl IntoView {
    let gallery = RwSignal::new(GalleryState::default());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_gallery().await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match &result {
                Ok(items) => log::info!("gallery loaded: {} items", items.len()),
                Err(e) => log::error!("gallery fetch failed: {e}"),
            }
            gallery.update(|s| s.resolve(result));
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let status = Memo::new(move |_| gallery.with(|s| s.status));
    let selected = Memo::new(move |_| gallery.with(|s| s.selected_item().cloned()));
    let on_open = Callback::new(move |id: String| gallery.update(|s| s.select(&id)));
    let on_close = Callback::new(move |()| gallery.update(GalleryState::close));

    view! {
        <div class="page page--gallery">
            <Header/>

            <section class="gallery-hero">
                <h1 class="gallery-hero__title">"EVENT GALLERY"</h1>
                <p class="gallery-hero__lede">
                    "Relive the moments from our incredible 24-hour hackathon. From intense coding sessions "
                    "to triumphant celebrations, these images capture the spirit of innovation and collaboration."
                </p>
            </section>

            <section class="gallery">
                {move || match status.get() {
                    ContentStatus::Loading => {
                        view! {
                            <div class="gallery__loading">
                                <div class="spinner" role="status" aria-label="Loading photos"></div>
                            </div>
                        }
                            .into_any()
                    }
                    ContentStatus::Empty => {
                        view! {
                            <div class="gallery__empty">
                                <span class="gallery__empty-icon" aria-hidden="true">"📷"</span>
                                <p>"Gallery coming soon! Check back later for event photos."</p>
                            </div>
                        }
                            .into_any()
                    }
                    ContentStatus::Ready => {
                        view! {
                            <div class="gallery__grid">
                                {gallery
                                    .with_untracked(|s| s.items.clone())
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, item)| view! { <GalleryCard item=item index=index on_open=on_open/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </section>

            {move || selected.get().map(|item| view! { <Lightbox item=item on_close=on_close/> })}

            <Footer/>
        </div>
    }
}
