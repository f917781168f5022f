//! Fixed site header with brand mark and page links.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Site header. The link for the current route is highlighted.
#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let link_class = move |path: &'static str| {
        if location.pathname.get() == path {
            "site-header__link site-header__link--active"
        } else {
            "site-header__link"
        }
    };
    let current = move |path: &'static str| (location.pathname.get() == path).then_some("page");

    view! {
        <header class="site-header">
            <nav class="site-header__nav">
                <a href="/" class="site-header__brand">
                    <span class="site-header__brand-primary">"TECH"</span>
                    <span class="site-header__brand-secondary">"VISION"</span>
                </a>
                <div class="site-header__links">
                    <a href="/" class=move || link_class("/") aria-current=move || current("/")>
                        "Home"
                    </a>
                    <a
                        href="/gallery"
                        class=move || link_class("/gallery")
                        aria-current=move || current("/gallery")
                    >
                        "Gallery"
                    </a>
                </div>
            </nav>
        </header>
    }
}
