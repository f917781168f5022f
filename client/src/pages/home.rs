//! Landing page: hero, stats, prizes, timeline, gallery teaser, quick info,
//! and contact sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routed at `/`. Issues one `hackathonevents` query on mount and binds only
//! the first record. Everything except the hero description, the stat tiles,
//! and the contact phone is static copy.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::state::event::{CONTACT_EMAIL, EventState};

const MARQUEE_TEXT: &str = "INNOVATION • CODE • FUTURE • DISRUPT • BUILD • ";
const MARQUEE_REPEAT: usize = 10;
const POSTER_URL: &str =
    "https://static.wixstatic.com/media/2836f6_4364c6d6ad5c457ba691793ee7a8129a~mv2.jpeg?id=fusion-poster";
const TEASER_URL: &str = "https://static.wixstatic.com/media/2836f6_40bd3ef9c84a4942ba72f7339b31cbb7~mv2.png";
const REGISTER_URL: &str = "https://www.fusion2025.in";

const PRIZE_HIGHLIGHTS: [&str; 4] = [
    "₹2,00,000+ Prize Pool",
    "Free Trip to Malvan (2 Teams)",
    "20,000 Worth Gadgets",
    "Lunch & Refreshments",
];

struct TimelineEntry {
    title: &'static str,
    time: &'static str,
    desc: &'static str,
    glyph: &'static str,
}

const TIMELINE: [TimelineEntry; 4] = [
    TimelineEntry {
        title: "Opening Ceremony",
        time: "09:00 AM",
        desc: "The challenge begins. Problem statements released.",
        glyph: ">_",
    },
    TimelineEntry {
        title: "Mentorship Round",
        time: "02:00 PM",
        desc: "Industry experts guide teams on architecture and feasibility.",
        glyph: "👥",
    },
    TimelineEntry {
        title: "Midnight Coding",
        time: "12:00 AM",
        desc: "Pizza, caffeine, and peak productivity hours.",
        glyph: "</>",
    },
    TimelineEntry {
        title: "Final Pitch",
        time: "09:00 AM",
        desc: "24 hours up. Teams present their solutions to the jury.",
        glyph: "🏆",
    },
];

struct QuickInfo {
    title: &'static str,
    lines: [&'static str; 2],
}

const QUICK_INFO: [QuickInfo; 4] = [
    QuickInfo { title: "Registration", lines: ["Scan QR code or visit www.fusion2025.in", "Fee: ₹1,000/-"] },
    QuickInfo { title: "Team Details", lines: ["Max 4 members per team", "Lunch included!"] },
    QuickInfo { title: "Dates", lines: ["9th - 10th October", "24 Hours Non-Stop"] },
    QuickInfo { title: "Prizes", lines: ["₹2,00,000+ Pool", "+ Gadgets & Trip"] },
];

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let event = RwSignal::new(EventState::default());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_event().await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match &result {
                Ok(Some(_)) => log::info!("event record loaded"),
                Ok(None) => log::warn!("hackathonevents returned no records"),
                Err(e) => log::error!("event fetch failed: {e}"),
            }
            event.update(|s| s.resolve(result));
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="page page--home">
            <Header/>
            <main>
                <Hero event=event/>
                <Marquee/>
                <Stats event=event/>
                <Prizes/>
                <Timeline/>
                <GalleryTeaser/>
                <QuickInfoSection/>
                <Contact event=event/>
            </main>
            <Footer/>
        </div>
    }
}

#[component]
fn Hero(event: RwSignal<EventState>) -> impl IntoView {
    let description = move || {
        event
            .with(|s| s.description().map(str::to_owned))
            .map(|text| view! { <p class="hero__description">{text}</p> })
    };

    view! {
        <section class="hero">
            <h2 class="hero__presenter">"Tech Vision Skills Academy Presents"</h2>
            <h1 class="hero__title">"FUSION"</h1>
            <p class="hero__tagline">"24-HOUR HACKATHON"</p>
            <p class="hero__dates">"9" <sup>"TH"</sup> " - 10" <sup>"TH"</sup> " OCTOBER"</p>
            {description}
            <div class="hero__actions">
                <a class="btn btn--primary" href=REGISTER_URL target="_blank" rel="noopener">
                    "Register Now"
                </a>
                <a class="btn btn--secondary" href="/gallery">"View Gallery"</a>
            </div>
        </section>
    }
}

#[component]
fn Marquee() -> impl IntoView {
    let text = MARQUEE_TEXT.repeat(MARQUEE_REPEAT);
    view! {
        <div class="marquee" aria-hidden="true">
            <div class="marquee__track">
                <span>{text.clone()}</span>
                <span>{text}</span>
            </div>
        </div>
    }
}

#[component]
fn Stats(event: RwSignal<EventState>) -> impl IntoView {
    let tiles = move || {
        event
            .with(EventState::stat_tiles)
            .into_iter()
            .map(|tile| {
                view! {
                    <div class="stat-tile">
                        <span class="stat-tile__icon" aria-hidden="true">{tile.icon.glyph()}</span>
                        <span class="stat-tile__label">{tile.label}</span>
                        <span class="stat-tile__value">{tile.value}</span>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="stats">
            <div class="stats__grid">{tiles}</div>
        </section>
    }
}

#[component]
fn Prizes() -> impl IntoView {
    view! {
        <section class="prizes">
            <div class="prizes__intro">
                <h2 class="section-title">"PRIZES &" <br/> "REWARDS"</h2>
                <p>
                    "Win amazing prizes and exclusive rewards. Top teams get recognition, cash prizes, "
                    "and exciting gadgets!"
                </p>
                <ul class="prizes__list">
                    {PRIZE_HIGHLIGHTS
                        .iter()
                        .map(|prize| view! { <li class="prizes__item">{*prize}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
            <figure class="prizes__poster">
                <img src=POSTER_URL alt="FUSION 2025 Hackathon Poster" loading="lazy"/>
                <figcaption>
                    <h3>"FUSION 2025"</h3>
                </figcaption>
            </figure>
        </section>
    }
}

#[component]
fn Timeline() -> impl IntoView {
    view! {
        <section class="timeline">
            <h2 class="section-title">"EVENT HIGHLIGHTS"</h2>
            <ol class="timeline__list">
                {TIMELINE
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let right = index % 2 == 1;
                        view! {
                            <li class="timeline__entry" class:timeline__entry--right=right>
                                <span class="timeline__icon" aria-hidden="true">{entry.glyph}</span>
                                <div class="timeline__body">
                                    <span class="timeline__time">{entry.time}</span>
                                    <h3 class="timeline__title">{entry.title}</h3>
                                    <p>{entry.desc}</p>
                                </div>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>
        </section>
    }
}

#[component]
fn GalleryTeaser() -> impl IntoView {
    view! {
        <section class="teaser">
            <div class="teaser__header">
                <h2 class="section-title">"EVENT GALLERY"</h2>
                <a class="btn btn--secondary" href="/gallery">"View All Photos"</a>
            </div>
            <div class="teaser__grid">
                <img
                    class="teaser__main"
                    src=format!("{TEASER_URL}?id=gallery-main")
                    alt="Hackathon Main Event"
                    loading="lazy"
                />
                <img
                    class="teaser__side"
                    src=format!("{TEASER_URL}?id=gallery-side-1")
                    alt="Coding Session"
                    loading="lazy"
                />
                <img
                    class="teaser__side"
                    src=format!("{TEASER_URL}?id=gallery-side-2")
                    alt="Prize Distribution"
                    loading="lazy"
                />
            </div>
        </section>
    }
}

#[component]
fn QuickInfoSection() -> impl IntoView {
    view! {
        <section class="quick-info">
            <h2 class="section-title">"QUICK INFO"</h2>
            <div class="quick-info__grid">
                {QUICK_INFO
                    .iter()
                    .map(|info| {
                        view! {
                            <div class="quick-info__card">
                                <h3>{info.title}</h3>
                                <p>{info.lines[0]}</p>
                                <p>{info.lines[1]}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn Contact(event: RwSignal<EventState>) -> impl IntoView {
    let contact_line = move || format!("📱 {} | 📧 {CONTACT_EMAIL}", event.with(EventState::contact_phone));

    view! {
        <section class="contact">
            <h2 class="section-title">"THANK YOU FOR JOINING FUSION 2025"</h2>
            <p>
                "Thank you for being part of an incredible 24-hour hackathon experience. We hope you "
                "created amazing innovations and made lasting connections!"
            </p>
            <p class="contact__line">{contact_line}</p>
            <div class="contact__actions">
                <a class="btn btn--primary" href="/gallery">"VIEW EVENT GALLERY"</a>
                <a class="btn btn--secondary" href=REGISTER_URL target="_blank" rel="noopener">
                    "FOLLOW FOR UPDATES"
                </a>
            </div>
        </section>
    }
}
