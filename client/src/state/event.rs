//! Landing page binder for the single `hackathonevents` record.
//!
//! DESIGN
//! ======
//! The collection is a single-row table: the binder holds `Option<EventInfo>`
//! rather than a list, so "first record wins" is decided once in the fetch
//! layer and never re-derived by index here.
//!
//! Stat tiles and the contact line read the record field by field and fall
//! back to the published defaults for anything the CMS leaves blank.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use super::content::ContentStatus;
use crate::net::types::EventInfo;

pub const DEFAULT_PRIZE_POOL: &str = "₹2,00,000+";
pub const DEFAULT_REGISTRATION_FEE: &str = "₹1,000/-";
pub const DEFAULT_MAX_TEAM_SIZE: u32 = 4;
pub const DEFAULT_LUNCH_INCLUDED: bool = true;
pub const DEFAULT_CONTACT_PHONE: &str = "+91 9167904386";
pub const CONTACT_EMAIL: &str = "contact@fusion2025.in";

/// The landing page's event record and load status.
#[derive(Clone, Debug, Default)]
pub struct EventState {
    pub event: Option<EventInfo>,
    pub status: ContentStatus,
}

impl EventState {
    /// Apply the outcome of the page's event query. Later outcomes are dropped.
    pub fn resolve(&mut self, result: Result<Option<EventInfo>, String>) {
        if !self.status.is_loading() {
            return;
        }
        match result {
            Ok(Some(event)) => {
                self.event = Some(event);
                self.status = ContentStatus::Ready;
            }
            Ok(None) | Err(_) => {
                self.event = None;
                self.status = ContentStatus::Empty;
            }
        }
    }

    /// Hero description; only shown once the record has loaded.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        if self.status != ContentStatus::Ready {
            return None;
        }
        self.event.as_ref()?.event_description.as_deref()
    }

    #[must_use]
    pub fn stat_tiles(&self) -> Vec<StatTile> {
        stat_tiles(self.event.as_ref())
    }

    #[must_use]
    pub fn contact_phone(&self) -> String {
        contact_phone(self.event.as_ref())
    }
}

/// Which icon a stat tile renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatIcon {
    Trophy,
    Fee,
    Team,
    Lunch,
}

impl StatIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Trophy => "🏆",
            Self::Fee => "₹",
            Self::Team => "👥",
            Self::Lunch => "🍽",
        }
    }
}

/// One tile in the landing stats strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
    pub icon: StatIcon,
}

/// Build the four landing stat tiles from the event record, if any.
#[must_use]
pub fn stat_tiles(event: Option<&EventInfo>) -> Vec<StatTile> {
    let prize_pool = event
        .and_then(|e| e.prize_pool.clone())
        .unwrap_or_else(|| DEFAULT_PRIZE_POOL.to_owned());
    let registration_fee = event
        .and_then(|e| e.registration_fee.clone())
        .unwrap_or_else(|| DEFAULT_REGISTRATION_FEE.to_owned());
    let team_size = event
        .and_then(|e| e.max_team_size)
        .unwrap_or(DEFAULT_MAX_TEAM_SIZE);
    let lunch = event
        .and_then(|e| e.lunch_included)
        .unwrap_or(DEFAULT_LUNCH_INCLUDED);

    vec![
        StatTile { label: "Prize Pool", value: prize_pool, icon: StatIcon::Trophy },
        StatTile { label: "Registration Fee", value: registration_fee, icon: StatIcon::Fee },
        StatTile { label: "Max Team Size", value: team_size_label(team_size), icon: StatIcon::Team },
        StatTile { label: "Lunch Included", value: if lunch { "Yes" } else { "No" }.to_owned(), icon: StatIcon::Lunch },
    ]
}

fn team_size_label(size: u32) -> String {
    if size == 1 { "1 Member".to_owned() } else { format!("{size} Members") }
}

/// Contact phone for the thank-you section.
#[must_use]
pub fn contact_phone(event: Option<&EventInfo>) -> String {
    event
        .and_then(|e| e.contact_phone.clone())
        .unwrap_or_else(|| DEFAULT_CONTACT_PHONE.to_owned())
}
