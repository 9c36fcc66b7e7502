//! German and English string catalogs.
//!
//! [`register_all`] wires one catalog per path prefix into the i18n store.
//! Locale index 0 is German (the launch market default), 1 is English;
//! unknown locales fall back to English. Notice and form messages carry
//! their arguments as query params (`error/form/too-long?max=120`).

use std::collections::HashMap;
use std::sync::Arc;

use speedjobs_flux::{I18nHandler, I18nStore, QueryParams};

const DE: usize = 0;
const EN: usize = 1;

fn locale_index(locale: &str) -> usize {
    match locale {
        "de" => DE,
        _ => EN,
    }
}

pub fn register_all(i18n: &I18nStore) {
    i18n.handle("ui/#", Arc::new(UiStrings::new()));
    i18n.handle("notice/#", Arc::new(NoticeStrings::new()));
    i18n.handle("error/#", Arc::new(ErrorStrings::new()));
    i18n.handle("format/#", Arc::new(FormatStrings));
}

/// Static labels under `ui/#`.
struct UiStrings {
    texts: HashMap<&'static str, [&'static str; 2]>,
}

impl UiStrings {
    fn new() -> Self {
        let mut texts = HashMap::new();
        texts.insert("ui/app/title", ["speedjobs", "speedjobs"]);
        texts.insert("ui/search/title", ["Anbieter finden", "Find providers"]);
        texts.insert("ui/search/placeholder", ["Was brauchst du?", "What do you need?"]);
        texts.insert("ui/search/button", ["Suchen", "Search"]);
        texts.insert("ui/search/clear", ["Zurücksetzen", "Reset"]);
        texts.insert("ui/profile/favorite", ["Zu Favoriten", "Add to favorites"]);
        texts.insert(
            "ui/profile/unfavorite",
            ["Aus Favoriten entfernen", "Remove from favorites"],
        );
        texts.insert("ui/profile/contact", ["Jetzt anfragen", "Contact now"]);
        texts.insert("ui/favorites/title", ["Meine Favoriten", "My favorites"]);
        texts.insert(
            "ui/favorites/empty",
            ["Noch keine Favoriten gespeichert", "No favorites saved yet"],
        );
        texts.insert("ui/jobs/title", ["Aufträge", "Jobs"]);
        texts.insert("ui/jobs/empty", ["Keine offenen Aufträge", "No open jobs"]);
        texts.insert("ui/jobs/post-request", ["Auftrag ausschreiben", "Post a request"]);
        texts.insert("ui/jobs/post-offer", ["Angebot einstellen", "Post an offer"]);
        texts.insert("ui/form/submit", ["Veröffentlichen", "Publish"]);
        texts.insert("ui/form/cancel", ["Abbrechen", "Cancel"]);
        texts.insert("ui/auth/sign-in", ["Anmelden", "Sign in"]);
        texts.insert("ui/auth/sign-out", ["Abmelden", "Sign out"]);
        texts.insert("ui/common/loading", ["Wird geladen...", "Loading..."]);
        texts.insert("ui/common/retry", ["Erneut versuchen", "Try again"]);
        Self { texts }
    }
}

impl I18nHandler for UiStrings {
    fn translate(&self, path: &str, _query: &QueryParams, locale: &str) -> String {
        match self.texts.get(path) {
            Some(entry) => entry[locale_index(locale)].to_string(),
            None => path.to_string(),
        }
    }
}

/// Confirmation messages under `notice/#`.
struct NoticeStrings {
    texts: HashMap<&'static str, [&'static str; 2]>,
}

impl NoticeStrings {
    fn new() -> Self {
        let mut texts = HashMap::new();
        texts.insert(
            "notice/favorite/added",
            ["Zu deinen Favoriten hinzugefügt", "Added to your favorites"],
        );
        texts.insert(
            "notice/favorite/removed",
            ["Aus deinen Favoriten entfernt", "Removed from your favorites"],
        );
        texts.insert(
            "notice/job/posted",
            ["Dein Inserat ist online", "Your listing is live"],
        );
        Self { texts }
    }
}

impl I18nHandler for NoticeStrings {
    fn translate(&self, path: &str, _query: &QueryParams, locale: &str) -> String {
        match self.texts.get(path) {
            Some(entry) => entry[locale_index(locale)].to_string(),
            None => path.to_string(),
        }
    }
}

/// Error messages under `error/#`. A `reason` query param appends the
/// translated failure cause; `error/form/too-long` takes a `max` param.
struct ErrorStrings {
    texts: HashMap<&'static str, [&'static str; 2]>,
}

impl ErrorStrings {
    fn new() -> Self {
        let mut texts = HashMap::new();
        texts.insert(
            "error/favorite/auth-required",
            ["Melde dich an, um Favoriten zu speichern", "Sign in to save favorites"],
        );
        texts.insert(
            "error/favorite/add-failed",
            ["Konnte nicht zu Favoriten hinzugefügt werden", "Could not add to favorites"],
        );
        texts.insert(
            "error/favorite/remove-failed",
            ["Konnte nicht aus Favoriten entfernt werden", "Could not remove from favorites"],
        );
        texts.insert(
            "error/favorite/load-failed",
            ["Favoritenstatus konnte nicht geladen werden", "Could not load favorite status"],
        );
        texts.insert(
            "error/favorite/list-failed",
            ["Favoriten konnten nicht geladen werden", "Could not load your favorites"],
        );
        texts.insert(
            "error/search/empty",
            ["Bitte Suchbegriff oder Filter angeben", "Enter a search term or filter"],
        );
        texts.insert("error/search/failed", ["Suche fehlgeschlagen", "Search failed"]);
        texts.insert(
            "error/job/auth-required",
            ["Melde dich an, um zu inserieren", "Sign in to post"],
        );
        texts.insert(
            "error/job/post-failed",
            ["Inserat konnte nicht veröffentlicht werden", "Could not publish the listing"],
        );
        texts.insert(
            "error/job/feed-failed",
            ["Aufträge konnten nicht geladen werden", "Could not load jobs"],
        );
        texts.insert("error/form/required", ["Pflichtfeld", "Required"]);
        Self { texts }
    }
}

fn reason_text(code: &str) -> [&'static str; 2] {
    match code {
        "network" => ["Netzwerkfehler", "network error"],
        "server" => ["Serverfehler", "server error"],
        "unauthenticated" => ["nicht angemeldet", "not signed in"],
        "decode" => ["unerwartete Antwort", "unexpected response"],
        _ => ["unbekannter Fehler", "unknown error"],
    }
}

impl I18nHandler for ErrorStrings {
    fn translate(&self, path: &str, query: &QueryParams, locale: &str) -> String {
        let idx = locale_index(locale);
        if path == "error/form/too-long" {
            let max = query.get("max").unwrap_or("?");
            return match idx {
                DE => format!("Höchstens {} Zeichen", max),
                _ => format!("At most {} characters", max),
            };
        }
        let Some(entry) = self.texts.get(path) else {
            return path.to_string();
        };
        let mut text = entry[idx].to_string();
        if let Some(reason) = query.get("reason") {
            text.push_str(": ");
            text.push_str(reason_text(reason)[idx]);
        }
        text
    }
}

/// Parameterized counters and greetings under `format/#`.
struct FormatStrings;

impl I18nHandler for FormatStrings {
    fn translate(&self, path: &str, query: &QueryParams, locale: &str) -> String {
        let idx = locale_index(locale);
        match path {
            "format/result-count" => {
                let n = query.get("count").unwrap_or("0");
                match idx {
                    DE => format!("{} Treffer", n),
                    _ => format!("{} results", n),
                }
            }
            "format/favorite-count" => {
                let n = query.get("count").unwrap_or("0");
                match idx {
                    DE => format!("{} Mal gemerkt", n),
                    _ => format!("saved {} times", n),
                }
            }
            "format/greeting" => {
                let name = query.get("name").unwrap_or("");
                match idx {
                    DE => format!("Hallo {}!", name),
                    _ => format!("Hi {}!", name),
                }
            }
            _ => path.to_string(),
        }
    }
}
