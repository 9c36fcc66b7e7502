//! User-facing notice queue, stored at `notices/queue`.
//!
//! Notice messages are locale-neutral paths (`notice/favorite/added`,
//! `error/search/failed?reason=network`) that shells resolve through the
//! i18n store at render time.

use serde::{Deserialize, Serialize};
use speedjobs_flux_derive::state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    /// Message path for the i18n store, query args included.
    pub message: String,
}

#[state("notices/queue")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notices {
    pub next_id: u64,
    pub items: Vec<Notice>,
}

impl Notices {
    pub fn empty() -> Self {
        Notices {
            next_id: 1,
            items: Vec::new(),
        }
    }

    /// Append a notice and return its id.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn has_message(&self, message: &str) -> bool {
        self.items.iter().any(|n| n.message == message)
    }
}
