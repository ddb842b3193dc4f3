// SPDX-License-Identifier: MPL-2.0
//! The "info" page: a single portrait image published by the owner.

/// One published info image. The newest record is the one on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPage {
    pub id: i64,
    pub image_url: String,
}

impl InfoPage {
    /// Picks the record on display: the one with the highest id.
    #[must_use]
    pub fn current(pages: Vec<InfoPage>) -> Option<InfoPage> {
        pages.into_iter().max_by_key(|page| page.id)
    }
}
