// SPDX-License-Identifier: MPL-2.0
//! Cache of images downloaded from public URLs.
//!
//! Project thumbnails, gallery photos and the info page image all live in
//! the backend's public bucket. Each URL is fetched once and kept as an
//! image handle until it falls out of the LRU window.
//!
//! # Design
//!
//! - **LRU eviction**: least recently requested URLs are dropped first
//! - **Entry-bounded**: capacity comes from `[gallery] image_cache_entries`
//! - **Async loading**: downloads run as tasks and come back as [`Message`]s
//! - **Content check**: bodies that are not a known image format are marked
//!   failed instead of being handed to the renderer

use crate::application::port::ServiceError;
use crate::infrastructure::http;
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{Container, Text};
use iced::{ContentFit, Element, Length, Task};
use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;

/// State of one cached URL.
#[derive(Debug, Clone)]
pub enum Entry {
    Loading,
    Ready(Handle),
    Failed,
}

/// Download results routed back into the cache.
#[derive(Debug, Clone)]
pub enum Message {
    Fetched {
        url: String,
        result: Result<Vec<u8>, ServiceError>,
    },
}

/// URL-keyed image cache.
pub struct Cache {
    entries: LruCache<String, Entry>,
    http: reqwest::Client,
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .finish()
    }
}

impl Cache {
    /// Creates an empty cache. A zero capacity is raised to one entry.
    #[must_use]
    pub fn new(http: reqwest::Client, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            http,
        }
    }

    /// Starts downloads for the URLs not cached yet.
    ///
    /// URLs already loading or loaded are only promoted in the LRU order.
    /// Failed URLs are fetched again.
    pub fn request<'u>(&mut self, urls: impl IntoIterator<Item = &'u str>) -> Task<Message> {
        let mut tasks = Vec::new();

        for url in urls {
            if matches!(
                self.entries.get(url),
                Some(Entry::Loading | Entry::Ready(_))
            ) {
                continue;
            }

            self.entries.put(url.to_string(), Entry::Loading);

            let client = self.http.clone();
            let url = url.to_string();
            tasks.push(Task::perform(
                async move {
                    let result = http::fetch_bytes(&client, &url).await;
                    (url, result)
                },
                |(url, result)| Message::Fetched { url, result },
            ));
        }

        Task::batch(tasks)
    }

    /// Stores a finished download.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Fetched { url, result } => {
                let entry = match result {
                    Ok(bytes) if image_rs::guess_format(&bytes).is_ok() => {
                        Entry::Ready(Handle::from_bytes(bytes))
                    }
                    Ok(_) => {
                        tracing::debug!(%url, "downloaded body is not an image");
                        Entry::Failed
                    }
                    Err(err) => {
                        tracing::debug!(%url, %err, "image download failed");
                        Entry::Failed
                    }
                };
                self.entries.put(url, entry);
            }
        }
    }

    /// Looks up a URL without touching the LRU order.
    #[must_use]
    pub fn entry(&self, url: &str) -> Option<&Entry> {
        self.entries.peek(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the image for `url`, or a placeholder while it is missing.
    pub fn view<'a, M: 'a>(&self, url: &str, fit: ContentFit) -> Element<'a, M> {
        match self.entry(url) {
            Some(Entry::Ready(handle)) => Image::new(handle.clone())
                .content_fit(fit)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            Some(Entry::Failed) => placeholder("!"),
            Some(Entry::Loading) | None => placeholder(""),
        }
    }
}

fn placeholder<'a, M: 'a>(glyph: &'static str) -> Element<'a, M> {
    Container::new(Text::new(glyph).size(typography::TITLE_MD))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::placeholder)
        .into()
}
