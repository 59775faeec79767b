//! Transient success/error notifications.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Banner flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// A single notification with a unique ID for keyed rendering and removal.
#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub id: usize,
    pub kind: BannerKind,
    pub message: String,
}

// Global counter for generating unique IDs
static BANNER_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl Banner {
    pub fn new(kind: BannerKind, message: impl Into<String>) -> Self {
        Self {
            id: BANNER_COUNTER.fetch_add(1, Ordering::Relaxed),
            kind,
            message: message.into(),
        }
    }
}

/// Banners currently shown in the message region, newest first.
///
/// Each banner is removed by its own timer; there is no cap and no
/// coalescing.
#[derive(Clone, Debug, Default)]
pub struct BannerStack {
    banners: Vec<Banner>,
}

impl BannerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts at the front so the newest message is most visible.
    ///
    /// Returns the banner's ID for scheduling its removal.
    pub fn push(&mut self, banner: Banner) -> usize {
        let id = banner.id;
        self.banners.insert(0, banner);
        id
    }

    /// Removes one banner by ID. Unknown IDs are ignored.
    pub fn dismiss(&mut self, id: usize) {
        self.banners.retain(|b| b.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Banner> {
        self.banners.iter()
    }

    pub fn len(&self) -> usize {
        self.banners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }
}
