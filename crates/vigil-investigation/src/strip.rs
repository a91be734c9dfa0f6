//! Thumbnail strip on the live screen.

use std::collections::VecDeque;

/// Most recent snapshots, newest first, plus a count of everything saved
/// this visit. The count keeps growing after old thumbnails drop off.
#[derive(Debug, Clone)]
pub struct CaptureStrip {
    max: usize,
    thumbnails: VecDeque<String>,
    total: u64,
}

impl CaptureStrip {
    /// `initial_total` is the count the page was rendered with.
    pub fn new(max: usize, initial_total: u64) -> Self {
        Self {
            max: max.max(1),
            thumbnails: VecDeque::with_capacity(max),
            total: initial_total,
        }
    }

    /// Add a saved snapshot at the front, evicting the oldest when full.
    pub fn push(&mut self, image_url: impl Into<String>) {
        if self.thumbnails.len() >= self.max {
            self.thumbnails.pop_back();
        }
        self.thumbnails.push_front(image_url.into());
        self.total += 1;
    }

    pub fn thumbnails(&self) -> impl Iterator<Item = &str> {
        self.thumbnails.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.thumbnails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thumbnails.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Text of the counter next to the strip heading.
    pub fn counter_label(&self) -> String {
        format!("({})", self.total)
    }
}
