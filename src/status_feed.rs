//! Live Status Feed
//!
//! Replays a fixed list of status messages, one per tick.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedTick {
    Pushed(String),
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFeed {
    updates: Vec<String>,
    entries: Vec<String>,
}

impl StatusFeed {
    pub fn new(updates: &[&str]) -> Self {
        Self {
            updates: updates.iter().map(|s| s.to_string()).collect(),
            entries: Vec::new(),
        }
    }

    /// Append the next message, or report that none are left
    pub fn tick(&mut self) -> FeedTick {
        match self.updates.get(self.entries.len()) {
            Some(next) => {
                self.entries.push(next.clone());
                FeedTick::Pushed(next.clone())
            }
            None => FeedTick::Finished,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_finished(&self) -> bool {
        self.entries.len() >= self.updates.len()
    }

    pub fn live_status(&self) -> &'static str {
        if self.is_finished() {
            "All updates received"
        } else {
            "Fetching live updates..."
        }
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
