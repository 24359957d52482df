//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::nav::Page;

const TOAST_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page, kept in sync with `location.hash` - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Visible toasts, oldest first
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast: StoredValue<u32>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        let (toasts, set_toasts) = signal(Vec::new());
        Self {
            page: page.0,
            set_page: page.1,
            toasts,
            set_toasts,
            next_toast: StoredValue::new(0),
        }
    }

    /// Navigate by writing the hash; the hashchange listener updates `page`
    pub fn navigate(&self, page: Page) {
        let hash = page.to_hash();
        web_sys::console::log_1(&format!("[NAV] {}", hash).into());
        match web_sys::window().map(|w| w.location().set_hash(&hash)) {
            Some(Ok(())) => {}
            _ => self.set_page.set(page),
        }
    }

    /// Sync from the current `location.hash`
    pub fn sync_from_location(&self) {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        self.set_page.set(Page::from_hash(&hash));
    }

    /// Show a toast that dismisses itself
    pub fn toast(&self, title: &str, message: &str) {
        let id = self.next_toast.get_value();
        self.next_toast.set_value(id + 1);
        self.set_toasts.update(|list| {
            list.push(Toast {
                id,
                title: title.to_string(),
                message: message.to_string(),
            })
        });

        let set_toasts = self.set_toasts;
        Timeout::new(TOAST_MS, move || {
            set_toasts.update(|list| list.retain(|t| t.id != id));
        })
        .forget();
    }

    pub fn dismiss_toast(&self, id: u32) {
        self.set_toasts.update(|list| list.retain(|t| t.id != id));
    }
}
