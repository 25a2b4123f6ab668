//! Toast notification queue.
//!
//! The toast surface is mounted in both the login and authenticated layouts.
//! Screens push notifications here; the surface renders whatever is visible
//! and dismisses entries when their lifetime ends or the user closes them.
//!
//! Lifetimes are measured on the queue's own clock, moved forward with
//! [`ToastQueue::advance`]. Whoever owns the queue drives that clock, so a
//! toast outlives the screen that raised it.

use crate::config::{MAX_VISIBLE_TOASTS, TOAST_LIFETIME_MS};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Fixed screen anchor for the toast surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    #[default]
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastPosition::TopLeft => "top-left",
            ToastPosition::TopCenter => "top-center",
            ToastPosition::TopRight => "top-right",
            ToastPosition::BottomLeft => "bottom-left",
            ToastPosition::BottomCenter => "bottom-center",
            ToastPosition::BottomRight => "bottom-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
            ToastLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub level: ToastLevel,
    pub message: String,
    /// Queue clock reading at which the toast expires
    pub expires_at_ms: u64,
}

/// Bounded FIFO of toasts. When full, the oldest entry is evicted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
    max_visible: usize,
    lifetime_ms: u64,
    clock_ms: u64,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_settings(MAX_VISIBLE_TOASTS, TOAST_LIFETIME_MS)
    }
}

impl ToastQueue {
    /// Create a queue that shows at most `max_visible` toasts (minimum 1).
    pub fn with_capacity(max_visible: usize) -> Self {
        Self::with_settings(max_visible, TOAST_LIFETIME_MS)
    }

    /// Create a queue with an explicit toast lifetime.
    pub fn with_settings(max_visible: usize, lifetime_ms: u64) -> Self {
        let max_visible = max_visible.max(1);
        Self {
            toasts: VecDeque::with_capacity(max_visible),
            next_id: 0,
            max_visible,
            lifetime_ms,
            clock_ms: 0,
        }
    }

    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        self.toasts.push_back(Toast {
            id,
            level,
            message: message.into(),
            expires_at_ms: self.clock_ms.saturating_add(self.lifetime_ms),
        });
        while self.toasts.len() > self.max_visible {
            self.toasts.pop_front();
        }
        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> ToastId {
        self.push(ToastLevel::Info, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> ToastId {
        self.push(ToastLevel::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> ToastId {
        self.push(ToastLevel::Error, message)
    }

    /// Remove a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Move the queue clock forward and drop expired toasts.
    ///
    /// Returns how many toasts were removed.
    pub fn advance(&mut self, elapsed_ms: u64) -> usize {
        self.clock_ms = self.clock_ms.saturating_add(elapsed_ms);
        let now = self.clock_ms;
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at_ms > now);
        before - self.toasts.len()
    }

    /// Visible toasts, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
