// Keeps emitted toasts until a client drains them, and logs each one.

use crate::shared::core::toast::{Toast, ToastVariant};
use crate::shared::infrastructure::notifier::Notifier;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

const DEFAULT_CAPACITY: usize = 32;

pub struct InMemoryNotifier {
    toasts: Mutex<VecDeque<Toast>>,
    capacity: usize,
}

impl Default for InMemoryNotifier {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            toasts: Mutex::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.guard().iter().cloned().collect()
    }

    pub fn drain(&self) -> Vec<Toast> {
        self.guard().drain(..).collect()
    }

    fn guard(&self) -> MutexGuard<'_, VecDeque<Toast>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for InMemoryNotifier {
    fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Default => info!(title = %toast.title, description = %toast.description, "toast"),
            ToastVariant::Destructive => warn!(title = %toast.title, description = %toast.description, "toast"),
        }
        let mut toasts = self.guard();
        if toasts.len() == self.capacity {
            toasts.pop_front();
        }
        toasts.push_back(toast);
    }
}
