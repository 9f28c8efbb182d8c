//! Toast Messages
//!
//! Transient status messages stacked in the top-right corner. Each one
//! removes itself after `TOAST_LIFETIME_MS`.

use leptos::prelude::*;

pub const TOAST_LIFETIME_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "message message-success",
            ToastKind::Warning => "message message-warning",
            ToastKind::Error => "message message-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered toast list with stable ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: String) -> u32 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            kind,
            message,
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Handle provided through `AppContext`
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        match kind {
            ToastKind::Error => log::error!("{}", message),
            ToastKind::Warning => log::warn!("{}", message),
            ToastKind::Success => log::info!("{}", message),
        }

        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));

        let queue = self.queue;
        gloo_timers::callback::Timeout::new(TOAST_LIFETIME_MS, move || {
            queue.try_update(|q| q.dismiss(id));
        })
        .forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(ToastKind::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.update(|q| q.dismiss(id));
    }
}

/// Renders the live toasts; mount once per page
#[component]
pub fn ToastStack(toasts: Toasts) -> impl IntoView {
    view! {
        <div id="message-container" class="message-container">
            <For
                each=move || toasts.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| toasts.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_order_and_dismisses_by_id() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Recipe created".to_string());
        let second = queue.push(ToastKind::Warning, "Image failed".to_string());
        assert_ne!(first, second);

        queue.dismiss(first);
        let remaining: Vec<&str> = queue.items().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(remaining, vec!["Image failed"]);

        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
    }
}
