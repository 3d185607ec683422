use std::time::{Duration, Instant};

use dioxus::prelude::*;

/// How long a toast stays up unless dismissed.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);

// ─── NotificationService ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub level: NotificationLevel,
    pub created_at: Instant,
    pub dismissed: bool,
}

impl Notification {
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.dismissed || now.saturating_duration_since(self.created_at) >= TOAST_LIFETIME
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationService {
    notifications: Vec<Notification>,
    next_id: u32,
}

impl NotificationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_at(&mut self, message: String, level: NotificationLevel, now: Instant) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.notifications.push(Notification {
            id,
            message,
            level,
            created_at: now,
            dismissed: false,
        });
        id
    }

    pub fn push(&mut self, message: String, level: NotificationLevel) -> u32 {
        self.push_at(message, level, Instant::now())
    }

    pub fn dismiss(&mut self, id: u32) {
        if let Some(n) = self.notifications.iter_mut().find(|n| n.id == id) {
            n.dismissed = true;
        }
    }

    pub fn cleanup_at(&mut self, now: Instant) {
        self.notifications.retain(|n| !n.is_expired_at(now));
    }

    /// Live toasts, newest first.
    pub fn active_at(&self, now: Instant) -> Vec<Notification> {
        self.notifications
            .iter()
            .rev()
            .filter(|n| !n.is_expired_at(now))
            .cloned()
            .collect()
    }
}

// ─── Shared handle (provided as context) ──────────────────────

#[derive(Clone, Copy)]
pub struct Notifier(pub Signal<NotificationService>);

impl Notifier {
    pub fn new() -> Self {
        Self(Signal::new(NotificationService::new()))
    }

    pub fn info(&mut self, message: String) {
        self.0.write().push(message, NotificationLevel::Info);
    }

    pub fn warn(&mut self, message: String) {
        self.0.write().push(message, NotificationLevel::Warning);
    }

    pub fn error(&mut self, message: String) {
        self.0.write().push(message, NotificationLevel::Error);
    }

    pub fn dismiss(&mut self, id: u32) {
        self.0.write().dismiss(id);
    }
}

// ─── NotificationLayer Component ──────────────────────────────

#[component]
pub fn NotificationLayer() -> Element {
    let mut notifier = use_context::<Notifier>();

    // Drop expired toasts once a second
    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            notifier.0.write().cleanup_at(Instant::now());
        }
    });

    let active = notifier.0.read().active_at(Instant::now());
    if active.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "notification-stack",
            for notif in active.iter() {
                {
                    let id = notif.id;
                    let level_class = match notif.level {
                        NotificationLevel::Info => "notif-info",
                        NotificationLevel::Warning => "notif-warning",
                        NotificationLevel::Error => "notif-error",
                    };
                    let msg = notif.message.clone();

                    rsx! {
                        div {
                            key: "{id}",
                            class: "notification-toast {level_class}",
                            onclick: move |_| notifier.dismiss(id),

                            span { class: "notif-message", "{msg}" }

                            button {
                                class: "notif-close",
                                onclick: move |e: MouseEvent| {
                                    e.stop_propagation();
                                    notifier.dismiss(id);
                                },
                                "\u{2715}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_lifetime() {
        let mut svc = NotificationService::new();
        let t0 = Instant::now();
        svc.push_at("hello".into(), NotificationLevel::Info, t0);

        assert_eq!(svc.active_at(t0 + Duration::from_secs(4)).len(), 1);
        assert!(svc.active_at(t0 + TOAST_LIFETIME).is_empty());
    }

    #[test]
    fn test_dismiss_hides_immediately() {
        let mut svc = NotificationService::new();
        let t0 = Instant::now();
        let a = svc.push_at("a".into(), NotificationLevel::Warning, t0);
        svc.push_at("b".into(), NotificationLevel::Error, t0);

        svc.dismiss(a);
        let active = svc.active_at(t0);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "b");
    }

    #[test]
    fn test_newest_first_and_cleanup() {
        let mut svc = NotificationService::new();
        let t0 = Instant::now();
        svc.push_at("old".into(), NotificationLevel::Info, t0);
        svc.push_at("new".into(), NotificationLevel::Info, t0 + Duration::from_secs(3));

        let active = svc.active_at(t0 + Duration::from_secs(3));
        assert_eq!(active[0].message, "new");

        svc.cleanup_at(t0 + Duration::from_secs(6));
        let left = svc.active_at(t0 + Duration::from_secs(6));
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].message, "new");
    }

    #[test]
    fn test_ids_increase() {
        let mut svc = NotificationService::new();
        let a = svc.push("a".into(), NotificationLevel::Info);
        let b = svc.push("b".into(), NotificationLevel::Info);
        assert!(b > a);
    }
}
