//! Form-scoped banners that remove themselves.

use crate::SharedForm;
use keystone_core::{FeedbackKind, Form};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tracing::trace;

/// Show a banner on `form` and schedule its removal after `ttl`.
///
/// The timer holds only a weak reference, so a dropped form is never kept
/// alive by a pending banner. A banner replaced before its timer fires is
/// left alone; the newer banner has its own timer.
///
/// Must be called from within a Tokio runtime.
pub fn announce(
    form: &mut Form,
    handle: Weak<Mutex<Form>>,
    text: &str,
    kind: FeedbackKind,
    ttl: Duration,
) -> u64 {
    let id = form.show_feedback(text, kind, ttl);
    tokio::spawn(async move {
        tokio::time::sleep(ttl).await;
        if let Some(form) = handle.upgrade() {
            let mut form = form.lock();
            if form.dismiss_feedback(id) {
                trace!(form = %form.id(), banner = id, "Banner expired");
            }
        }
    });
    id
}

/// Weak handle for [`announce`].
pub fn handle(form: &SharedForm) -> Weak<Mutex<Form>> {
    Arc::downgrade(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keystone_core::DEFAULT_FEEDBACK_TTL;

    fn shared() -> SharedForm {
        Arc::new(Mutex::new(Form::new("contact", "/f/contact")))
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_expires() {
        let form = shared();
        {
            let mut guard = form.lock();
            announce(&mut guard, handle(&form), "Sent", FeedbackKind::Success, DEFAULT_FEEDBACK_TTL);
        }

        tokio::time::sleep(Duration::from_millis(4999)).await;
        assert!(form.lock().feedback().is_some());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(form.lock().feedback().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_old_timer_spares_new_banner() {
        let form = shared();
        {
            let mut guard = form.lock();
            announce(&mut guard, handle(&form), "first", FeedbackKind::Error, DEFAULT_FEEDBACK_TTL);
        }
        tokio::time::sleep(Duration::from_millis(3000)).await;
        {
            let mut guard = form.lock();
            announce(&mut guard, handle(&form), "second", FeedbackKind::Error, DEFAULT_FEEDBACK_TTL);
        }

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(form.lock().feedback().map(|f| f.text()), Some("second"));

        tokio::time::sleep(Duration::from_millis(3000)).await;
        assert!(form.lock().feedback().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_form_timer_is_harmless() {
        let form = shared();
        let weak = handle(&form);
        {
            let mut guard = form.lock();
            announce(&mut guard, weak.clone(), "Sent", FeedbackKind::Success, DEFAULT_FEEDBACK_TTL);
        }
        drop(form);

        tokio::time::sleep(Duration::from_millis(6000)).await;
        assert!(weak.upgrade().is_none());
    }
}
