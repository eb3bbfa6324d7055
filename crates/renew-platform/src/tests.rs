#[cfg(test)]
mod tests {
    use crate::{InstantDelay, NullForm};
    use renew_core::event_bus::EventBus;
    use renew_core::email::EmailCapture;
    use renew_core::ports::{DelayPort, FormPort};
    use renew_core::scheduler::{ReplyOutcome, ReplyScheduler};
    use renew_core::session::{ChatSession, Submission};
    use renew_types::config::CoachConfig;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    // ─── InstantDelay Tests ──────────────────────────────────

    #[test]
    fn test_instant_delay_resolves() {
        block_on(InstantDelay.sleep(1200));
    }

    #[test]
    fn test_instant_delay_drives_scheduler() {
        let session = Rc::new(RefCell::new(ChatSession::new(
            CoachConfig::default(),
            EventBus::new(),
        )));
        let mut scheduler = ReplyScheduler::new();
        let Submission::Accepted(pending) = session.borrow_mut().submit("Regional Manager") else {
            panic!("submission should be accepted");
        };
        let reply = scheduler.schedule(&session, pending, Rc::new(InstantDelay));
        assert_eq!(block_on(reply.run()), ReplyOutcome::Delivered);
        assert_eq!(session.borrow().messages().len(), 3);
    }

    // ─── NullForm Tests ──────────────────────────────────────

    #[test]
    fn test_null_form_records() {
        let form = NullForm::new();
        assert!(form.submitted().is_empty());
        block_on(form.submit_email("a@b.co")).unwrap();
        block_on(form.submit_email("c@d.co")).unwrap();
        assert_eq!(form.submitted(), vec!["a@b.co", "c@d.co"]);
    }

    #[test]
    fn test_capture_then_post() {
        let form = NullForm::new();
        let mut capture = EmailCapture::new();
        capture.email = "lead@example.com".to_string();

        let email = capture.submit().unwrap();
        block_on(form.submit_email(&email)).unwrap();
        assert_eq!(form.submitted(), vec!["lead@example.com"]);
        assert!(capture.is_submitted());
    }
}
