#[cfg(test)]
mod tests {
    use crate::nav::*;
    use crate::state::*;
    use crate::theme;
    use renew_core::event_bus::EventBus;
    use renew_core::session::{ChatSession, Submission};
    use renew_types::config::CoachConfig;
    use renew_types::content::{COACH_LIVE, COACH_THINKING};
    use renew_types::event::CoachEvent;
    use renew_types::reply::ReplyKind;

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new(400.0);
        assert!(state.input_text.is_empty());
        assert!(!state.email.is_submitted());
        assert!(state.email_error.is_none());
        assert!(!state.responding);
        assert_eq!(state.status_text, COACH_LIVE);
        assert!(!state.nav.show_scroll_top());
    }

    #[test]
    fn test_ui_state_turn_start_and_delivery() {
        let mut state = UiState::new(400.0);
        state.process_events(vec![CoachEvent::TurnStart { turn_id: 1 }]);
        assert!(state.responding);
        assert_eq!(state.status_text, COACH_THINKING);

        state.process_events(vec![CoachEvent::ReplyDelivered {
            turn_id: 1,
            kind: ReplyKind::CareerPivot,
        }]);
        assert!(!state.responding);
        assert_eq!(state.status_text, COACH_LIVE);
    }

    #[test]
    fn test_ui_state_reply_dropped_clears_responding() {
        let mut state = UiState::new(400.0);
        state.process_events(vec![
            CoachEvent::TurnStart { turn_id: 2 },
            CoachEvent::ReplyDropped { turn_id: 2 },
        ]);
        assert!(!state.responding);
    }

    #[test]
    fn test_ui_state_user_message_keeps_state() {
        let mut state = UiState::new(400.0);
        state.process_events(vec![CoachEvent::TurnStart { turn_id: 1 }]);
        state.process_events(vec![CoachEvent::UserMessage { text: "agile".to_string() }]);
        assert!(state.responding);
        assert_eq!(state.status_text, COACH_THINKING);
    }

    #[test]
    fn test_apply_submission_clears_input_only_when_accepted() {
        let bus = EventBus::new();
        let mut session = ChatSession::new(CoachConfig::default(), bus.clone());
        let mut state = UiState::new(400.0);

        state.input_text = "   ".to_string();
        let ignored = session.submit(&state.input_text.clone());
        state.apply_submission(&ignored);
        assert_eq!(state.input_text, "   ");

        state.input_text = "agile".to_string();
        let accepted = session.submit(&state.input_text.clone());
        assert!(matches!(accepted, Submission::Accepted(_)));
        state.apply_submission(&accepted);
        assert!(state.input_text.is_empty());

        state.process_events(bus.drain());
        assert!(state.responding);
    }

    #[test]
    fn test_can_send() {
        let mut state = UiState::new(400.0);
        assert!(!state.can_send());
        state.input_text = "hi".to_string();
        assert!(state.can_send());
        state.responding = true;
        assert!(!state.can_send());
    }

    // ─── Navigator Tests ─────────────────────────────────────

    #[test]
    fn test_navigator_request_and_take() {
        let mut nav = Navigator::new(400.0);
        nav.request(NavTarget::Coach);
        assert_eq!(nav.pending(), Some(NavTarget::Coach));
        assert!(!nav.take(NavTarget::Pricing));
        assert!(nav.take(NavTarget::Coach));
        assert!(nav.pending().is_none());
        assert!(!nav.take(NavTarget::Coach));
    }

    #[test]
    fn test_navigator_later_request_wins() {
        let mut nav = Navigator::new(400.0);
        nav.request(NavTarget::Coach);
        nav.request(NavTarget::Pricing);
        assert_eq!(nav.pending(), Some(NavTarget::Pricing));
    }

    #[test]
    fn test_navigator_scroll_top_threshold() {
        let mut nav = Navigator::new(400.0);
        nav.set_offset(400.0);
        assert!(!nav.show_scroll_top());
        nav.set_offset(401.0);
        assert!(nav.show_scroll_top());
        assert_eq!(nav.offset(), 401.0);
    }

    // ─── Theme Tests ─────────────────────────────────────────

    #[test]
    fn test_content_width() {
        assert_eq!(theme::content_width(375.0), 375.0);
        assert_eq!(theme::content_width(700.0), 540.0);
        assert_eq!(theme::content_width(900.0), 900.0);
        assert_eq!(theme::content_width(1600.0), 1000.0);
    }

    #[test]
    fn test_apply_theme() {
        let ctx = egui::Context::default();
        theme::apply_theme(&ctx);
        assert_eq!(ctx.style().visuals.panel_fill, theme::BG_PAGE);
        assert!(!ctx.style().visuals.dark_mode);
    }

    // ─── Headless Render Tests ───────────────────────────────

    fn render_page(state: &mut UiState, session: &ChatSession) -> Vec<PageAction> {
        let ctx = egui::Context::default();
        theme::apply_theme(&ctx);
        let mut actions = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let url = &session.config().hero_image_url;
                actions.extend(crate::panels::hero::hero_panel(ui, state, url));
                crate::panels::trust::trust_strip(ui);
                actions.extend(crate::panels::coach::coach_panel(ui, state, session.messages()));
                let _ = crate::panels::pricing::pricing_panel(
                    ui,
                    &renew_types::content::pricing_tiers(),
                );
                crate::panels::footer::footer(ui);
            });
        });
        actions
    }

    #[test]
    fn test_render_page_idle_without_input() {
        let session = ChatSession::new(CoachConfig::default(), EventBus::new());
        let mut state = UiState::new(400.0);
        assert!(render_page(&mut state, &session).is_empty());
    }

    #[test]
    fn test_render_page_with_rich_replies_and_submitted_email() {
        let mut session = ChatSession::new(CoachConfig::default(), EventBus::new());
        for input in ["agile", "gap", "hello"] {
            if let Submission::Accepted(pending) = session.submit(input) {
                assert!(session.deliver(pending));
            }
        }
        assert_eq!(session.messages().len(), 7);

        let mut state = UiState::new(400.0);
        state.email.email = "a@b.co".to_string();
        state.email.submit().unwrap();
        state.responding = true;
        assert!(render_page(&mut state, &session).is_empty());
    }
}
