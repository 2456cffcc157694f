#[cfg(test)]
mod tests {
    use crate::state::*;
    use crate::theme::*;
    use closer_core::event_bus::EventBus;
    use closer_core::negotiation::NegotiationSession;
    use closer_types::event::{AttemptId, NegotiationEvent};
    use closer_types::session::{Outcome, Sentiment};

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.input_text.is_empty());
        assert_eq!(state.status_text, "Ready");
        assert!(state.notice.is_none());
        assert!(!state.celebrate);
        assert!(state.last_sentiment.is_none());
    }

    #[test]
    fn test_ui_state_default() {
        let state = UiState::default();
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_ui_state_started_clears_previous_attempt() {
        let mut state = UiState::new();
        state.celebrate = true;
        state.input_text = "leftover".to_string();
        state.notice = Some(Notice {
            text: "old".to_string(),
            success: true,
        });

        state.process_events(vec![NegotiationEvent::Started {
            attempt_id: uuid_stub(),
        }]);

        assert_eq!(state.status_text, "Negotiating");
        assert!(!state.celebrate);
        assert!(state.notice.is_none());
        assert!(state.input_text.is_empty());
    }

    #[test]
    fn test_ui_state_tracks_sentiment() {
        let mut state = UiState::new();
        state.process_events(vec![NegotiationEvent::CounterpartyReplied {
            text: "That is insulting.".to_string(),
            sentiment: Sentiment::Bad,
        }]);
        assert_eq!(state.last_sentiment, Some(Sentiment::Bad));
        assert_eq!(state.status_text, "The CFO is offended");
    }

    #[test]
    fn test_ui_state_deal_issued_celebrates() {
        let mut state = UiState::new();
        state.process_events(vec![NegotiationEvent::DealIssued]);
        assert!(state.celebrate);
        let notice = state.notice.unwrap();
        assert!(notice.success);
        assert_eq!(notice.text, ISSUED_NOTICE);
    }

    #[test]
    fn test_ui_state_timeout_notice() {
        let mut state = UiState::new();
        state.process_events(vec![NegotiationEvent::Rescinded {
            outcome: Outcome::RescindedTimeout,
        }]);
        let notice = state.notice.unwrap();
        assert!(!notice.success);
        assert_eq!(notice.text, TIMEOUT_NOTICE);
        assert!(!state.celebrate);
    }

    #[test]
    fn test_ui_state_offense_notice_uses_status_label() {
        let mut state = UiState::new();
        state.process_events(vec![NegotiationEvent::Rescinded {
            outcome: Outcome::RescindedOffense,
        }]);
        assert_eq!(
            state.notice.unwrap().text,
            Outcome::RescindedOffense.status_label()
        );
    }

    #[test]
    fn test_ui_state_restarted_resets() {
        let mut state = UiState::new();
        state.process_events(vec![
            NegotiationEvent::DealIssued,
            NegotiationEvent::Restarted,
        ]);
        assert_eq!(state.status_text, "Ready");
        assert!(!state.celebrate);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_take_input_trims_and_clears() {
        let mut state = UiState::new();
        state.input_text = "  the ROI is huge  ".to_string();
        assert_eq!(state.take_input(), Some("the ROI is huge".to_string()));
        assert!(state.input_text.is_empty());
    }

    #[test]
    fn test_take_input_blank_is_none() {
        let mut state = UiState::new();
        state.input_text = "   ".to_string();
        assert_eq!(state.take_input(), None);
        assert!(state.input_text.is_empty());
    }

    // ─── Session → UI flow ───────────────────────────────────

    #[test]
    fn test_sync_without_events_is_false() {
        let bus = EventBus::new();
        let mut state = UiState::new();
        assert!(!state.sync(&bus));
    }

    #[test]
    fn test_sync_consumes_the_batch() {
        let bus = EventBus::new();
        let mut state = UiState::new();
        bus.emit(NegotiationEvent::DealIssued);

        assert!(state.sync(&bus));
        assert!(state.celebrate);
        assert!(!state.sync(&bus));
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_full_winning_flow() {
        let bus = EventBus::new();
        let mut session = NegotiationSession::new(bus.clone());
        let mut state = UiState::new();

        session.start();
        assert!(state.sync(&bus));
        assert_eq!(state.status_text, "Negotiating");

        session.submit("What about the budget?");
        state.sync(&bus);
        assert_eq!(state.last_sentiment, Some(Sentiment::Neutral));

        session.submit("The ROI speaks for itself, please sign");
        state.sync(&bus);
        assert!(state.celebrate);
        assert_eq!(state.status_text, "Deal closed");
        assert!(session.is_over());

        session.restart();
        state.sync(&bus);
        assert_eq!(state.status_text, "Ready");
        assert!(bus.drain().is_empty());
    }

    // ─── Theme Tests ─────────────────────────────────────────

    #[test]
    fn test_clock_color_turns_red() {
        assert_eq!(clock_color(CLOCK_DANGER_SECS), ERROR);
        assert_eq!(clock_color(0), ERROR);
        assert_eq!(clock_color(CLOCK_DANGER_SECS + 1), TEXT_PRIMARY);
    }

    #[test]
    fn test_sentiment_colors() {
        assert_eq!(sentiment_color(Some(Sentiment::Good)), SUCCESS);
        assert_eq!(sentiment_color(Some(Sentiment::Bad)), ERROR);
        assert_eq!(sentiment_color(None), TEXT_SECONDARY);
    }

    fn uuid_stub() -> AttemptId {
        AttemptId::nil()
    }
}
