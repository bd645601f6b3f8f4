use log::{info, warn};

use super::draft::{FieldValues, QuoteDraft};
use super::sink::SubmissionSink;
use super::submit_state::SubmitState;
use super::validation::{validate, QuoteError};
use crate::scheduling::{ScheduledTask, Scheduler};

pub const SUCCESS_MESSAGE: &str = "Thank you for your inquiry! We will get back to you shortly.";

/// What the controller needs from the page: the five fields, the form
/// container and the submit button. Implementations hold their own element
/// handles, so nothing is looked up by id at submit time.
pub trait QuoteView {
    fn read_fields(&self) -> FieldValues;
    /// Blocking, user-facing notice.
    fn notify(&self, message: &str);
    fn reset_fields(&self);
    fn set_submit_state(&self, state: SubmitState);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted(QuoteDraft),
    Rejected(QuoteError),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }
}

/// Owns validation and the submit button lifecycle for one quote form.
/// Built once per page.
pub struct QuoteFormController<V, S, K>
where
    S: Scheduler,
{
    view: V,
    scheduler: S,
    sink: K,
    reset_delay_ms: u32,
    pending_resets: Vec<S::Task>,
}

impl<V, S, K> QuoteFormController<V, S, K>
where
    V: QuoteView + Clone + 'static,
    S: Scheduler,
    K: SubmissionSink,
{
    pub fn new(view: V, scheduler: S, sink: K, reset_delay_ms: u32) -> Self {
        Self {
            view,
            scheduler,
            sink,
            reset_delay_ms,
            pending_resets: Vec::new(),
        }
    }

    /// Entry point for the host's submit event.
    pub fn submit_from_view(&mut self) -> Outcome {
        let draft = QuoteDraft::capture(&self.view.read_fields());
        self.on_submit(draft)
    }

    /// Validation and its notice come first; the button lifecycle starts
    /// once the (blocking) notice is dismissed, on every path.
    pub fn on_submit(&mut self, draft: QuoteDraft) -> Outcome {
        let outcome = self.validate_and_acknowledge(draft);
        self.begin_submitting();
        outcome
    }

    /// Cancels every re-enable timer that has not fired yet.
    pub fn cancel_pending_reset(&mut self) {
        for task in self.pending_resets.drain(..) {
            task.cancel();
        }
    }

    fn validate_and_acknowledge(&mut self, draft: QuoteDraft) -> Outcome {
        if let Err(err) = validate(&draft) {
            warn!("Quote request rejected: {:?}", err);
            self.view.notify(&err.to_string());
            return Outcome::Rejected(err);
        }

        self.sink.submit(&draft);
        info!("Quote request accepted for service {:?}", draft.service);
        self.view.notify(SUCCESS_MESSAGE);
        self.view.reset_fields();
        Outcome::Accepted(draft)
    }

    // Every submit gets its own re-enable timer. Older timers keep running,
    // so overlapping submissions resolve last-timer-wins; their handles are
    // held until they fire.
    // TODO: cancel the previous timer instead once double-submits are
    // confirmed to be unintended.
    fn begin_submitting(&mut self) {
        self.view.set_submit_state(SubmitState::Submitting);

        let view = self.view.clone();
        let task = self.scheduler.schedule(
            self.reset_delay_ms,
            Box::new(move || view.set_submit_state(SubmitState::Idle)),
        );
        self.pending_resets.retain(|t| t.is_pending());
        self.pending_resets.push(task);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::scheduling::testing::ManualScheduler;

    #[derive(Default)]
    struct Recorded {
        fields: FieldValues,
        notices: Vec<String>,
        states: Vec<SubmitState>,
        resets: usize,
        calls: Vec<&'static str>,
        // time the visitor spends reading an alert before dismissing it
        reading: Option<(ManualScheduler, u64)>,
    }

    #[derive(Clone, Default)]
    struct FakeView(Rc<RefCell<Recorded>>);

    impl FakeView {
        fn with_fields(fields: FieldValues) -> Self {
            let view = Self::default();
            view.0.borrow_mut().fields = fields;
            view
        }

        fn fields(&self) -> FieldValues {
            self.0.borrow().fields.clone()
        }

        fn notices(&self) -> Vec<String> {
            self.0.borrow().notices.clone()
        }

        fn button(&self) -> Option<SubmitState> {
            self.0.borrow().states.last().copied()
        }

        fn resets(&self) -> usize {
            self.0.borrow().resets
        }

        fn calls(&self) -> Vec<&'static str> {
            self.0.borrow().calls.clone()
        }

        fn read_alerts_for(&self, scheduler: &ManualScheduler, ms: u64) {
            self.0.borrow_mut().reading = Some((scheduler.clone(), ms));
        }
    }

    impl QuoteView for FakeView {
        fn read_fields(&self) -> FieldValues {
            self.fields()
        }

        fn notify(&self, message: &str) {
            let reading = {
                let mut recorded = self.0.borrow_mut();
                recorded.notices.push(message.to_string());
                recorded.calls.push("notify");
                recorded.reading.clone()
            };
            if let Some((scheduler, ms)) = reading {
                scheduler.advance(ms);
            }
        }

        fn reset_fields(&self) {
            let mut recorded = self.0.borrow_mut();
            recorded.fields = FieldValues::default();
            recorded.resets += 1;
            recorded.calls.push("reset");
        }

        fn set_submit_state(&self, state: SubmitState) {
            let mut recorded = self.0.borrow_mut();
            recorded.states.push(state);
            recorded.calls.push(match state {
                SubmitState::Idle => "idle",
                SubmitState::Submitting => "submitting",
            });
        }
    }

    #[derive(Clone, Default)]
    struct RecordingSink(Rc<RefCell<Vec<QuoteDraft>>>);

    impl SubmissionSink for RecordingSink {
        fn submit(&self, draft: &QuoteDraft) {
            self.0.borrow_mut().push(draft.clone());
        }
    }

    type Controller = QuoteFormController<FakeView, ManualScheduler, RecordingSink>;

    fn controller(view: &FakeView) -> (Controller, ManualScheduler, RecordingSink) {
        let scheduler = ManualScheduler::default();
        let sink = RecordingSink::default();
        let controller = QuoteFormController::new(view.clone(), scheduler.clone(), sink.clone(), 2_000);
        (controller, scheduler, sink)
    }

    fn fields(name: &str, email: &str) -> FieldValues {
        FieldValues {
            full_name: name.to_string(),
            email: email.to_string(),
            company: "Acme Marine".to_string(),
            service: "marine-logistics".to_string(),
            message: "Two supply vessels for Q3".to_string(),
        }
    }

    #[test]
    fn test_valid_submission_acknowledges_and_clears() {
        let view = FakeView::with_fields(fields("Jane Doe", "jane@example.com"));
        let (mut controller, _, sink) = controller(&view);

        let outcome = controller.submit_from_view();

        assert!(outcome.is_accepted());
        assert_eq!(view.notices(), vec![SUCCESS_MESSAGE.to_string()]);
        assert_eq!(view.fields(), FieldValues::default());
        assert_eq!(view.resets(), 1);
        assert_eq!(sink.0.borrow().len(), 1);
        assert_eq!(sink.0.borrow()[0].full_name, "Jane Doe");
    }

    #[test]
    fn test_missing_name_keeps_fields() {
        let original = fields("", "jane@example.com");
        let view = FakeView::with_fields(original.clone());
        let (mut controller, _, sink) = controller(&view);

        let outcome = controller.submit_from_view();

        assert_eq!(outcome, Outcome::Rejected(QuoteError::MissingRequiredField));
        assert_eq!(
            view.notices(),
            vec!["Please fill in all required fields (Name and Email)".to_string()]
        );
        assert_eq!(view.fields(), original);
        assert_eq!(view.resets(), 0);
        assert!(sink.0.borrow().is_empty());
    }

    #[test]
    fn test_whitespace_only_email_counts_as_missing() {
        let view = FakeView::with_fields(fields("Jane Doe", "   "));
        let (mut controller, _, _) = controller(&view);

        assert_eq!(
            controller.submit_from_view(),
            Outcome::Rejected(QuoteError::MissingRequiredField)
        );
    }

    #[test]
    fn test_invalid_email_keeps_fields() {
        let original = fields("Jane Doe", "not-an-email");
        let view = FakeView::with_fields(original.clone());
        let (mut controller, _, sink) = controller(&view);

        let outcome = controller.submit_from_view();

        assert_eq!(outcome, Outcome::Rejected(QuoteError::InvalidEmailFormat));
        assert_eq!(view.notices(), vec!["Please enter a valid email address".to_string()]);
        assert_eq!(view.fields(), original);
        assert!(sink.0.borrow().is_empty());
    }

    #[test]
    fn test_button_cycles_regardless_of_outcome() {
        for (name, email) in [("Jane Doe", "jane@example.com"), ("", ""), ("Jane Doe", "nope")] {
            let view = FakeView::with_fields(fields(name, email));
            let (mut controller, scheduler, _) = controller(&view);

            controller.submit_from_view();
            assert_eq!(view.button(), Some(SubmitState::Submitting));

            scheduler.advance(1_999);
            assert_eq!(view.button(), Some(SubmitState::Submitting));

            scheduler.advance(1);
            assert_eq!(view.button(), Some(SubmitState::Idle));
            assert_eq!(scheduler.pending(), 0);
        }
    }

    #[test]
    fn test_overlapping_submissions_last_timer_wins() {
        let view = FakeView::with_fields(fields("", ""));
        let (mut controller, scheduler, _) = controller(&view);

        controller.submit_from_view();
        scheduler.advance(1_500);
        controller.submit_from_view();
        assert_eq!(scheduler.pending(), 2);

        // first timer re-enables the button while the second submit is in flight
        scheduler.advance(500);
        assert_eq!(view.button(), Some(SubmitState::Idle));

        controller.submit_from_view();
        scheduler.advance(1_500);
        assert_eq!(view.button(), Some(SubmitState::Idle));
        scheduler.advance(500);
        assert_eq!(view.button(), Some(SubmitState::Idle));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_notice_comes_before_button_disables() {
        let view = FakeView::with_fields(fields("Jane Doe", "jane@example.com"));
        let (mut controller, _, _) = controller(&view);
        controller.submit_from_view();
        assert_eq!(view.calls(), vec!["notify", "reset", "submitting"]);

        let view = FakeView::with_fields(fields("Jane Doe", "not-an-email"));
        let (mut controller, _, _) = self::controller(&view);
        controller.submit_from_view();
        assert_eq!(view.calls(), vec!["notify", "submitting"]);
    }

    #[test]
    fn test_slow_alert_still_shows_full_submitting_window() {
        for (name, email) in [("Jane Doe", "jane@example.com"), ("", "")] {
            let view = FakeView::with_fields(fields(name, email));
            let (mut controller, scheduler, _) = controller(&view);
            view.read_alerts_for(&scheduler, 2_500);

            controller.submit_from_view();
            assert_eq!(view.button(), Some(SubmitState::Submitting));

            scheduler.advance(1_999);
            assert_eq!(view.button(), Some(SubmitState::Submitting));
            scheduler.advance(1);
            assert_eq!(view.button(), Some(SubmitState::Idle));
        }
    }

    #[test]
    fn test_cancel_pending_reset_covers_overlapping_submissions() {
        let view = FakeView::with_fields(fields("", ""));
        let (mut controller, scheduler, _) = controller(&view);

        controller.submit_from_view();
        scheduler.advance(1_500);
        controller.submit_from_view();
        controller.cancel_pending_reset();

        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(5_000);
        assert_eq!(view.button(), Some(SubmitState::Submitting));
    }

    #[test]
    fn test_cancel_pending_reset_leaves_button_disabled() {
        let view = FakeView::with_fields(fields("Jane Doe", "jane@example.com"));
        let (mut controller, scheduler, _) = controller(&view);

        controller.submit_from_view();
        controller.cancel_pending_reset();
        scheduler.advance(5_000);

        assert_eq!(view.button(), Some(SubmitState::Submitting));
    }

    #[test]
    fn test_repeated_successful_submissions_are_independent() {
        let view = FakeView::default();
        let (mut controller, scheduler, sink) = controller(&view);

        for _ in 0..3 {
            view.0.borrow_mut().fields = fields("Jane Doe", "jane@example.com");
            let outcome = controller.submit_from_view();
            assert!(outcome.is_accepted());
            assert_eq!(view.fields(), FieldValues::default());
            scheduler.advance(2_000);
        }

        assert_eq!(view.resets(), 3);
        assert_eq!(view.notices().len(), 3);
        let drafts = sink.0.borrow();
        assert!(drafts.iter().all(|d| *d == drafts[0]));
        assert_eq!(view.button(), Some(SubmitState::Idle));
    }

    #[test]
    fn test_on_submit_accepts_prebuilt_draft() {
        let view = FakeView::default();
        let (mut controller, _, _) = controller(&view);

        let draft = QuoteDraft::capture(&fields(" Jane Doe ", " jane@example.com "));
        match controller.on_submit(draft) {
            Outcome::Accepted(d) => {
                assert_eq!(d.full_name, "Jane Doe");
                assert_eq!(d.email, "jane@example.com");
            }
            other => panic!("expected acceptance, got {:?}", other),
        }
    }
}
