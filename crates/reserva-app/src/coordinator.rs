//! The booking workflow state machine.

use reserva_proto::{Availability, BookOutcome, CancelOutcome};

use crate::{
    action::{CoordinatorAction, Notice},
    event::CoordinatorEvent,
    refresh::{RefreshListener, RefreshSignal},
    state::{BookingDraft, BookingParams, BookingPhase, CheckParams},
};

/// Orchestrates selection, availability re-check, submission, and the
/// post-mutation refresh signal.
///
/// Pure state machine in the sans-IO style: [`Coordinator::handle`]
/// consumes one event and returns the actions the driver must execute.
/// Incomplete drafts are rejected synchronously - a validation failure
/// surfaces as a notice and never produces a `Perform*` action, so it
/// never reaches the network layer.
///
/// The machine is the single writer of its draft and phase; completions
/// for requests the user has since invalidated are detected by parameter
/// comparison and dropped.
#[derive(Debug)]
pub struct Coordinator {
    phase: BookingPhase,
    draft: BookingDraft,
    refresh: RefreshSignal,
}

impl Coordinator {
    /// New coordinator in [`BookingPhase::Idle`] with an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self { phase: BookingPhase::Idle, draft: BookingDraft::new(), refresh: RefreshSignal::new() }
    }

    /// Current workflow phase.
    #[must_use]
    pub fn phase(&self) -> BookingPhase {
        self.phase
    }

    /// The in-progress selection.
    #[must_use]
    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Number of confirmed mutations so far.
    #[must_use]
    pub fn refresh_count(&self) -> u64 {
        self.refresh.count()
    }

    /// Subscribe to the post-mutation refresh signal.
    #[must_use]
    pub fn subscribe_refresh(&self) -> RefreshListener {
        self.refresh.subscribe()
    }

    /// Process one event and return the actions to execute.
    pub fn handle(&mut self, event: CoordinatorEvent) -> Vec<CoordinatorAction> {
        match event {
            CoordinatorEvent::SelectRoom { room_id } => {
                self.leave_resting_phase();
                self.draft.select_room(room_id);
                vec![]
            },
            CoordinatorEvent::SelectDate { date } => {
                self.leave_resting_phase();
                self.draft.select_date(date);
                vec![]
            },
            CoordinatorEvent::SelectSlot { slot } => {
                self.leave_resting_phase();
                self.draft.select_slot(slot);
                vec![]
            },
            CoordinatorEvent::SetHolder { holder } => {
                self.leave_resting_phase();
                self.draft.set_holder(holder);
                vec![]
            },
            CoordinatorEvent::CheckRequested => self.handle_check_requested(),
            CoordinatorEvent::CheckCompleted { params, result } => {
                self.handle_check_completed(&params, result)
            },
            CoordinatorEvent::BookRequested => self.handle_book_requested(),
            CoordinatorEvent::BookCompleted { params, result } => {
                self.handle_book_completed(&params, result)
            },
            CoordinatorEvent::CancelRequested => self.handle_cancel_requested(),
            CoordinatorEvent::CancelCompleted { params, result } => {
                self.handle_cancel_completed(&params, result)
            },
        }
    }

    /// `Succeeded`/`Failed` are resting states; any user action re-enters
    /// the machine as from `Idle`.
    fn leave_resting_phase(&mut self) {
        if matches!(self.phase, BookingPhase::Succeeded | BookingPhase::Failed) {
            self.phase = BookingPhase::Idle;
        }
    }

    fn busy(&self) -> Option<Vec<CoordinatorAction>> {
        matches!(self.phase, BookingPhase::Checking | BookingPhase::Booking).then(|| {
            vec![CoordinatorAction::Notify {
                notice: Notice::failure("Another request is still in flight."),
            }]
        })
    }

    fn handle_check_requested(&mut self) -> Vec<CoordinatorAction> {
        if let Some(actions) = self.busy() {
            return actions;
        }
        self.leave_resting_phase();

        match self.draft.check_params() {
            Ok(params) => {
                self.phase = BookingPhase::Checking;
                vec![CoordinatorAction::PerformCheck { params }]
            },
            Err(err) => {
                // Validation failures never transition and never hit the
                // network.
                vec![CoordinatorAction::Notify { notice: Notice::failure(err.to_string()) }]
            },
        }
    }

    fn handle_check_completed(
        &mut self,
        params: &CheckParams,
        result: Result<Availability, String>,
    ) -> Vec<CoordinatorAction> {
        if self.phase != BookingPhase::Checking {
            tracing::warn!(?params, "dropping check completion outside the checking phase");
            return vec![];
        }
        self.phase = BookingPhase::Idle;

        // The user may have changed the selection while the check was in
        // flight; its answer is about a snapshot that no longer matters.
        if self.draft.check_params().as_ref() != Ok(params) {
            tracing::warn!(?params, "dropping stale check completion");
            return vec![];
        }

        let notice = match result {
            Ok(Availability::Available) => Notice::success(format!(
                "Room {} is available on {} at {}.",
                params.room_id, params.date, params.slot
            )),
            Ok(Availability::Taken) => Notice::failure(format!(
                "Room {} is already reserved on {} at {}.",
                params.room_id, params.date, params.slot
            )),
            Err(reason) => Notice::failure(format!("Availability check failed: {reason}")),
        };

        vec![CoordinatorAction::Notify { notice }]
    }

    fn handle_book_requested(&mut self) -> Vec<CoordinatorAction> {
        if let Some(actions) = self.busy() {
            return actions;
        }
        self.leave_resting_phase();

        match self.draft.booking_params() {
            Ok(params) => {
                self.phase = BookingPhase::Booking;
                vec![CoordinatorAction::PerformBooking { params }]
            },
            Err(err) => {
                vec![CoordinatorAction::Notify { notice: Notice::failure(err.to_string()) }]
            },
        }
    }

    fn handle_book_completed(
        &mut self,
        params: &BookingParams,
        result: Result<BookOutcome, String>,
    ) -> Vec<CoordinatorAction> {
        if self.phase != BookingPhase::Booking {
            tracing::warn!(?params, "dropping booking completion outside the booking phase");
            return vec![];
        }

        match result {
            Ok(BookOutcome::Confirmed) => {
                self.phase = BookingPhase::Succeeded;
                // The mutation happened remotely either way; the refresh
                // bump must follow the confirmation, not the UI state.
                let generation = self.refresh.bump();
                tracing::debug!(generation, "booking confirmed, refresh signalled");

                if self.draft.matches(params) {
                    self.draft.clear();
                }

                vec![CoordinatorAction::Notify {
                    notice: Notice::success(format!(
                        "Booking confirmed for room {}.",
                        params.room_id
                    )),
                }]
            },
            Ok(BookOutcome::Rejected { reason }) => {
                self.phase = BookingPhase::Failed;
                tracing::error!(%reason, ?params, "booking rejected by the remote");
                vec![CoordinatorAction::Notify { notice: Notice::failure(reason) }]
            },
            Err(reason) => {
                self.phase = BookingPhase::Failed;
                tracing::error!(%reason, ?params, "booking failed");
                vec![CoordinatorAction::Notify {
                    notice: Notice::failure(format!("Booking failed: {reason}")),
                }]
            },
        }
    }

    fn handle_cancel_requested(&mut self) -> Vec<CoordinatorAction> {
        if let Some(actions) = self.busy() {
            return actions;
        }
        self.leave_resting_phase();

        match self.draft.booking_params() {
            Ok(params) => {
                self.phase = BookingPhase::Booking;
                vec![CoordinatorAction::PerformCancel { params }]
            },
            Err(err) => {
                vec![CoordinatorAction::Notify { notice: Notice::failure(err.to_string()) }]
            },
        }
    }

    fn handle_cancel_completed(
        &mut self,
        params: &BookingParams,
        result: Result<CancelOutcome, String>,
    ) -> Vec<CoordinatorAction> {
        if self.phase != BookingPhase::Booking {
            tracing::warn!(?params, "dropping cancel completion outside the booking phase");
            return vec![];
        }

        match result {
            Ok(CancelOutcome::Cancelled) => {
                self.phase = BookingPhase::Succeeded;
                let generation = self.refresh.bump();
                tracing::debug!(generation, "cancellation confirmed, refresh signalled");

                if self.draft.matches(params) {
                    self.draft.clear();
                }

                vec![CoordinatorAction::Notify {
                    notice: Notice::success(format!(
                        "Reservation cancelled for room {}.",
                        params.room_id
                    )),
                }]
            },
            Ok(CancelOutcome::Rejected { reason }) => {
                self.phase = BookingPhase::Failed;
                tracing::error!(%reason, ?params, "cancellation rejected by the remote");
                vec![CoordinatorAction::Notify { notice: Notice::failure(reason) }]
            },
            Err(reason) => {
                self.phase = BookingPhase::Failed;
                tracing::error!(%reason, ?params, "cancellation failed");
                vec![CoordinatorAction::Notify {
                    notice: Notice::failure(format!("Cancellation failed: {reason}")),
                }]
            },
        }
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}
