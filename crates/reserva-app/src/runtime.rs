//! Generic driver for the coordinator state machine.

use reserva_client::ConnectionMonitor;
use reserva_core::{CalendarDate, Room};

use crate::{
    action::{CoordinatorAction, Notice},
    backend::ReservationBackend,
    coordinator::Coordinator,
    event::CoordinatorEvent,
    refresh::RefreshListener,
    schedule::ScheduleView,
};

/// Drives the [`Coordinator`] against a [`ReservationBackend`].
///
/// The runtime is the single writer of coordinator and schedule state.
/// [`Runtime::dispatch`] feeds one event in, executes every `Perform*`
/// action the machine emits, and feeds the completion back - tagged with
/// the parameters it was issued for - until the machine settles. Remote
/// calls suspend only this dispatch, never the caller's loop: the UI stays
/// free to start another dispatch (e.g. a room switch) while an earlier
/// fetch is still outstanding on another view.
///
/// The occupancy view refetches on demand: after observing the refresh
/// signal ([`Runtime::refresh_listener`]), call [`Runtime::sync_schedule`]
/// - it fetches with the schedule's current (post-mutation) date and lets
/// [`ScheduleView::apply`] drop anything superseded in the meantime.
#[derive(Debug)]
pub struct Runtime<B: ReservationBackend> {
    backend: B,
    coordinator: Coordinator,
    schedule: ScheduleView,
}

impl<B: ReservationBackend> Runtime<B> {
    /// New runtime over a backend.
    pub fn new(backend: B) -> Self {
        Self { backend, coordinator: Coordinator::new(), schedule: ScheduleView::new() }
    }

    /// The booking state machine.
    #[must_use]
    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    /// The occupancy view.
    #[must_use]
    pub fn schedule(&self) -> &ScheduleView {
        &self.schedule
    }

    /// Session-wide connectivity handle.
    #[must_use]
    pub fn connection(&self) -> ConnectionMonitor {
        self.backend.monitor()
    }

    /// Subscribe to the post-mutation refresh signal.
    #[must_use]
    pub fn refresh_listener(&self) -> RefreshListener {
        self.coordinator.subscribe_refresh()
    }

    /// Room ids known to the remote.
    ///
    /// # Errors
    ///
    /// Propagates the backend failure; the room list view degrades to
    /// empty.
    pub async fn list_rooms(&self) -> Result<Vec<Room>, B::Error> {
        self.backend.rooms().await
    }

    /// Feed one event through the machine, executing every remote call it
    /// requests, and return the notices to display.
    pub async fn dispatch(&mut self, event: CoordinatorEvent) -> Vec<Notice> {
        let mut notices = Vec::new();
        let mut pending = self.coordinator.handle(event);

        while !pending.is_empty() {
            for action in std::mem::take(&mut pending) {
                match action {
                    CoordinatorAction::Notify { notice } => notices.push(notice),
                    CoordinatorAction::PerformCheck { params } => {
                        let result =
                            self.backend.check(&params).await.map_err(|e| e.to_string());
                        pending.extend(
                            self.coordinator
                                .handle(CoordinatorEvent::CheckCompleted { params, result }),
                        );
                    },
                    CoordinatorAction::PerformBooking { params } => {
                        let result = self.backend.book(&params).await.map_err(|e| e.to_string());
                        pending.extend(
                            self.coordinator
                                .handle(CoordinatorEvent::BookCompleted { params, result }),
                        );
                    },
                    CoordinatorAction::PerformCancel { params } => {
                        let result =
                            self.backend.cancel(&params).await.map_err(|e| e.to_string());
                        pending.extend(
                            self.coordinator
                                .handle(CoordinatorEvent::CancelCompleted { params, result }),
                        );
                    },
                }
            }
        }

        notices
    }

    /// Point the occupancy view at a date and fetch its snapshot.
    pub async fn view_date(&mut self, date: CalendarDate) {
        self.schedule.select_date(date);
        self.sync_schedule().await;
    }

    /// Refetch the snapshot for the date currently in view, if any.
    ///
    /// The response is tagged with the date it was requested for;
    /// [`ScheduleView::apply`] drops it if the selection moved on while
    /// the fetch was in flight.
    pub async fn sync_schedule(&mut self) {
        let Some(date) = self.schedule.date().cloned() else {
            return;
        };

        let result = self.backend.occupancy(&date).await.map_err(|e| e.to_string());
        self.schedule.apply(&date, result);
    }
}
