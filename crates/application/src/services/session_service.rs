//! In-memory session registry
//!
//! Each browser session owns one [`TripSession`]. Sessions are stored only
//! once they generate a trip, expire after an idle period and are capped in
//! number.

use std::sync::Arc;
use std::time::Duration;

use domain::{SessionId, TransportMode, TripOutcome, TripSession};
use moka::{ops::compute::Op, sync::Cache};
use tracing::{debug, instrument};

use super::trip_service::TripService;

/// Bounds on the session registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    /// Maximum number of stored sessions
    pub max_sessions: u64,
    /// Sessions untouched for this long are dropped
    pub idle_timeout: Duration,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_sessions: 10_000,
            idle_timeout: Duration::from_secs(24 * 60 * 60),
        }
    }
}

/// Session registry driving trip generation
pub struct SessionService {
    trips: Arc<TripService>,
    sessions: Cache<SessionId, TripSession>,
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("sessions", &self.sessions.entry_count())
            .finish_non_exhaustive()
    }
}

impl SessionService {
    pub fn new(trips: Arc<TripService>) -> Self {
        Self::with_limits(trips, SessionLimits::default())
    }

    pub fn with_limits(trips: Arc<TripService>, limits: SessionLimits) -> Self {
        Self {
            trips,
            sessions: Cache::builder()
                .max_capacity(limits.max_sessions)
                .time_to_idle(limits.idle_timeout)
                .build(),
        }
    }

    pub fn trips(&self) -> &TripService {
        &self.trips
    }

    /// Resolve the session of a request that changes state
    ///
    /// A live id is reused. Any other id is replaced by a fresh one, so a
    /// client cannot choose the id it is given.
    pub fn get_or_create(&self, id: Option<SessionId>) -> SessionId {
        if let Some(id) = id.filter(|id| self.sessions.contains_key(id)) {
            return id;
        }

        let id = SessionId::new();
        self.sessions.insert(id, TripSession::new(id));
        debug!(%id, "Session created");
        id
    }

    /// Copy of the session state, or an idle session if unknown
    pub fn snapshot(&self, id: SessionId) -> TripSession {
        self.sessions
            .get(&id)
            .unwrap_or_else(|| TripSession::new(id))
    }

    /// Copy of the session state for one page render
    ///
    /// The pending notice is returned with the copy and cleared from the
    /// stored session. Unknown ids render idle and are not stored.
    pub fn render_snapshot(&self, id: SessionId) -> TripSession {
        let mut snapshot = None;
        self.sessions.entry(id).and_compute_with(|entry| match entry {
            Some(entry) => {
                let mut session = entry.into_value();
                snapshot = Some(session.clone());
                session.take_notice();
                Op::Put(session)
            },
            None => Op::Nop,
        });
        snapshot.unwrap_or_else(|| TripSession::new(id))
    }

    /// Draw a trip for the session and record the outcome
    #[instrument(skip(self))]
    pub fn generate(&self, id: SessionId, station: &str, mode: TransportMode) -> TripOutcome {
        let outcome = self.trips.draw(station, mode);

        self.sessions.entry(id).and_compute_with(|entry| {
            let mut session = entry.map_or_else(|| TripSession::new(id), moka::Entry::into_value);
            session.record_generation(station, mode, outcome.clone());
            Op::Put(session)
        });

        outcome
    }

    /// Return the session to idle
    #[instrument(skip(self))]
    pub fn reset(&self, id: SessionId) {
        self.sessions.entry(id).and_compute_with(|entry| match entry {
            Some(entry) => {
                let mut session = entry.into_value();
                session.reset();
                Op::Put(session)
            },
            None => Op::Nop,
        });
    }

    /// Number of live sessions
    pub fn session_count(&self) -> u64 {
        self.sessions.run_pending_tasks();
        self.sessions.entry_count()
    }
}
