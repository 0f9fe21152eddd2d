use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::models::Shot;
use crate::core::types::{MIN_SETUP_MINUTES, TransportMode, TravelServiceKind};
use crate::errors::{Error, Result};
use crate::extensions::string::StableHash;

/// Answer from a location/travel collaborator. `eta_minutes` is the
/// collaborator's own travel time for the requested mode, when it has one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelEstimate {
    pub distance_km: f64,
    pub eta_minutes: Option<i32>,
}

pub trait TravelService {
    fn estimate(&self, from: &str, to: &str, mode: TransportMode) -> Result<TravelEstimate>;
}

/// Distance guessed from the two location names. Deterministic, so the
/// same pair always yields the same leg; identical names are 0 km apart.
pub struct EstimateTravelService;

impl TravelService for EstimateTravelService {
    fn estimate(&self, from: &str, to: &str, mode: TransportMode) -> Result<TravelEstimate> {
        if from == to {
            return Ok(TravelEstimate {
                distance_km: 0.0,
                eta_minutes: Some(MIN_SETUP_MINUTES),
            });
        }
        let distance_km = ((format!("{from}{to}").stable_hash() % 15).abs() + 2) as f64;
        Ok(TravelEstimate {
            distance_km,
            eta_minutes: Some(required_minutes(distance_km, mode)),
        })
    }
}

/// Stand-in for an unreachable collaborator.
pub struct OfflineTravelService;

impl TravelService for OfflineTravelService {
    fn estimate(&self, from: &str, to: &str, _mode: TransportMode) -> Result<TravelEstimate> {
        Err(Error::travel(format!(
            "no travel service configured for '{from}' -> '{to}'"
        )))
    }
}

pub fn make_travel_service(kind: TravelServiceKind) -> Box<dyn TravelService> {
    match kind {
        TravelServiceKind::Estimate => Box::new(EstimateTravelService),
        TravelServiceKind::Offline => Box::new(OfflineTravelService),
    }
}

/// `distance / speed * 60`, rounded to the nearest minute.
pub fn required_minutes(distance_km: f64, mode: TransportMode) -> i32 {
    (distance_km / mode.speed_kmh() * 60.0).round() as i32
}

/// Minutes between the end of `prev` and the start of `next`. Negative when
/// they overlap.
pub fn estimate_gap(prev: &Shot, next: &Shot) -> i32 {
    next.start_time.minutes() - prev.end_minutes()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelAssessment {
    pub distance_km: f64,
    pub required_minutes: i32,
    pub available_minutes: i32,
    pub is_at_risk: bool,
    /// How late the next shot starts if the crew leaves on time.
    pub delay_minutes: i32,
}

/// Feasibility of moving from `prev` to `next`. Advisory only.
///
/// The collaborator's ETA wins when it supplies a usable one; otherwise the
/// time is derived from distance and mode speed. Same-location moves still
/// need `setup_allowance` minutes for teardown and setup, and never less
/// than [`MIN_SETUP_MINUTES`].
pub fn assess_travel(
    prev: &Shot,
    next: &Shot,
    estimate: &TravelEstimate,
    mode: TransportMode,
    setup_allowance: i32,
) -> TravelAssessment {
    let available_minutes = estimate_gap(prev, next);
    let mut required = estimate
        .eta_minutes
        .filter(|eta| *eta >= 0)
        .unwrap_or_else(|| required_minutes(estimate.distance_km, mode));
    if prev.location == next.location {
        required = required.max(setup_allowance.max(MIN_SETUP_MINUTES));
    }
    TravelAssessment {
        distance_km: estimate.distance_km,
        required_minutes: required,
        available_minutes,
        is_at_risk: required > available_minutes,
        delay_minutes: (required - available_minutes).max(0),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TravelStatus {
    Assessed(TravelAssessment),
    /// The collaborator failed; no risk is reported.
    Unknown { reason: String },
}

impl TravelStatus {
    pub fn is_at_risk(&self) -> bool {
        matches!(self, TravelStatus::Assessed(a) if a.is_at_risk)
    }
}

/// One transition between adjacent shots of a day.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelLeg<'a> {
    pub from: &'a Shot,
    pub to: &'a Shot,
    pub mode: TransportMode,
    pub status: TravelStatus,
}

/// Receives every evaluated leg (for logging and the like).
pub trait TravelObserver {
    fn leg_assessed(&self, leg: &TravelLeg<'_>);
}

/// Assesses each adjacent pair of a start-ordered day. Adjacency only means
/// "next in time" for the unfiltered list, so a filtered view gets no legs.
pub fn assess_day<'a>(
    day: &[&'a Shot],
    service: &dyn TravelService,
    mode: TransportMode,
    setup_allowance: i32,
    is_unfiltered: bool,
    observer: Option<&dyn TravelObserver>,
) -> Vec<TravelLeg<'a>> {
    if !is_unfiltered {
        return Vec::new();
    }
    day.windows(2)
        .map(|pair| {
            let (prev, next) = (pair[0], pair[1]);
            let status = match service.estimate(&prev.location, &next.location, mode) {
                Ok(estimate) => TravelStatus::Assessed(assess_travel(
                    prev,
                    next,
                    &estimate,
                    mode,
                    setup_allowance,
                )),
                Err(err) => TravelStatus::Unknown {
                    reason: err.to_string(),
                },
            };
            let leg = TravelLeg {
                from: prev,
                to: next,
                mode,
                status,
            };
            if let Some(obs) = observer {
                obs.leg_assessed(&leg);
            }
            leg
        })
        .collect()
}

/// Ticket handed to an in-flight estimate; compared on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelTicket(u64);

/// Discards estimates computed against a shot list that has since changed.
/// Cloned handles share one generation counter.
#[derive(Debug, Clone, Default)]
pub struct TravelRequests {
    generation: Arc<AtomicU64>,
}

impl TravelRequests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> TravelTicket {
        TravelTicket(self.generation.load(Ordering::SeqCst))
    }

    /// Call on every shot-list mutation.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: TravelTicket) -> bool {
        ticket.0 == self.generation.load(Ordering::SeqCst)
    }

    /// `Some(value)` if nothing changed since `ticket` was issued.
    pub fn accept<T>(&self, ticket: TravelTicket, value: T) -> Option<T> {
        self.is_current(ticket).then_some(value)
    }
}
