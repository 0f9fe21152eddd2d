use crate::core::context::AppContext;
use crate::core::models::Shot;
use crate::core::types::{ShootDate, TransportMode};
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use crate::scheduler::day_plan::{ShotFilter, group_by_date, progress};
use crate::scheduler::readiness::{GearDelta, gear_delta};
use crate::scheduler::travel::{
    TravelLeg, TravelObserver, TravelService, TravelStatus, assess_day, make_travel_service,
};
use crate::ui::display_manager::DisplayManager;

pub mod clock;
pub mod conflict;
pub mod day_plan;
pub mod readiness;
pub mod travel;
#[cfg(test)]
mod tests;

struct LoggerObserver {
    logger: Logger,
}

impl TravelObserver for LoggerObserver {
    fn leg_assessed(&self, leg: &TravelLeg<'_>) {
        match &leg.status {
            TravelStatus::Assessed(a) if a.is_at_risk => self.logger.warn(
                format!(
                    "Travel risk on {}: shot {} -> shot {} needs {} min by {}, {} min available (delay {} min)",
                    leg.from.date,
                    leg.from.id,
                    leg.to.id,
                    a.required_minutes,
                    leg.mode,
                    a.available_minutes,
                    a.delay_minutes
                ),
                LogTarget::FileOnly,
            ),
            TravelStatus::Assessed(a) => self.logger.info(
                format!(
                    "Travel ok on {}: shot {} -> shot {} needs {} min, {} min available",
                    leg.from.date, leg.from.id, leg.to.id, a.required_minutes, a.available_minutes
                ),
                LogTarget::FileOnly,
            ),
            TravelStatus::Unknown { reason } => self.logger.info(
                format!(
                    "Travel unknown on {}: shot {} -> shot {} ({reason})",
                    leg.from.date, leg.from.id, leg.to.id
                ),
                LogTarget::FileOnly,
            ),
        }
    }
}

/// What the plan view shows: an optional single day, a filter and a
/// transport mode override.
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    pub date: Option<ShootDate>,
    pub filter: ShotFilter,
    pub mode: Option<TransportMode>,
}

/// One rendered shoot day.
#[derive(Debug, Clone)]
pub struct DayPlan<'a> {
    pub date: ShootDate,
    pub shots: Vec<&'a Shot>,
    /// Empty whenever the view is filtered.
    pub legs: Vec<TravelLeg<'a>>,
    /// Gear hand-over between each adjacent pair, aligned with `shots[1..]`.
    pub hand_overs: Vec<GearDelta>,
}

impl DayPlan<'_> {
    pub fn at_risk_count(&self) -> usize {
        self.legs.iter().filter(|l| l.status.is_at_risk()).count()
    }
}

pub struct ShotPlanner<'a> {
    ctx: &'a AppContext,
    mode: TransportMode,
    setup_allowance: i32,
    service: Box<dyn TravelService>,
    observer: LoggerObserver,
}

impl<'a> ShotPlanner<'a> {
    pub fn new(ctx: &'a AppContext) -> Self {
        let mode = ctx.config.travel_mode();
        let setup_allowance = ctx.config.setup_allowance();
        let service = make_travel_service(ctx.config.travel_service());
        let observer = LoggerObserver {
            logger: ctx.logger.clone(),
        };
        Self {
            ctx,
            mode,
            setup_allowance,
            service,
            observer,
        }
    }

    /// Replaces the configured travel collaborator.
    pub fn with_service(mut self, service: Box<dyn TravelService>) -> Self {
        self.service = service;
        self
    }

    /// Buckets `shots` by day and, for an unfiltered view, evaluates each
    /// transition between neighbouring shots.
    pub fn build<'s>(&self, shots: &'s [Shot], request: &PlanRequest) -> Vec<DayPlan<'s>> {
        let mode = request.mode.unwrap_or(self.mode);
        let is_unfiltered = !request.filter.is_active();
        let visible = request.filter.apply(shots);
        let in_scope = visible
            .into_iter()
            .filter(|s| request.date.is_none_or(|d| s.date == d));

        group_by_date(in_scope)
            .into_iter()
            .map(|(date, day)| {
                let legs = assess_day(
                    &day,
                    self.service.as_ref(),
                    mode,
                    self.setup_allowance,
                    is_unfiltered,
                    Some(&self.observer),
                );
                let hand_overs = day.windows(2).map(|p| gear_delta(p[0], p[1])).collect();
                DayPlan {
                    date,
                    shots: day,
                    legs,
                    hand_overs,
                }
            })
            .collect()
    }

    /// Builds and prints the plan for the current shot list. Returns
    /// `false` without printing when the list changed while travel was
    /// being estimated.
    pub fn show(&self, request: &PlanRequest) -> Result<bool> {
        let ticket = self.ctx.travel_requests.begin();
        let shots = self.ctx.shots.snapshot();
        let plans = self.build(&shots, request);

        let Some(plans) = self.ctx.travel_requests.accept(ticket, plans) else {
            self.ctx.logger.warn(
                "Shot list changed while planning; discarded stale travel estimates. Run 'plan' again.",
                LogTarget::ConsoleAndFile,
            );
            return Ok(false);
        };

        let mode = request.mode.unwrap_or(self.mode);
        DisplayManager::new().display_plan(&plans, progress(&shots), mode, request.filter.is_active());

        let at_risk: usize = plans.iter().map(DayPlan::at_risk_count).sum();
        self.ctx.logger.info(
            format!(
                "Planned {} day(s), {} travel leg(s) at risk.",
                plans.len(),
                at_risk
            ),
            LogTarget::FileOnly,
        );
        Ok(true)
    }
}
