use crate::core::models::Shot;
use crate::core::types::ShotStatus;
use crate::scheduler::DayPlan;
use crate::scheduler::day_plan::sun_times;
use crate::scheduler::readiness::{GearDelta, readiness};
use crate::scheduler::travel::{TravelLeg, TravelStatus};
use crate::ui::ansi::{FG_GREEN, FG_RED, FG_YELLOW, paint};
use crate::ui::table_printer::TableRow;
use crate::ui::width_util::WidthUtil;

#[derive(Debug, Clone)]
pub struct PlanSection {
    pub title: String,
    pub rows: Vec<TableRow>, // shots in start order, notes between them
}

#[derive(Debug, Default, Clone)]
pub struct DisplayDataBuilder {
    util: WidthUtil,
}

impl DisplayDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// One row per shot. Titles longer than `title_width` are shortened.
    pub fn shot_rows(&self, shots: &[&Shot], title_width: usize) -> Vec<TableRow> {
        shots
            .iter()
            .map(|s| {
                TableRow::cells([
                    s.id.to_string(),
                    dash_if_empty(&s.scene_number),
                    self.util.truncate(&s.title, title_width),
                    s.date.to_string(),
                    s.window(),
                    s.location.clone(),
                    status_cell(s.status),
                    gear_cell(s),
                ])
            })
            .collect()
    }

    /// One row per assigned item; shots without gear are skipped.
    pub fn checklist_rows(&self, shots: &[&Shot]) -> Vec<TableRow> {
        let mut rows = Vec::new();
        for shot in shots {
            for (i, item) in shot.equipment_ids.iter().enumerate() {
                let (id, title) = if i == 0 {
                    (shot.id.to_string(), shot.title.clone())
                } else {
                    (String::new(), String::new())
                };
                let mark = if shot.prepared_equipment_ids.contains(item) {
                    paint(FG_GREEN, "[x]")
                } else {
                    "[ ]".to_string()
                };
                rows.push(TableRow::cells([id, title, mark, item.clone()]));
            }
        }
        rows
    }

    pub fn plan_sections(&self, plans: &[DayPlan<'_>]) -> Vec<PlanSection> {
        plans
            .iter()
            .map(|day| {
                let mut rows = Vec::with_capacity(day.shots.len() * 2);
                for (i, shot) in day.shots.iter().enumerate() {
                    if i > 0 {
                        if let Some(leg) = day.legs.get(i - 1) {
                            rows.push(TableRow::Note(travel_note(leg)));
                        }
                        if let Some(delta) = day.hand_overs.get(i - 1) {
                            if let Some(note) = gear_note(delta) {
                                rows.push(TableRow::Note(note));
                            }
                        }
                    }
                    rows.push(TableRow::cells([
                        shot.window(),
                        dash_if_empty(&shot.scene_number),
                        shot.title.clone(),
                        shot.location.clone(),
                        status_cell(shot.status),
                        gear_cell(shot),
                    ]));
                }

                let at_risk = day.at_risk_count();
                let sun = sun_times(day.date);
                let mut title = format!(
                    "{} [sunrise {}, sunset {}] ({} shot(s))",
                    day.date.label(),
                    sun.sunrise,
                    sun.sunset,
                    day.shots.len()
                );
                if at_risk > 0 {
                    title.push_str(&format!(", {at_risk} at risk"));
                }
                PlanSection { title, rows }
            })
            .collect()
    }
}

fn dash_if_empty(s: &str) -> String {
    if s.is_empty() {
        "-".to_string()
    } else {
        s.to_string()
    }
}

fn status_cell(status: ShotStatus) -> String {
    match status {
        ShotStatus::Done => paint(FG_GREEN, status.as_ref()),
        ShotStatus::Pending => status.to_string(),
    }
}

fn gear_cell(shot: &Shot) -> String {
    let r = readiness(shot);
    if r.total == 0 {
        return "-".to_string();
    }
    let text = format!("{}/{}", r.ready, r.total);
    if r.is_complete() {
        paint(FG_GREEN, text)
    } else {
        text
    }
}

fn travel_note(leg: &TravelLeg<'_>) -> String {
    match &leg.status {
        TravelStatus::Assessed(a) if a.is_at_risk => paint(
            FG_RED,
            format!(
                "! {:.1} km by {}: needs {} min, {} min available (+{} min delay)",
                a.distance_km, leg.mode, a.required_minutes, a.available_minutes, a.delay_minutes
            ),
        ),
        TravelStatus::Assessed(a) => format!(
            "> {:.1} km by {}: needs {} min, {} min available",
            a.distance_km, leg.mode, a.required_minutes, a.available_minutes
        ),
        TravelStatus::Unknown { reason } => paint(FG_YELLOW, format!("? {reason}")),
    }
}

fn gear_note(delta: &GearDelta) -> Option<String> {
    if delta.is_empty() {
        return None;
    }
    let mut parts = Vec::new();
    if !delta.to_drop.is_empty() {
        parts.push(format!("drop {}", delta.to_drop.join(", ")));
    }
    if !delta.to_add.is_empty() {
        parts.push(format!("add {}", delta.to_add.join(", ")));
    }
    Some(format!("gear: {}", parts.join("; ")))
}
