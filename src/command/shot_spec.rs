use crate::arg::args::Arg;
use crate::core::aliases::EquipmentId;
use crate::core::models::{DEFAULT_LOCATION, Shot};
use crate::core::types::{ClockTime, ShootDate};
use crate::errors::{Error, Result, require_parse};
use crate::scheduler::conflict::{ShotSlot, SlotEnd, find_conflict, find_conflict_excluding};
use crate::scheduler::readiness::assign_equipment;

/// Everything a `shot` or `mod` line may carry. Order on the line is free;
/// each field may appear once, equipment any number of times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShotFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<ShootDate>,
    pub start: Option<ClockTime>,
    pub end: Option<SlotEnd>,
    pub location: Option<String>,
    pub scene: Option<String>,
    pub gear: Vec<EquipmentId>,
}

fn set_once<T>(slot: &mut Option<T>, value: T, what: &str) -> Result<()> {
    if slot.is_some() {
        return Err(Error::parse(format!("The {what} was given more than once.")));
    }
    *slot = Some(value);
    Ok(())
}

impl ShotFields {
    pub fn from_args(args: &[Arg]) -> Result<Self> {
        let mut f = Self::default();
        for arg in args {
            match arg {
                Arg::Name(s) if f.title.is_none() => f.title = Some(s.clone()),
                Arg::Name(s) => set_once(&mut f.description, s.clone(), "description")?,
                Arg::Date(d) => set_once(&mut f.date, *d, "date")?,
                Arg::TimeSpan(start, end) => {
                    set_once(&mut f.start, *start, "start time")?;
                    set_once(&mut f.end, SlotEnd::At(*end), "end time or duration")?;
                }
                Arg::Time(t) => set_once(&mut f.start, *t, "start time")?,
                Arg::Duration(d) => set_once(&mut f.end, SlotEnd::After(*d), "end time or duration")?,
                Arg::Location(l) => set_once(&mut f.location, l.clone(), "location")?,
                Arg::Scene(s) => set_once(&mut f.scene, s.clone(), "scene number")?,
                Arg::Gear(g) => {
                    if !f.gear.contains(g) {
                        f.gear.push(g.clone());
                    }
                }
                other => return Err(Error::parse(format!("Unexpected argument: {other}"))),
            }
        }
        Ok(f)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn touches_timing(&self) -> bool {
        self.date.is_some() || self.start.is_some() || self.end.is_some()
    }

    /// Builds a new shot and checks it against `existing`. Unset location and
    /// scene fall back to `Location TBD` and `<count + 1>X`.
    pub fn into_new_shot(self, existing: &[Shot]) -> Result<Shot> {
        let title = require_parse(self.title, "A shot needs a quoted title.")?;
        let date = require_parse(self.date, "A shot needs a date.")?;
        let start = require_parse(self.start, "A shot needs a start time.")?;
        let end = require_parse(
            self.end,
            "A shot needs an end: a window like 09:00-10:30 or a start time and a duration.",
        )?;

        let slot = ShotSlot::new(date, start, end);
        if let Some(other) = find_conflict(&slot, existing) {
            return Err(Error::conflict_with(other));
        }

        let mut shot = Shot::new(title, date, start, slot.duration())
            .with_location(self.location.unwrap_or_else(|| DEFAULT_LOCATION.to_string()))
            .with_scene(
                self.scene
                    .unwrap_or_else(|| format!("{}X", existing.len() + 1)),
            )
            .with_equipment(self.gear);
        if let Some(description) = self.description {
            shot.description = description;
        }
        Ok(shot)
    }

    /// Applies the given fields to `shot`. A new date or window is checked
    /// against every other shot in `existing`.
    pub fn apply_to(self, shot: &Shot, existing: &[Shot]) -> Result<Shot> {
        let mut updated = shot.clone();

        if self.touches_timing() {
            let date = self.date.unwrap_or(shot.date);
            let start = self.start.unwrap_or(shot.start_time);
            let end = self.end.unwrap_or(SlotEnd::After(shot.duration));
            let slot = ShotSlot::new(date, start, end);
            if let Some(other) = find_conflict_excluding(&slot, existing, shot.id) {
                return Err(Error::conflict_with(other));
            }
            updated.date = date;
            updated.start_time = start;
            updated.duration = slot.duration();
        }

        if let Some(title) = self.title {
            updated.title = title;
        }
        if let Some(description) = self.description {
            updated.description = description;
        }
        if let Some(location) = self.location {
            updated.location = location;
        }
        if let Some(scene) = self.scene {
            updated.scene_number = scene;
        }
        for item in &self.gear {
            updated = assign_equipment(&updated, item);
        }
        Ok(updated)
    }
}
