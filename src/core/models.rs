use crate::core::aliases::{EquipmentId, ShotId};
use crate::core::types::{ClockTime, ShootDate, ShotDuration, ShotStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_LOCATION: &str = "Location TBD";

pub trait BaseEntity {
    fn id(&self) -> ShotId;
    fn set_id(&mut self, id: ShotId);
}

/// A scheduled filming event.
///
/// `prepared_equipment_ids` is always a subset of `equipment_ids`; the
/// readiness helpers in the scheduler keep that true on every update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub id: ShotId,
    pub title: String,
    #[serde(default)]
    pub scene_number: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub date: ShootDate,
    pub start_time: ClockTime,
    pub duration: ShotDuration,
    #[serde(default)]
    pub status: ShotStatus,
    #[serde(default)]
    pub equipment_ids: Vec<EquipmentId>,
    #[serde(default)]
    pub prepared_equipment_ids: Vec<EquipmentId>,
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

impl Shot {
    pub fn new(
        title: impl Into<String>,
        date: ShootDate,
        start_time: ClockTime,
        duration: ShotDuration,
    ) -> Self {
        Self {
            id: 1,
            title: title.into(),
            scene_number: String::new(),
            location: default_location(),
            description: String::new(),
            date,
            start_time,
            duration,
            status: ShotStatus::Pending,
            equipment_ids: Vec::new(),
            prepared_equipment_ids: Vec::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_scene(mut self, scene_number: impl Into<String>) -> Self {
        self.scene_number = scene_number.into();
        self
    }

    pub fn with_equipment<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<EquipmentId>,
    {
        for id in ids {
            let id = id.into();
            if !self.equipment_ids.contains(&id) {
                self.equipment_ids.push(id);
            }
        }
        self
    }

    /// End offset in minutes from the start of `date`. May exceed a day
    /// for shots running past midnight.
    pub fn end_minutes(&self) -> i32 {
        self.start_time.minutes().saturating_add(self.duration.minutes())
    }

    /// End time as shown on the clock face.
    pub fn end_time(&self) -> ClockTime {
        self.start_time.plus(self.duration)
    }

    pub fn window(&self) -> String {
        format!("{}-{}", self.start_time, self.end_time())
    }

    /// A pending copy moved to a new slot. Equipment carries over but
    /// nothing is prepared yet. The id is reassigned on insert.
    pub fn retake(&self, date: ShootDate, start_time: ClockTime) -> Shot {
        Shot {
            id: 0,
            date,
            start_time,
            status: ShotStatus::Pending,
            prepared_equipment_ids: Vec::new(),
            ..self.clone()
        }
    }
}

impl BaseEntity for Shot {
    fn id(&self) -> ShotId {
        self.id
    }
    fn set_id(&mut self, id: ShotId) {
        self.id = id;
    }
}

impl fmt::Display for Shot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shot(id={}, scene='{}', title='{}', date={}, window={}, location='{}', status={}, gear={}/{})",
            self.id,
            self.scene_number,
            self.title,
            self.date,
            self.window(),
            self.location,
            self.status,
            self.prepared_equipment_ids.len(),
            self.equipment_ids.len()
        )
    }
}
