//! Per-shot equipment checklist: which assigned items are packed and ready.
//!
//! Every helper returns a new value and leaves its input untouched. The
//! prepared list is kept a subset of the assigned list.

use crate::core::aliases::{EquipmentId, ShotId};
use crate::core::models::Shot;

/// Adds `equipment_id` unless it is already assigned.
pub fn assign_equipment(shot: &Shot, equipment_id: &str) -> Shot {
    let mut out = shot.clone();
    if !out.equipment_ids.iter().any(|e| e == equipment_id) {
        out.equipment_ids.push(equipment_id.to_string());
    }
    out
}

/// Removes `equipment_id` from the shot and from its prepared list.
pub fn unassign_equipment(shot: &Shot, equipment_id: &str) -> Shot {
    let mut out = shot.clone();
    out.equipment_ids.retain(|e| e != equipment_id);
    out.prepared_equipment_ids.retain(|e| e != equipment_id);
    out
}

/// No-op when the item is not assigned to this shot.
pub fn mark_prepared(shot: &Shot, equipment_id: &str) -> Shot {
    let mut out = shot.clone();
    let assigned = out.equipment_ids.iter().any(|e| e == equipment_id);
    let prepared = out.prepared_equipment_ids.iter().any(|e| e == equipment_id);
    if assigned && !prepared {
        out.prepared_equipment_ids.push(equipment_id.to_string());
    }
    out
}

pub fn unmark_prepared(shot: &Shot, equipment_id: &str) -> Shot {
    let mut out = shot.clone();
    out.prepared_equipment_ids.retain(|e| e != equipment_id);
    out
}

pub fn is_prepared(shot: &Shot, equipment_id: &str) -> bool {
    shot.prepared_equipment_ids.iter().any(|e| e == equipment_id)
}

/// Flips one checklist item on one shot, returning the new list.
pub fn toggle_prepared(shots: &[Shot], shot_id: ShotId, equipment_id: &str) -> Vec<Shot> {
    update_shot(shots, shot_id, |s| {
        if is_prepared(s, equipment_id) {
            unmark_prepared(s, equipment_id)
        } else {
            mark_prepared(s, equipment_id)
        }
    })
}

/// New list where the shot with `id` is replaced by `f(shot)`.
pub fn update_shot<F>(shots: &[Shot], id: ShotId, f: F) -> Vec<Shot>
where
    F: Fn(&Shot) -> Shot,
{
    shots
        .iter()
        .map(|s| if s.id == id { f(s) } else { s.clone() })
        .collect()
}

/// Drops prepared ids that are no longer assigned.
pub fn normalize(shot: &Shot) -> Shot {
    let mut prepared: Vec<EquipmentId> = Vec::new();
    for e in &shot.prepared_equipment_ids {
        if shot.equipment_ids.contains(e) && !prepared.contains(e) {
            prepared.push(e.clone());
        }
    }
    Shot {
        prepared_equipment_ids: prepared,
        ..shot.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Readiness {
    pub ready: usize,
    pub total: usize,
}

impl Readiness {
    /// A shot with nothing assigned is never complete.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.ready == self.total
    }

    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.ready as f64 / self.total as f64
        }
    }
}

pub fn readiness(shot: &Shot) -> Readiness {
    Readiness {
        ready: shot.prepared_equipment_ids.len(),
        total: shot.equipment_ids.len(),
    }
}

/// Gear hand-over between two consecutive shots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GearDelta {
    pub to_drop: Vec<EquipmentId>,
    pub to_add: Vec<EquipmentId>,
}

impl GearDelta {
    pub fn is_empty(&self) -> bool {
        self.to_drop.is_empty() && self.to_add.is_empty()
    }
}

pub fn gear_delta(prev: &Shot, next: &Shot) -> GearDelta {
    GearDelta {
        to_drop: prev
            .equipment_ids
            .iter()
            .filter(|e| !next.equipment_ids.contains(e))
            .cloned()
            .collect(),
        to_add: next
            .equipment_ids
            .iter()
            .filter(|e| !prev.equipment_ids.contains(e))
            .cloned()
            .collect(),
    }
}
