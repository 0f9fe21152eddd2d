pub type ShotId = i32;
pub type EquipmentId = String;
