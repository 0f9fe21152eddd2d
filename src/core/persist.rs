use crate::core::context::AppContext;
use crate::core::models::Shot;
use crate::core::repository::{Repository, Sort};
use crate::errors::{Error, Result};
use crate::scheduler::conflict::{ShotSlot, find_conflict};
use crate::scheduler::readiness::normalize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SaveFile {
    #[serde(default)]
    pub shots: Vec<Shot>,
}

pub fn save_state(shots: &Repository<Shot>, path: &Path) -> Result<PathBuf> {
    let file = SaveFile {
        shots: shots.values(Sort::IdAsc).into_iter().cloned().collect(),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let contents = serde_json::to_string_pretty(&file)?;
    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

/// Replaces the session's shots with the saved ones. The current shots stay
/// in place unless the whole file validates.
pub fn load_state(ctx: &mut AppContext, path: &Path) -> Result<usize> {
    let save_file = load_save_file(path)?;
    let repo = build_repository(save_file.shots)?;
    let count = repo.len();
    ctx.shots = repo;
    ctx.travel_requests.invalidate();
    Ok(count)
}

fn build_repository(shots: Vec<Shot>) -> Result<Repository<Shot>> {
    let mut accepted: Vec<Shot> = Vec::with_capacity(shots.len());
    for shot in shots {
        let shot = normalize(&shot);
        if let Some(other) = find_conflict(&ShotSlot::of_shot(&shot), &accepted) {
            return Err(Error::Domain(format!(
                "Saved shot '{}' (#{}) overlaps '{}' (#{}) on {}.",
                shot.title, shot.id, other.title, other.id, shot.date
            )));
        }
        accepted.push(shot);
    }

    let mut repo = Repository::new();
    for shot in accepted {
        repo.insert_with_id(shot)?;
    }
    Ok(repo)
}

fn load_save_file(path: &Path) -> Result<SaveFile> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
