use crate::config::Config;
use crate::core::aliases::ShotId;
use crate::core::models::Shot;
use crate::core::repository::Repository;
use crate::errors::Result;
use crate::logging::Logger;
use crate::scheduler::travel::TravelRequests;
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub shots: Repository<Shot>,
    pub logger: Logger,
    /// Bumped on every shot mutation so in-flight travel estimates go stale.
    pub travel_requests: TravelRequests,
    pub startup_displayed: bool,
    pub config_path: PathBuf,
    pub shoots_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(
        config_path: PathBuf,
        shoots_dir: PathBuf,
        logs_dir: PathBuf,
    ) -> Result<Self> {
        let config = Config::load_from(&config_path)?;
        let logger = Logger::new();
        Ok(Self::with_parts(
            config,
            logger,
            config_path,
            shoots_dir,
            logs_dir,
        ))
    }

    /// Assembles a context around an already loaded config and logger.
    pub fn with_parts(
        config: Config,
        logger: Logger,
        config_path: PathBuf,
        shoots_dir: PathBuf,
        logs_dir: PathBuf,
    ) -> Self {
        logger.set_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Self {
            config,
            shots: Repository::<Shot>::new(),
            logger,
            travel_requests: TravelRequests::new(),
            startup_displayed: false,
            config_path,
            shoots_dir,
            logs_dir,
        }
    }

    /// Stores a new shot under the next id and returns the stored copy.
    pub fn add_shot(&mut self, shot: Shot) -> Shot {
        let stored = self.shots.insert(shot).clone();
        self.travel_requests.invalidate();
        stored
    }

    pub fn remove_shot(&mut self, id: ShotId) -> Result<Shot> {
        let removed = self.shots.delete(id)?;
        self.travel_requests.invalidate();
        Ok(removed)
    }

    /// Writes a functionally updated shot list back into the store.
    pub fn commit_shots(&mut self, shots: Vec<Shot>) -> Result<()> {
        self.shots.apply_snapshot(shots)?;
        self.travel_requests.invalidate();
        Ok(())
    }
}
