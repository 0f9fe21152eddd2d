use crate::arg::arg_extractor::{extract_at, find_all};
use crate::arg::args::{Arg, DateArg, GearArg, IntArg, NameArg, TimeArg};
use crate::command::manual::{ManualCatalog, ManualTopic};
use crate::command::policies::flag_policy::{FlagDecision, FlagPolicy, HelpAnywhere};
use crate::command::shot_spec::ShotFields;
use crate::core::context::AppContext;
use crate::core::models::Shot;
use crate::core::persist::{load_state, save_state};
use crate::core::repository::Sort;
use crate::core::types::{GearAction, ShotAction};
use crate::errors::{Error, Result};
use crate::logging::LogTarget;
use crate::scheduler::conflict::{ShotSlot, find_conflict};
use crate::scheduler::day_plan::{ShotFilter, toggle_status};
use crate::scheduler::readiness::{
    assign_equipment, mark_prepared, readiness, unassign_equipment, unmark_prepared, update_shot,
};
use crate::scheduler::{PlanRequest, ShotPlanner};
use crate::ui::display_manager::DisplayManager;
use std::path::PathBuf;

pub struct CommandCore<'a> {
    pub args: &'a [Arg],
    pub flag_policy: FlagPolicy,
}
impl<'a> CommandCore<'a> {
    pub fn new(args: &'a [Arg], flag_policy: FlagPolicy) -> Self {
        Self { args, flag_policy }
    }
}

mod sealed {
    use super::CommandCore;

    pub trait Sealed<'a> {
        fn core(&self) -> &CommandCore<'a>;
    }
}

pub trait Command<'a>: sealed::Sealed<'a> {
    fn usage(&self) -> String;
    fn perform(&self, ctx: &mut AppContext) -> Result<()>;

    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let core = self.core();
        match core.flag_policy.evaluate(core.args) {
            FlagDecision::ShortCircuitUsage => {
                ctx.logger.info(self.usage(), LogTarget::ConsoleOnly);
                Ok(())
            }
            FlagDecision::Continue => self.perform(ctx),
            FlagDecision::Error(e) => Err(with_usage(e, &self.usage())),
        }
    }
}

pub type CommandDyn<'a> = Box<dyn Command<'a> + 'a>;

/// Appends usage to argument errors so the prompt can show both.
fn with_usage(err: Error, usage: &str) -> Error {
    match err {
        Error::Parse(msg) => Error::Parse(format!("{msg}\n{usage}")),
        other => other,
    }
}

macro_rules! sealed_core {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<'a> sealed::Sealed<'a> for $ty<'a> {
                fn core(&self) -> &CommandCore<'a> {
                    &self.core
                }
            }
        )*
    };
}

sealed_core!(
    ShotCommand,
    GearCommand,
    CheckCommand,
    PlanCommand,
    ConfigCommand,
    LogCommand,
    ManCommand,
    SaveCommand,
    ReadCommand,
    TypeHelpCommand,
);

// ---------------------------------------------------------------------------
// Shots
// ---------------------------------------------------------------------------

pub struct ShotCommand<'a> {
    core: CommandCore<'a>,
    action: ShotAction,
}

impl<'a> ShotCommand<'a> {
    pub fn new(action: ShotAction, args: &'a [Arg]) -> Self {
        let policy = match action {
            ShotAction::Add | ShotAction::Modify => FlagPolicy::new(vec![Box::new(HelpAnywhere)]),
            ShotAction::Retake => FlagPolicy::help_with_max(3),
            ShotAction::Delete | ShotAction::Toggle => FlagPolicy::help_with_max(1),
        };
        Self {
            core: CommandCore::new(args, policy),
            action,
        }
    }

    fn id(&self) -> Result<i32> {
        extract_at::<IntArg>(self.core.args, 0).map_err(|e| with_usage(e, &self.usage()))
    }

    fn handle_add(&self, ctx: &mut AppContext) -> Result<()> {
        if self.core.args.is_empty() {
            let shots = ctx.shots.values(Sort::IdAsc);
            DisplayManager::new().display_shots(&shots);
            return Ok(());
        }
        let fields =
            ShotFields::from_args(self.core.args).map_err(|e| with_usage(e, &self.usage()))?;
        let existing = ctx.shots.snapshot();
        let shot = fields
            .into_new_shot(&existing)
            .map_err(|e| with_usage(e, &self.usage()))?;
        let stored = ctx.add_shot(shot);
        ctx.logger.info(
            format!("Added shot with id {}: {}", stored.id, stored),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }

    fn handle_modify(&self, ctx: &mut AppContext) -> Result<()> {
        let id = self.id()?;
        let fields = ShotFields::from_args(&self.core.args[1..])
            .map_err(|e| with_usage(e, &self.usage()))?;
        if fields.is_empty() {
            return Err(with_usage(
                Error::parse("Nothing to change."),
                &self.usage(),
            ));
        }
        let existing = ctx.shots.snapshot();
        let current = ctx.shots.get(id)?;
        let updated = fields.apply_to(current, &existing)?;
        let shots = update_shot(&existing, id, |_| updated.clone());
        ctx.commit_shots(shots)?;
        ctx.logger.info(
            format!("Modified shot with id {}: {}", id, updated),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }

    fn handle_delete(&self, ctx: &mut AppContext) -> Result<()> {
        let id = self.id()?;
        let removed = ctx.remove_shot(id)?;
        ctx.logger.info(
            format!("Deleted shot with id {}: '{}'.", id, removed.title),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }

    fn handle_retake(&self, ctx: &mut AppContext) -> Result<()> {
        let id = self.id()?;
        let args = self.core.args;
        let date = extract_at::<DateArg>(args, 1).map_err(|e| with_usage(e, &self.usage()))?;
        let start = extract_at::<TimeArg>(args, 2).map_err(|e| with_usage(e, &self.usage()))?;

        let existing = ctx.shots.snapshot();
        let retake = ctx.shots.get(id)?.retake(date, start);
        if let Some(other) = find_conflict(&ShotSlot::of_shot(&retake), &existing) {
            return Err(Error::conflict_with(other));
        }
        let stored = ctx.add_shot(retake);
        ctx.logger.info(
            format!("Scheduled retake of shot {} as id {}: {}", id, stored.id, stored),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }

    fn handle_toggle(&self, ctx: &mut AppContext) -> Result<()> {
        let id = self.id()?;
        ctx.shots.get(id)?;
        let shots = toggle_status(&ctx.shots.snapshot(), id);
        ctx.commit_shots(shots)?;
        let status = ctx.shots.get(id)?.status;
        ctx.logger.info(
            format!("Shot {} is now {}.", id, status),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }
}

impl<'a> Command<'a> for ShotCommand<'a> {
    fn usage(&self) -> String {
        ManualTopic::from(self.action).usage()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        match self.action {
            ShotAction::Add => self.handle_add(ctx),
            ShotAction::Modify => self.handle_modify(ctx),
            ShotAction::Delete => self.handle_delete(ctx),
            ShotAction::Retake => self.handle_retake(ctx),
            ShotAction::Toggle => self.handle_toggle(ctx),
        }
    }
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

pub struct GearCommand<'a> {
    core: CommandCore<'a>,
    action: GearAction,
}

impl<'a> GearCommand<'a> {
    pub fn new(action: GearAction, args: &'a [Arg]) -> Self {
        let policy = FlagPolicy::new(vec![Box::new(HelpAnywhere)]);
        Self {
            core: CommandCore::new(args, policy),
            action,
        }
    }

    fn items(&self) -> Result<Vec<&'a str>> {
        let rest = self.core.args.get(1..).unwrap_or_default();
        if let Some(other) = rest.iter().find(|a| !matches!(a, Arg::Gear(_))) {
            return Err(Error::parse(format!("Unexpected argument: {other}")));
        }
        let items = find_all::<GearArg>(rest);
        if items.is_empty() {
            return Err(Error::parse("Expected at least one equipment id (+<id>)."));
        }
        Ok(items)
    }

    /// Items the action cannot apply to because they are not on the shot.
    fn unassigned<'s>(&self, shot: &Shot, items: &[&'s str]) -> Vec<&'s str> {
        if self.action == GearAction::Assign {
            return Vec::new();
        }
        items
            .iter()
            .copied()
            .filter(|i| !shot.equipment_ids.iter().any(|e| e == i))
            .collect()
    }
}

impl<'a> Command<'a> for GearCommand<'a> {
    fn usage(&self) -> String {
        ManualTopic::from(self.action).usage()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let id = extract_at::<IntArg>(self.core.args, 0).map_err(|e| with_usage(e, &self.usage()))?;
        let items = self.items().map_err(|e| with_usage(e, &self.usage()))?;
        let skipped = self.unassigned(ctx.shots.get(id)?, &items);

        let action = self.action;
        let shots = update_shot(&ctx.shots.snapshot(), id, |shot| {
            items.iter().fold(shot.clone(), |s, item| match action {
                GearAction::Assign => assign_equipment(&s, item),
                GearAction::Unassign => unassign_equipment(&s, item),
                GearAction::Prepare => mark_prepared(&s, item),
                GearAction::Unprepare => unmark_prepared(&s, item),
            })
        });
        ctx.commit_shots(shots)?;

        for item in &skipped {
            ctx.logger.warn(
                format!("Skipped '{}': not assigned to shot {}.", item, id),
                LogTarget::ConsoleAndFile,
            );
        }
        let applied: Vec<&str> = items
            .iter()
            .copied()
            .filter(|i| !skipped.contains(i))
            .collect();
        if !applied.is_empty() {
            let r = readiness(ctx.shots.get(id)?);
            ctx.logger.info(
                format!(
                    "{} {} on shot {} ({}/{} ready).",
                    action.past_tense(),
                    applied.join(", "),
                    id,
                    r.ready,
                    r.total
                ),
                LogTarget::ConsoleAndFile,
            );
        }
        Ok(())
    }
}

pub struct CheckCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> CheckCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::help_with_max(1)),
        }
    }
}

impl<'a> Command<'a> for CheckCommand<'a> {
    fn usage(&self) -> String {
        ManualTopic::Check.usage()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let dm = DisplayManager::new();
        if self.core.args.is_empty() {
            let shots = ctx
                .shots
                .query()
                .r#where(|s| !s.equipment_ids.is_empty())
                .order(Sort::IdAsc)
                .collect();
            dm.display_checklist(&shots);
            let ready = shots.iter().filter(|s| readiness(s).is_complete()).count();
            ctx.logger.info(
                format!("{} of {} equipped shot(s) ready.", ready, shots.len()),
                LogTarget::ConsoleOnly,
            );
            return Ok(());
        }

        let id = extract_at::<IntArg>(self.core.args, 0).map_err(|e| with_usage(e, &self.usage()))?;
        let shot = ctx.shots.get(id)?;
        dm.display_checklist(&[shot]);
        let r = readiness(shot);
        let verdict = if r.is_complete() {
            "ready".to_string()
        } else if r.total == 0 {
            "no equipment assigned".to_string()
        } else {
            format!("{} item(s) left to prepare", r.total - r.ready)
        };
        ctx.logger.info(
            format!("Shot {}: {}/{} prepared, {}.", id, r.ready, r.total, verdict),
            LogTarget::ConsoleOnly,
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

pub struct PlanCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> PlanCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::new(vec![Box::new(HelpAnywhere)])),
        }
    }

    fn request(&self) -> Result<PlanRequest> {
        let mut req = PlanRequest::default();
        let mut query = None;
        let mut status = None;
        for arg in self.core.args {
            match arg {
                Arg::Date(d) if req.date.is_none() => req.date = Some(*d),
                Arg::Name(q) if query.is_none() => query = Some(q.clone()),
                Arg::Status(s) if status.is_none() => status = Some(*s),
                Arg::Mode(m) if req.mode.is_none() => req.mode = Some(*m),
                other => return Err(Error::parse(format!("Unexpected argument: {other}"))),
            }
        }
        req.filter = ShotFilter::new(query, status);
        Ok(req)
    }
}

impl<'a> Command<'a> for PlanCommand<'a> {
    fn usage(&self) -> String {
        ManualTopic::Plan.usage()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let request = self.request().map_err(|e| with_usage(e, &self.usage()))?;
        ShotPlanner::new(ctx).show(&request)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

pub struct ConfigCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ConfigCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::help_with_max(2)),
        }
    }
}

impl<'a> Command<'a> for ConfigCommand<'a> {
    fn usage(&self) -> String {
        ManualTopic::Config.usage()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let (key, value) = match self.core.args {
            [] => {
                DisplayManager::new().display_config(&ctx.config);
                return Ok(());
            }
            [Arg::Name(key), Arg::Name(value)] => (key, value),
            _ => {
                return Err(with_usage(
                    Error::parse("Expected a key and a value."),
                    &self.usage(),
                ));
            }
        };

        ctx.config.set(key, value)?;
        ctx.logger
            .set_file_logging_enabled(ctx.config.file_logging_enabled());
        if let Some((key, old, new)) = ctx.config.take_last_change() {
            ctx.logger.info(
                format!("Config {key} changed from {old} to {new}."),
                LogTarget::ConsoleAndFile,
            );
        }
        Ok(())
    }
}

pub struct LogCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> LogCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::help_with_max(0)),
        }
    }
}

impl<'a> Command<'a> for LogCommand<'a> {
    fn usage(&self) -> String {
        ManualTopic::Log.usage()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        match ctx.logger.log_path() {
            None => {
                println!("No logs");
            }
            Some(path) => match std::fs::read_to_string(&path) {
                Ok(contents) => print!("{contents}"),
                Err(err) => {
                    eprintln!("Unable to read log file: {err}");
                }
            },
        }
        Ok(())
    }
}

pub struct ManCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ManCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::help_with_max(1)),
        }
    }
}

impl<'a> Command<'a> for ManCommand<'a> {
    fn usage(&self) -> String {
        ManualTopic::Man.usage()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let topic = self.core.args.first().and_then(|a| match a {
            Arg::Name(name) => Some(name.as_str()),
            _ => None,
        });
        let page = ManualCatalog::new().page_for(topic)?;
        ctx.logger.info(page.render(), LogTarget::ConsoleOnly);
        Ok(())
    }
}

/// `<shoots_dir>/<name>.json` for bare names; paths are taken as given.
fn shoot_file(ctx: &AppContext, name: &str) -> PathBuf {
    let candidate = PathBuf::from(name);
    let mut path = if candidate.is_relative() && candidate.components().count() == 1 {
        ctx.shoots_dir.join(candidate)
    } else {
        candidate
    };
    if path.extension().is_none() {
        path.set_extension("json");
    }
    path
}

pub struct SaveCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> SaveCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::help_with_max(1)),
        }
    }
}

impl<'a> Command<'a> for SaveCommand<'a> {
    fn usage(&self) -> String {
        ManualTopic::Save.usage()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let name = extract_at::<NameArg>(self.core.args, 0)
            .map_err(|e| with_usage(e, &self.usage()))?;
        let path = shoot_file(ctx, name);
        let saved = save_state(&ctx.shots, &path)?;
        ctx.logger.info(
            format!("Saved {} shot(s) to {}", ctx.shots.len(), saved.display()),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }
}

pub struct ReadCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ReadCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::help_with_max(1)),
        }
    }
}

impl<'a> Command<'a> for ReadCommand<'a> {
    fn usage(&self) -> String {
        ManualTopic::Read.usage()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let name = extract_at::<NameArg>(self.core.args, 0)
            .map_err(|e| with_usage(e, &self.usage()))?;
        let path = shoot_file(ctx, name);
        let count = load_state(ctx, &path)?;
        ctx.logger.info(
            format!("Loaded {} shot(s) from {}", count, path.display()),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }
}

pub struct TypeHelpCommand<'a> {
    core: CommandCore<'a>,
    command_type: crate::core::types::TypeHelpCommand,
}

impl<'a> TypeHelpCommand<'a> {
    pub fn new(args: &'a [Arg], command_type: crate::core::types::TypeHelpCommand) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::help_with_max(0)),
            command_type,
        }
    }
}

impl<'a> Command<'a> for TypeHelpCommand<'a> {
    fn usage(&self) -> String {
        self.command_type.usage()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        ctx.logger
            .info(self.command_type.usage(), LogTarget::ConsoleOnly);
        Ok(())
    }
}
