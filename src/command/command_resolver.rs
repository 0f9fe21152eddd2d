use crate::arg::args::Arg;
use crate::command::commands::{
    CheckCommand, Command, CommandDyn, ConfigCommand, GearCommand, LogCommand, ManCommand,
    PlanCommand, ReadCommand, SaveCommand, ShotCommand,
};
use crate::core::types::{GearAction, GlobalCommand, ShotAction, TypeHelpCommand};
use crate::errors::{Error, Result};

pub trait CommandResolver {
    fn can_resolve(&self, command: &str) -> bool;
    fn resolve<'a>(&self, command: &str, args: &'a [Arg]) -> Result<CommandDyn<'a>>;
}

/// `shot`, `mod`, `del`, `retake` and `toggle`.
pub struct ShotActionResolver;

impl CommandResolver for ShotActionResolver {
    fn can_resolve(&self, command: &str) -> bool {
        ShotAction::try_from(command).is_ok()
    }

    fn resolve<'a>(&self, command: &str, args: &'a [Arg]) -> Result<CommandDyn<'a>> {
        let action = ShotAction::try_from(command)?;
        let shot_command = ShotCommand::new(action, args);
        // Only `shot` is meaningful without arguments (it lists).
        if action != ShotAction::Add && args.is_empty() {
            return Err(Error::Parse(format!(
                "Missing argument(s).\n{}",
                shot_command.usage()
            )));
        }
        Ok(Box::new(shot_command))
    }
}

pub struct GearResolver;

impl CommandResolver for GearResolver {
    fn can_resolve(&self, command: &str) -> bool {
        GearAction::try_from(command).is_ok()
    }

    fn resolve<'a>(&self, command: &str, args: &'a [Arg]) -> Result<CommandDyn<'a>> {
        let action = GearAction::try_from(command)?;
        let gear_command = GearCommand::new(action, args);
        if args.is_empty() {
            return Err(Error::Parse(format!(
                "Missing argument(s).\n{}",
                gear_command.usage()
            )));
        }
        Ok(Box::new(gear_command))
    }
}

pub struct GlobalResolver;

impl CommandResolver for GlobalResolver {
    fn can_resolve(&self, command: &str) -> bool {
        GlobalCommand::try_from(command).is_ok()
    }

    fn resolve<'a>(&self, command: &str, args: &'a [Arg]) -> Result<CommandDyn<'a>> {
        let command_type = GlobalCommand::try_from(command)?;
        match command_type {
            GlobalCommand::Config => Ok(Box::new(ConfigCommand::new(args))),
            GlobalCommand::Plan => Ok(Box::new(PlanCommand::new(args))),
            GlobalCommand::Check => Ok(Box::new(CheckCommand::new(args))),
            GlobalCommand::Log => Ok(Box::new(LogCommand::new(args))),
            GlobalCommand::Save => Ok(Box::new(SaveCommand::new(args))),
            GlobalCommand::Read => Ok(Box::new(ReadCommand::new(args))),
            GlobalCommand::Man => Ok(Box::new(ManCommand::new(args))),
        }
    }
}

pub struct TypeHelpResolver;

impl CommandResolver for TypeHelpResolver {
    fn can_resolve(&self, command: &str) -> bool {
        TypeHelpCommand::try_from(command).is_ok()
    }

    fn resolve<'a>(&self, command: &str, args: &'a [Arg]) -> Result<CommandDyn<'a>> {
        let command_type = TypeHelpCommand::try_from(command)?;
        Ok(Box::new(crate::command::commands::TypeHelpCommand::new(
            args,
            command_type,
        )))
    }
}
