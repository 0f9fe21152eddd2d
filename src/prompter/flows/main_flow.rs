use std::fmt;
use std::io::{self, Write};

use crate::arg::arg_parse_strategy::CommandArgParser;
use crate::command::command_parser::CommandParser;
use crate::command::manual::ManualCatalog;
use crate::core::context::AppContext;
use crate::errors::{Error, Result};
use crate::logging::{LogTarget, Logger};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::scheduler::day_plan::progress;
use crate::ui::ansi::STYLE_RESET;
use crate::ui::chrome::UiChrome;

/// Where a command line failed on its way to the shot list.
#[derive(Debug, Clone, Copy)]
enum Stage {
    Arguments,
    Resolution,
    Execution,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Arguments => "Argument parsing",
            Stage::Resolution => "Command resolution",
            Stage::Execution => "Command execution",
        };
        f.write_str(label)
    }
}

/// The interactive shot-list session: one command line per input.
pub struct MainFlow<'a> {
    ctx: &'a mut AppContext,
    arg_parser: CommandArgParser,
    command_parser: CommandParser,
    logger: Logger,
}

impl<'a> MainFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let logger = ctx.logger.clone();
        Self {
            ctx,
            arg_parser: CommandArgParser::new(),
            command_parser: CommandParser::new(),
            logger,
        }
    }

    fn dispatch(&mut self, command: &str, raw_args: &[String]) -> std::result::Result<(), (Stage, Error)> {
        let args = self
            .arg_parser
            .parse(command, raw_args)
            .map_err(|e| (Stage::Arguments, e))?;
        let cmd = self
            .command_parser
            .parse(command, &args)
            .map_err(|e| (Stage::Resolution, e))?;

        if !command.eq_ignore_ascii_case("log") {
            let line = std::iter::once(command)
                .chain(raw_args.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join(" ");
            self.logger
                .info(format!("Command run: {line}"), LogTarget::FileOnly);
        }
        cmd.execute(self.ctx).map_err(|e| (Stage::Execution, e))
    }

    /// Usage text goes to the console only; the log keeps the one-line reason.
    fn report(&self, stage: Stage, command: &str, err: Error) {
        let text = err.to_string();
        match text.split_once("\nUsage:") {
            Some((reason, usage)) => {
                self.logger.error(
                    format!("{stage} failed for '{command}'. {reason}\nUsage:{usage}"),
                    LogTarget::ConsoleOnly,
                );
                self.logger.error(
                    format!("{stage} failed for '{command}'. {}", reason.trim()),
                    LogTarget::FileOnly,
                );
            }
            None => self.logger.error(
                format!("{stage} failed for '{command}'. {text}"),
                LogTarget::ConsoleAndFile,
            ),
        }
    }

    fn print_startup(&mut self) {
        if self.ctx.startup_displayed {
            return;
        }
        UiChrome::new().print_banner();
        println!();
        println!("Use 'man <topic>' for command-specific details.");
        println!("Available topics: {}", ManualCatalog::new().topics().join(", "));
        println!();
        println!("Config path: {}", self.ctx.config_path.display());
        println!("Shoots path: {}", self.ctx.shoots_dir.display());
        println!("Logs path: {}", self.ctx.logs_dir.display());
        println!();
        self.ctx.startup_displayed = true;
    }

    /// `> ` on an empty list, otherwise the shot count and progress.
    fn prompt(&self) -> String {
        let count = self.ctx.shots.len();
        if count == 0 {
            return "> ".to_string();
        }
        let done = progress(&self.ctx.shots.snapshot());
        format!("[{count} shot(s), {done}% done] > ")
    }
}

impl<'a> Flow for MainFlow<'a> {
    fn render(&mut self) -> Result<()> {
        self.print_startup();
        UiChrome::new().print_prompt(&self.prompt());
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        UiChrome::new().print_prompt_bottom_padding();
        println!();
        print!("{STYLE_RESET}");
        let _ = io::stdout().flush();

        let line = input.trim();
        if line.is_empty() {
            return Ok(FlowCtrl::Continue);
        }
        if line.eq_ignore_ascii_case("exit") {
            return Ok(FlowCtrl::Finish);
        }

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default().to_string();
        let raw_args: Vec<String> = parts.map(str::to_string).collect();

        if let Err((stage, err)) = self.dispatch(&command, &raw_args) {
            self.report(stage, &command, err);
        }
        Ok(FlowCtrl::Continue)
    }
}
