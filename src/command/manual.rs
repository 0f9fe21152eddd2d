use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display as DisplayDerive, EnumIter as EnumIterDerive, EnumString};

use crate::config::ConfigKey;
use crate::core::types::{
    GearAction, GlobalCommand, ShotAction, TransportMode, TravelServiceKind, TypeHelpCommand,
};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, DisplayDerive, AsRefStr, EnumIterDerive,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ManualTopic {
    General,
    Shot,
    Mod,
    Del,
    Retake,
    Toggle,
    Gear,
    Prep,
    Check,
    Plan,
    Config,
    Log,
    Save,
    Read,
    Man,
    Date,
    Time,
    Duration,
    Modes,
}

impl ManualTopic {
    pub fn try_from(input: &str) -> Result<Self> {
        Self::from_str(input.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unsupported manual topic: '{}'. Valid topics: {}",
                input.trim(),
                valid_csv::<ManualTopic>()
            ))
        })
    }

    pub fn synopsis(self) -> &'static [&'static str] {
        match self {
            ManualTopic::General => &["<command> [args]"],
            ManualTopic::Shot => &[
                "shot",
                "shot \"<title>\" <date> <start>-<end> [@<location>] [#<scene>] [+<gear> ...] [\"<description>\"]",
                "shot \"<title>\" <date> <start> <duration> [@<location>] [#<scene>] [+<gear> ...]",
            ],
            ManualTopic::Mod => &[
                "mod <id> [\"<title>\"] [<date>] [<start>-<end> | <start> | <duration>] [@<location>] [#<scene>] [+<gear> ...]",
            ],
            ManualTopic::Del => &["del <id>"],
            ManualTopic::Retake => &["retake <id> <date> <start>"],
            ManualTopic::Toggle => &["toggle <id>"],
            ManualTopic::Gear => &["gear <id> +<gear> [+<gear> ...]", "ungear <id> +<gear> [+<gear> ...]"],
            ManualTopic::Prep => &["prep <id> +<gear> [+<gear> ...]", "unprep <id> +<gear> [+<gear> ...]"],
            ManualTopic::Check => &["check [<id>]"],
            ManualTopic::Plan => &["plan [<date>] [\"<query>\"] [pending | done] [<mode>]"],
            ManualTopic::Config => &["config", "config <KEY> <value>"],
            ManualTopic::Log => &["log"],
            ManualTopic::Save => &["save \"<name>\""],
            ManualTopic::Read => &["read \"<name>\""],
            ManualTopic::Man => &["man [topic]"],
            ManualTopic::Date => &["date"],
            ManualTopic::Time => &["time"],
            ManualTopic::Duration => &["duration"],
            ManualTopic::Modes => &["modes"],
        }
    }

    /// `Usage:` lines printed for `-h` and on argument errors.
    pub fn usage(self) -> String {
        self.synopsis()
            .iter()
            .map(|line| format!("Usage: {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<ShotAction> for ManualTopic {
    fn from(action: ShotAction) -> Self {
        match action {
            ShotAction::Add => ManualTopic::Shot,
            ShotAction::Modify => ManualTopic::Mod,
            ShotAction::Delete => ManualTopic::Del,
            ShotAction::Retake => ManualTopic::Retake,
            ShotAction::Toggle => ManualTopic::Toggle,
        }
    }
}

impl From<GearAction> for ManualTopic {
    fn from(action: GearAction) -> Self {
        match action {
            GearAction::Assign | GearAction::Unassign => ManualTopic::Gear,
            GearAction::Prepare | GearAction::Unprepare => ManualTopic::Prep,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ManualSection {
    title: String,
    body: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ManualPage {
    name: String,
    summary: String,
    sections: Vec<ManualSection>,
}

impl ManualPage {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_section(
            "NAME",
            &[format!("{} - {}", self.name, self.summary)],
            &mut out,
        );
        for section in &self.sections {
            self.write_section(&section.title, &section.body, &mut out);
        }
        out.trim_end().to_string()
    }

    fn write_section(&self, title: &str, lines: &[String], out: &mut String) {
        out.push_str(&title.to_uppercase());
        out.push('\n');
        for line in lines {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }
}

pub struct ManualPageBuilder {
    name: String,
    summary: String,
    sections: Vec<ManualSection>,
}

impl ManualPageBuilder {
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            sections: Vec::new(),
        }
    }

    pub fn section(mut self, title: &str, body: Vec<String>) -> Self {
        self.sections.push(ManualSection {
            title: title.to_string(),
            body,
        });
        self
    }

    pub fn build(self) -> ManualPage {
        ManualPage {
            name: self.name,
            summary: self.summary,
            sections: self.sections,
        }
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static PAGES: Lazy<HashMap<ManualTopic, ManualPage>> =
    Lazy::new(|| ManualTopic::iter().map(|t| (t, build_page(t))).collect());

pub struct ManualCatalog;

impl ManualCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn page_for(&self, topic: Option<&str>) -> Result<ManualPage> {
        let topic = match topic {
            None => ManualTopic::General,
            Some(name) => ManualTopic::try_from(name)?,
        };
        PAGES
            .get(&topic)
            .cloned()
            .ok_or_else(|| Error::parse(format!("No manual page for '{topic}'.")))
    }

    pub fn topics(&self) -> Vec<String> {
        ManualTopic::iter().map(|t| t.to_string()).collect()
    }
}

fn build_page(topic: ManualTopic) -> ManualPage {
    let synopsis = lines(topic.synopsis());
    let page = |summary: &str, description: &[&str]| {
        ManualPageBuilder::new(topic.to_string(), summary)
            .section("SYNOPSIS", synopsis.clone())
            .section("DESCRIPTION", lines(description))
            .build()
    };
    match topic {
        ManualTopic::General => general_page(),
        ManualTopic::Shot => page(
            "List shots, or add one.",
            &[
                "With no arguments, lists every shot.",
                "A window ending before it starts runs past midnight.",
                "Shots shorter than 5 minutes are stretched to 5 minutes.",
                "A shot overlapping another on the same day is refused.",
                "Location defaults to 'Location TBD', scene to '<count+1>X'.",
            ],
        ),
        ManualTopic::Mod => page(
            "Edit a shot in place.",
            &[
                "Only the given fields change; +<gear> adds equipment.",
                "A new date or window is checked against every other shot.",
            ],
        ),
        ManualTopic::Del => page("Delete a shot.", &["Removes the shot and its gear list."]),
        ManualTopic::Retake => page(
            "Schedule a retake of a shot.",
            &[
                "Copies title, scene, location and gear into a new pending shot.",
                "Nothing is marked prepared on the retake.",
            ],
        ),
        ManualTopic::Toggle => page(
            "Flip a shot between pending and done.",
            &["Progress in the plan view counts done shots."],
        ),
        ManualTopic::Gear => page(
            "Assign or unassign equipment.",
            &[
                "Assigning twice keeps a single entry.",
                "Unassigning also clears the prepared mark.",
            ],
        ),
        ManualTopic::Prep => page(
            "Mark assigned equipment as prepared, or clear the mark.",
            &["Only assigned equipment can be prepared."],
        ),
        ManualTopic::Check => page(
            "Show the readiness checklist.",
            &[
                "Lists each assigned item with its prepared mark.",
                "A shot is ready once every assigned item is prepared.",
            ],
        ),
        ManualTopic::Plan => page(
            "Show shots grouped by day with travel and gear hand-overs.",
            &[
                "Days are listed in date order, shots by start time.",
                "Each day header shows placeholder sunrise and sunset times.",
                "Travel between neighbouring shots is checked only when no query or status filter is given.",
                "Same-location moves still need SETUP_ALLOWANCE minutes, never fewer than 20.",
                "An unavailable travel service marks legs as unknown, never at risk.",
            ],
        ),
        ManualTopic::Config => {
            let mut description = vec![
                "With no arguments, shows every configuration item.".to_string(),
                format!("Keys: {}", valid_csv::<ConfigKey>()),
                format!("Transport modes: {}", valid_csv::<TransportMode>()),
            ];
            description.extend(
                TravelServiceKind::iter().map(|k| format!("Travel service '{k}': {}", k.help())),
            );
            ManualPageBuilder::new("config", "View or change configuration values.")
                .section("SYNOPSIS", synopsis.clone())
                .section("DESCRIPTION", description)
                .build()
        }
        ManualTopic::Log => page(
            "Print the current session log to the console.",
            &["Shows the session log file contents if it exists."],
        ),
        ManualTopic::Save => page(
            "Save the shot list.",
            &["Writes to shoots/<name>.json."],
        ),
        ManualTopic::Read => page(
            "Load a saved shot list.",
            &[
                "Replaces the current shots with the saved ones.",
                "Nothing changes if any saved shot is invalid or overlaps another.",
            ],
        ),
        ManualTopic::Man => ManualPageBuilder::new("man", "Show manual pages.")
            .section("SYNOPSIS", synopsis.clone())
            .section(
                "DESCRIPTION",
                vec![
                    format!("Topics: {}", valid_csv::<ManualTopic>()),
                    "Use 'man' with no topic for the general manual.".to_string(),
                ],
            )
            .build(),
        ManualTopic::Date => type_help_page(TypeHelpCommand::Date),
        ManualTopic::Time => type_help_page(TypeHelpCommand::Time),
        ManualTopic::Duration => type_help_page(TypeHelpCommand::Duration),
        ManualTopic::Modes => type_help_page(TypeHelpCommand::Modes),
    }
}

fn general_page() -> ManualPage {
    ManualPageBuilder::new("shotlist", "Shot scheduling and equipment readiness.")
        .section("SYNOPSIS", lines(ManualTopic::General.synopsis()))
        .section("COMMANDS", general_command_lines())
        .section(
            "TOPICS",
            vec![
                "Use 'man <topic>' for command-specific details.".to_string(),
                format!("Available topics: {}", valid_csv::<ManualTopic>()),
            ],
        )
        .build()
}

fn type_help_page(kind: TypeHelpCommand) -> ManualPage {
    ManualPageBuilder::new(kind.to_string(), "Type helper command.")
        .section("SYNOPSIS", vec![kind.to_string()])
        .section("DESCRIPTION", vec![kind.usage()])
        .build()
}

fn general_command_lines() -> Vec<String> {
    let shot_cmds = ShotAction::iter().map(|a| a.to_string());
    let gear_cmds = GearAction::iter().map(|a| a.to_string());
    let global_cmds = GlobalCommand::iter().map(|c| c.to_string());
    let helpers = TypeHelpCommand::iter().map(|c| c.to_string());
    vec![
        format!("Shots:     {}", shot_cmds.collect::<Vec<_>>().join(", ")),
        format!("Equipment: {}", gear_cmds.collect::<Vec<_>>().join(", ")),
        format!("Session:   {}, exit", global_cmds.collect::<Vec<_>>().join(", ")),
        format!("Types:     {}", helpers.collect::<Vec<_>>().join(", ")),
        "Every command accepts -h for usage.".to_string(),
    ]
}
