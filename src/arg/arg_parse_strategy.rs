use std::collections::HashMap;

use crate::arg::arg_parser::ArgParser;
use crate::arg::args::{Arg, FlagArg, SingleTokenArg, unquote};
use crate::errors::Result;

pub trait ArgParseStrategy {
    fn parse(&self, raw: &[String]) -> Result<Vec<Arg>>;
}

pub struct StandardArgParser {
    parser: ArgParser,
}

impl StandardArgParser {
    pub fn new() -> Self {
        Self {
            parser: ArgParser::new(),
        }
    }
}

impl ArgParseStrategy for StandardArgParser {
    fn parse(&self, raw: &[String]) -> Result<Vec<Arg>> {
        self.parser.parse(raw)
    }
}

/// The whole tail is one topic, quoted or not.
pub struct ManArgParser;

impl ArgParseStrategy for ManArgParser {
    fn parse(&self, raw: &[String]) -> Result<Vec<Arg>> {
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        if let [only] = raw {
            if FlagArg::accepts(only) {
                return Ok(vec![FlagArg::new(only)?]);
            }
        }

        let joined = raw.join(" ");
        Ok(vec![Arg::Name(strip_wrapping_quotes(&joined))])
    }
}

/// `config KEY VALUE`: the key and the value stay raw text so each config
/// item can validate its own value.
pub struct ConfigArgParser;

impl ArgParseStrategy for ConfigArgParser {
    fn parse(&self, raw: &[String]) -> Result<Vec<Arg>> {
        raw.iter()
            .map(|tok| {
                if FlagArg::accepts(tok) {
                    FlagArg::new(tok)
                } else {
                    Ok(Arg::Name(strip_wrapping_quotes(tok)))
                }
            })
            .collect()
    }
}

pub struct CommandArgParser {
    default: StandardArgParser,
    overrides: HashMap<String, Box<dyn ArgParseStrategy>>,
}

impl CommandArgParser {
    pub fn new() -> Self {
        let mut overrides: HashMap<String, Box<dyn ArgParseStrategy>> = HashMap::new();
        overrides.insert("man".to_string(), Box::new(ManArgParser));
        overrides.insert("config".to_string(), Box::new(ConfigArgParser));
        Self {
            default: StandardArgParser::new(),
            overrides,
        }
    }

    pub fn parse(&self, command: &str, raw: &[String]) -> Result<Vec<Arg>> {
        let key = command.trim().to_ascii_lowercase();
        if let Some(parser) = self.overrides.get(&key) {
            parser.parse(raw)
        } else {
            self.default.parse(raw)
        }
    }
}

fn strip_wrapping_quotes(value: &str) -> String {
    let trimmed = value.trim();
    unquote(trimmed).unwrap_or(trimmed).to_string()
}
