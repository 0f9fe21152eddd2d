use super::args::*;
use crate::errors::{Error, Result};

pub struct ArgParser {
    factories: Vec<Box<dyn ArgFactory>>,
}

impl ArgParser {
    /// Factories are tried in order; the first that can start a token
    /// claims it.
    pub fn new() -> Self {
        Self {
            factories: vec![
                Box::new(MultiTokenFactory::<NameArg>::new()),
                Box::new(MultiTokenFactory::<LocationArg>::new()),
                Box::new(SingleTokenFactory::<FlagArg>::new()),
                Box::new(SingleTokenFactory::<SceneArg>::new()),
                Box::new(SingleTokenFactory::<GearArg>::new()),
                Box::new(SingleTokenFactory::<StatusArg>::new()),
                Box::new(SingleTokenFactory::<ModeArg>::new()),
                Box::new(SingleTokenFactory::<IntArg>::new()),
                Box::new(SingleTokenFactory::<TimeSpanArg>::new()),
                Box::new(SingleTokenFactory::<TimeArg>::new()),
                Box::new(SingleTokenFactory::<DurationArg>::new()),
                Box::new(SingleTokenFactory::<DateArg>::new()),
            ],
        }
    }

    pub fn parse(&self, raw: &[String]) -> Result<Vec<Arg>> {
        let mut ts = TokenStream::new(raw);
        let mut out = Vec::new();

        while !ts.eof() {
            let tok = ts.peek()?.to_string();
            let factory = self.factories.iter().find(|f| f.can_start(&tok));

            match factory {
                Some(f) => out.push(f.parse(&mut ts)?),
                None => {
                    return Err(Error::Parse(format!(
                        "Unrecognized argument: '{}'. If this is a title or query, wrap it in quotes.",
                        tok
                    )));
                }
            }
        }
        Ok(out)
    }
}
