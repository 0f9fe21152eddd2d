use crate::arg::args::Arg;
use crate::core::types::Flag;

#[derive(Debug)]
pub enum FlagDecision {
    /// Stop execution and just print usage()
    ShortCircuitUsage,
    /// Continue command execution
    Continue,
    /// Turn into an error
    Error(crate::errors::Error),
}

pub trait FlagRule {
    fn check(&self, args: &[Arg]) -> FlagDecision;
}

pub struct HelpAtIdx(pub usize);
impl FlagRule for HelpAtIdx {
    fn check(&self, args: &[Arg]) -> FlagDecision {
        match args.get(self.0) {
            Some(Arg::Flag(Flag::Help)) => FlagDecision::ShortCircuitUsage,
            _ => FlagDecision::Continue,
        }
    }
}

/// `-h` anywhere on the line, e.g. after a half-typed shot.
pub struct HelpAnywhere;
impl FlagRule for HelpAnywhere {
    fn check(&self, args: &[Arg]) -> FlagDecision {
        if args.iter().any(|a| matches!(a, Arg::Flag(Flag::Help))) {
            FlagDecision::ShortCircuitUsage
        } else {
            FlagDecision::Continue
        }
    }
}

/// Rejects any argument past `max`.
pub struct MaxArgs(pub usize);
impl FlagRule for MaxArgs {
    fn check(&self, args: &[Arg]) -> FlagDecision {
        match args.get(self.0) {
            Some(extra) => FlagDecision::Error(crate::errors::Error::parse(format!(
                "Unexpected argument: {extra}"
            ))),
            None => FlagDecision::Continue,
        }
    }
}

pub struct FlagPolicy {
    rules: Vec<Box<dyn FlagRule>>,
}
impl FlagPolicy {
    pub fn new(rules: Vec<Box<dyn FlagRule>>) -> Self {
        Self { rules }
    }
    pub fn none() -> Self {
        Self { rules: vec![] }
    }

    /// Help anywhere, then at most `max` arguments.
    pub fn help_with_max(max: usize) -> Self {
        Self::new(vec![Box::new(HelpAnywhere), Box::new(MaxArgs(max))])
    }

    pub fn evaluate(&self, args: &[Arg]) -> FlagDecision {
        // First matching short-circuit wins; otherwise Continue.
        for r in &self.rules {
            match r.check(args) {
                FlagDecision::Continue => continue,
                other => return other,
            }
        }
        FlagDecision::Continue
    }
}
