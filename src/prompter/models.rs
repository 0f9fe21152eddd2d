use crate::errors::Result;

pub enum FlowCtrl {
    Continue,
    Finish,
    Abort,
}

/// A read-eval loop body driven by [`Prompter`](crate::prompter::prompter::Prompter).
pub trait Flow {
    fn render(&mut self) -> Result<()>;
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl>;
}
