use crate::errors::Result;
use crate::prompter::models::{Flow, FlowCtrl};
use crate::prompter::prompter::Prompter;
use std::cell::Cell;
use std::io::Cursor;
use std::rc::Rc;

struct ScriptFlow {
    renders: Rc<Cell<u32>>,
    inputs: Rc<Cell<u32>>,
    script: Vec<FlowCtrl>,
}

impl ScriptFlow {
    fn new(renders: Rc<Cell<u32>>, inputs: Rc<Cell<u32>>, script: Vec<FlowCtrl>) -> Self {
        Self {
            renders,
            inputs,
            script,
        }
    }
}

impl Flow for ScriptFlow {
    fn render(&mut self) -> Result<()> {
        self.renders.set(self.renders.get() + 1);
        Ok(())
    }

    fn handle_input(&mut self, _: &str) -> Result<FlowCtrl> {
        self.inputs.set(self.inputs.get() + 1);
        Ok(self.script.remove(0))
    }
}

fn counters() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
    (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)))
}

#[test]
fn prompter_finishes_on_flow_finish() {
    let (renders, inputs) = counters();
    let flow = ScriptFlow::new(renders.clone(), inputs.clone(), vec![FlowCtrl::Finish]);

    Prompter::new()
        .run_with_reader(flow, Cursor::new(b"shot\n"))
        .unwrap();

    assert_eq!(renders.get(), 1);
    assert_eq!(inputs.get(), 1);
}

#[test]
fn prompter_handles_continue_then_abort() {
    let (renders, inputs) = counters();
    let flow = ScriptFlow::new(
        renders.clone(),
        inputs.clone(),
        vec![FlowCtrl::Continue, FlowCtrl::Abort],
    );

    Prompter::new()
        .run_with_reader(flow, Cursor::new(b"plan\ncheck\nlog\n"))
        .unwrap();

    assert_eq!(renders.get(), 2);
    assert_eq!(inputs.get(), 2);
}

#[test]
fn prompter_exits_on_explicit_exit_input() {
    let (renders, inputs) = counters();
    let flow = ScriptFlow::new(renders.clone(), inputs.clone(), vec![FlowCtrl::Finish]);

    Prompter::new()
        .run_with_reader(flow, Cursor::new(b"EXIT\n"))
        .unwrap();

    assert_eq!(renders.get(), 1);
    assert_eq!(inputs.get(), 0);
}

#[test]
fn prompter_exits_on_eof() {
    let (renders, inputs) = counters();
    let flow = ScriptFlow::new(renders.clone(), inputs.clone(), vec![]);

    Prompter::new()
        .run_with_reader(flow, Cursor::new(b""))
        .unwrap();

    assert_eq!(renders.get(), 1);
    assert_eq!(inputs.get(), 0);
}
