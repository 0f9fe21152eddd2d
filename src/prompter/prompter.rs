use crate::errors::{Error, Result};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::ansi::{CURSOR_BLINKING_BLOCK, HIDE_CURSOR, SHOW_CURSOR};
use std::io::{self, BufRead, BufReader, Write};

#[derive(Debug, Default, Clone)]
pub struct Prompter;

/// Restores the cursor however the loop ends.
struct CursorGuard;
impl Drop for CursorGuard {
    fn drop(&mut self) {
        print!("{SHOW_CURSOR}");
        let _ = io::stdout().flush();
    }
}

impl Prompter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn hide_cursor() {
        print!("{HIDE_CURSOR}");
        let _ = io::stdout().flush();
    }

    #[inline]
    fn show_cursor_blinking() {
        print!("{SHOW_CURSOR}{CURSOR_BLINKING_BLOCK}");
        let _ = io::stdout().flush();
    }

    pub fn run<F: Flow>(&self, flow: F) -> Result<()> {
        let reader = BufReader::new(io::stdin());
        self.run_with_reader(flow, reader)
    }

    pub fn run_with_reader<F: Flow, R: BufRead>(&self, mut flow: F, mut reader: R) -> Result<()> {
        let _cursor = CursorGuard;

        loop {
            Self::hide_cursor();
            flow.render()?;
            Self::show_cursor_blinking();

            let mut line = String::new();
            let n = reader.read_line(&mut line).map_err(Error::Io)?;
            if n == 0 {
                return Ok(());
            }
            let line = line.trim();

            if line.eq_ignore_ascii_case("exit") {
                return Ok(());
            }

            match flow.handle_input(line)? {
                FlowCtrl::Continue => continue,
                FlowCtrl::Finish | FlowCtrl::Abort => return Ok(()),
            }
        }
    }
}
