use crate::config::Config;
use crate::core::models::Shot;
use crate::core::types::TransportMode;
use crate::scheduler::DayPlan;
use crate::ui::display_data::DisplayDataBuilder;
use crate::ui::table_printer::{Table, TablePrinter, TableRow};
use crate::ui::width_util::WidthUtil;
use std::io;
use std::io::Write;

const SHOT_HEADERS: [&str; 8] = [
    "ID", "SCENE", "TITLE", "DATE", "WINDOW", "LOCATION", "STATUS", "GEAR",
];
const PLAN_HEADERS: [&str; 6] = ["WINDOW", "SCENE", "TITLE", "LOCATION", "STATUS", "GEAR"];
const MIN_TITLE_WIDTH: usize = 12;

#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub util: WidthUtil,
    pub data: DisplayDataBuilder,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_config<W: Write>(&self, config: &Config, out: &mut W) -> io::Result<()> {
        let headers = ["ID", "KEY", "DESCRIPTION", "VALUE"];
        let rows: Vec<TableRow> = config
            .rows()
            .iter()
            .enumerate()
            .map(|(i, (k, d, v))| TableRow::cells([i.to_string(), k.clone(), d.clone(), v.clone()]))
            .collect();
        let table = Table::new("Config", &headers, rows).empty_message("No config items found.");
        self.printer.render(&table, out)
    }

    pub fn display_config(&self, config: &Config) {
        let _ = self.render_config(config, &mut io::stdout());
    }

    pub fn render_shots<W: Write>(
        &self,
        shots: &[&Shot],
        title_width: usize,
        out: &mut W,
    ) -> io::Result<()> {
        let rows = self.data.shot_rows(shots, title_width);
        let table = Table::new("Shots", &SHOT_HEADERS, rows).empty_message("No shots scheduled.");
        self.printer.render(&table, out)
    }

    /// Titles get roughly a third of the terminal.
    pub fn display_shots(&self, shots: &[&Shot]) {
        let title_width = (self.util.terminal_width() / 3).max(MIN_TITLE_WIDTH);
        let _ = self.render_shots(shots, title_width, &mut io::stdout());
    }

    pub fn render_checklist<W: Write>(&self, shots: &[&Shot], out: &mut W) -> io::Result<()> {
        let headers = ["ID", "SHOT", "READY", "EQUIPMENT"];
        let rows = self.data.checklist_rows(shots);
        let table = Table::new("Equipment Checklist", &headers, rows)
            .empty_message("No equipment assigned.");
        self.printer.render(&table, out)
    }

    pub fn display_checklist(&self, shots: &[&Shot]) {
        let _ = self.render_checklist(shots, &mut io::stdout());
    }

    pub fn render_plan<W: Write>(
        &self,
        plans: &[DayPlan<'_>],
        progress: u8,
        mode: TransportMode,
        filtered: bool,
        out: &mut W,
    ) -> io::Result<()> {
        let sections = self.data.plan_sections(plans);
        let summary = format!("Progress: {progress}% done | travel by {mode}");
        let notice = "Filtered view: travel checks paused.";

        let mut width = self.util.visible_width(&summary);
        if filtered {
            width = width.max(self.util.visible_width(notice));
        }
        let tables: Vec<Table<'_>> = sections
            .iter()
            .map(|s| Table::new(&s.title, &PLAN_HEADERS, s.rows.clone()))
            .collect();
        for t in &tables {
            width = width.max(self.printer.table_width(t));
        }

        self.printer.render_banner("Shot Plan", width, out)?;
        writeln!(out, "{summary}")?;
        if filtered {
            writeln!(out, "{notice}")?;
        }
        if tables.is_empty() {
            let empty = Table::new("Schedule", &[], Vec::new())
                .empty_message("No shots scheduled.")
                .min_width(width);
            return self.printer.render(&empty, out);
        }
        for t in tables {
            self.printer.render(&t.min_width(width), out)?;
        }
        Ok(())
    }

    pub fn display_plan(
        &self,
        plans: &[DayPlan<'_>],
        progress: u8,
        mode: TransportMode,
        filtered: bool,
    ) {
        let _ = self.render_plan(plans, progress, mode, filtered, &mut io::stdout());
    }
}
