use crate::ui::ansi::{
    CLEAR_LINE_REST, CURSOR_UP_ONE, FG_LIGHT_GRAY, PROMPT_STYLE, STYLE_BOLD, STYLE_ITALIC,
    STYLE_RESET,
};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const BANNER_INNER_WIDTH: usize = 50;

/// Screen-level helpers: the startup banner and the styled prompt bar.
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self {
            util: WidthUtil::default(),
        }
    }

    pub fn banner_lines(&self) -> Vec<String> {
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}S H O T L I S T{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}Shot lists and gear, ready on set{STYLE_RESET}");
        let blank = " ".repeat(BANNER_INNER_WIDTH);
        vec![
            format!("╭{}╮", "─".repeat(BANNER_INNER_WIDTH)),
            format!("│{blank}│"),
            format!("│{}│", self.center_in_box(&title, BANNER_INNER_WIDTH)),
            format!("│{}│", self.center_in_box(&subtitle, BANNER_INNER_WIDTH)),
            format!("│{blank}│"),
            format!("╰{}╯", "─".repeat(BANNER_INNER_WIDTH)),
        ]
    }

    pub fn print_banner(&self) {
        for line in self.banner_lines() {
            println!("{line}");
        }
    }

    /// Prints `prompt` on a styled bar and parks the cursor right after it.
    pub fn print_prompt(&self, prompt: &str) {
        self.print_prompt_padding_line();
        print!("{PROMPT_STYLE}{prompt}{CLEAR_LINE_REST}{STYLE_RESET}\n");
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}");
        let column = self.util.visible_width(prompt) + 1;
        print!("{CURSOR_UP_ONE}\x1B[{column}G{PROMPT_STYLE}");
        let _ = io::stdout().flush();
    }

    pub fn print_prompt_bottom_padding(&self) {
        self.print_prompt_padding_line();
        let _ = io::stdout().flush();
    }

    fn print_prompt_padding_line(&self) {
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}\n");
    }

    fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }
}
