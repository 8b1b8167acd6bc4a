//! Terminal output for plan listings and step views
//!
//! Plan text is markdown-like: summaries and steps are headers, acceptance
//! criteria are numbered lines. Rich mode colors headers and lets termimad
//! style the rest; plain mode prints the text untouched.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const HEADER_COLOR: &str = "\x1b[34m";
const DONE_COLOR: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Renders text either with terminal styling or as plain text
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Print `text` to stdout
    pub fn render(&self, text: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{text}");
            return Ok(());
        }

        for line in text.lines() {
            match header_line(line) {
                Some(styled) => println!("{styled}"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Colors a header line, green when it reports a finished plan or step.
/// Returns `None` for anything that is not a header.
fn header_line(line: &str) -> Option<String> {
    if !line.starts_with('#') {
        return None;
    }
    let color = if line.contains("(DONE)") {
        DONE_COLOR
    } else {
        HEADER_COLOR
    };
    Some(format!("{color}{line}{RESET}"))
}
