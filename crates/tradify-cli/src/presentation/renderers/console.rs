use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::formatters::TextStyle;
use crate::presentation::view_models::{CommandOutput, CreateView, StatusLevel};

pub struct ConsoleRenderer {
    json_mode: bool,
    style: TextStyle,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, style: TextStyle) -> Self {
        Self { json_mode, style }
    }

    /// Render into a string instead of stdout
    pub fn render_to_string<T>(&self, result: &CommandOutput<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            let mut out = serde_json::to_string_pretty(result)?;
            out.push('\n');
            return Ok(out);
        }

        let mut out = String::new();
        self.write_text(&mut out, result)?;
        Ok(out)
    }

    fn write_text<T>(&self, out: &mut String, result: &CommandOutput<T>) -> fmt::Result
    where
        T: Serialize + CreateView,
    {
        if let Some(badge) = &result.badge {
            if self.style.color {
                let label = match badge.level {
                    StatusLevel::Success => badge.label.green().bold().to_string(),
                    StatusLevel::Warning => badge.label.yellow().bold().to_string(),
                    StatusLevel::Info => badge.label.bold().to_string(),
                };
                writeln!(out, "{} {}", badge.level.icon(), label)?;
            } else {
                writeln!(out, "{} {}", badge.level.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.style))?;

        if !result.tips.is_empty() {
            writeln!(out, "\n{}", self.style.accent("Tips:"))?;
            for tip in &result.tips {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.style.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandOutput<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let out = self.render_to_string(&result)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(out.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
