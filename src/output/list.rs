//! Plain list output: one name per line, in discovery order

use std::io;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::walk::WalkResult;

use super::config::OutputConfig;

pub struct ListFormatter {
    config: OutputConfig,
}

impl ListFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write the result to any color-aware writer.
    pub fn write<W: WriteColor>(&self, out: &mut W, result: &WalkResult) -> io::Result<()> {
        let mut category_color = ColorSpec::new();
        category_color.set_fg(Some(Color::Blue)).set_bold(true);

        for category in &result.categories {
            out.set_color(&category_color)?;
            write!(out, "{}", category.name)?;
            out.reset()?;
            writeln!(out)?;
        }

        if !self.config.show_pages || result.pages.is_empty() {
            return Ok(());
        }

        let mut label_color = ColorSpec::new();
        label_color.set_fg(Some(Color::Cyan));

        for page in &result.pages {
            write!(out, "  ")?;
            out.set_color(&label_color)?;
            write!(out, "page:")?;
            out.reset()?;
            writeln!(out, " {}", page.title)?;
        }

        Ok(())
    }

    pub fn print(&self, result: &WalkResult) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write(&mut stdout, result)
    }
}

/// Print a walk result to stdout as a plain list.
pub fn print_list(result: &WalkResult, config: OutputConfig) -> io::Result<()> {
    ListFormatter::new(config).print(result)
}
