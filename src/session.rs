//! Interactive prompt loop.
//!
//! Asks for a number until a valid one is typed, prints its field, then lets
//! the user fill mirrors one at a time. Reading and writing go through generic
//! handles so the loop can be driven from a script or a test.

use std::io::{BufRead, Write};

use crate::config::MirrorConfig;
use crate::error::MirrorResult;
use crate::field::{CoordinateField, Mirror, build_coordinate_field};
use crate::input::parse_digits;
use crate::number::Number;
use crate::render::{RenderConfig, render_to_terminal};

/// Prompt-driven session over an input and an output handle.
pub struct Session<'a, R, W> {
    input: R,
    output: W,
    config: &'a MirrorConfig,
    render: &'a RenderConfig,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(input: R, output: W, config: &'a MirrorConfig, render: &'a RenderConfig) -> Self {
        Self {
            input,
            output,
            config,
            render,
        }
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> MirrorResult<()> {
        let Some(mut field) = self.read_field()? else {
            return Ok(());
        };
        self.print_field(&field)?;

        loop {
            writeln!(self.output, "What's next?")?;
            writeln!(self.output, "Press 'i' to invert")?;
            writeln!(self.output, "Press 'q' to exit")?;
            let Some(action) = self.read_line()? else {
                return Ok(());
            };
            match action.as_str() {
                "q" => return Ok(()),
                "i" => {
                    if self.invert_menu(&mut field)? {
                        return self.close();
                    }
                    return Ok(());
                }
                _ => {}
            }
        }
    }

    /// Prompt until a valid number is typed. `None` on end of input.
    fn read_field(&mut self) -> MirrorResult<Option<CoordinateField>> {
        loop {
            writeln!(
                self.output,
                "The amount of digits should be between 1 and {}",
                self.config.max_digits
            )?;
            writeln!(self.output, "Enter your number:")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_digits(&line, self.config) {
                Ok(digits) => {
                    let number = Number::from_digits(&digits)?;
                    return Ok(Some(build_coordinate_field(number)?));
                }
                Err(e) => {
                    tracing::debug!(error = %e, "rejected number input");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    /// Mirror submenu. Returns `false` if input ended, `true` on quit.
    fn invert_menu(&mut self, field: &mut CoordinateField) -> MirrorResult<bool> {
        loop {
            writeln!(self.output, "Which inversion should it be?")?;
            writeln!(self.output, "Press 'x' to invert the number along the x-axis")?;
            writeln!(self.output, "Press 'y' to invert the number along the y-axis")?;
            writeln!(self.output, "Press 'xy' to invert the number along both axes")?;
            writeln!(self.output, "Press 'q' to exit")?;
            let Some(choice) = self.read_line()? else {
                return Ok(false);
            };
            if choice.eq_ignore_ascii_case("q") {
                return Ok(true);
            }
            match choice.parse::<Mirror>() {
                Ok(mirror) => {
                    field.fill(mirror)?;
                    self.print_field(field)?;
                }
                Err(_) => writeln!(self.output, "Invalid input, please try again!")?,
            }
        }
    }

    fn print_field(&mut self, field: &CoordinateField) -> MirrorResult<()> {
        writeln!(self.output, "{}", render_to_terminal(field.grid(), self.render))?;
        Ok(())
    }

    fn close(&mut self) -> MirrorResult<()> {
        writeln!(self.output, "Closing application...")?;
        Ok(())
    }

    /// Next line without its terminator. `None` on end of input.
    fn read_line(&mut self) -> MirrorResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
