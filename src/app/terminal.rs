use crate::core::controller::ContactFormController;
use crate::domain::model::{FormField, InputKind};
use crate::utils::error::{ContactError, ErrorCategory, Result};
use crate::utils::validation::{validate_email, validate_required};
use std::io::{BufRead, Write};

/// Line-based front end: prompts for whatever is missing, submits, and prints
/// the page after each step.
pub struct TerminalForm<R, W> {
    controller: ContactFormController,
    input: R,
    output: W,
    interactive: bool,
}

impl<R: BufRead, W: Write> TerminalForm<R, W> {
    pub fn new(controller: ContactFormController, input: R, output: W, interactive: bool) -> Self {
        Self {
            controller,
            input,
            output,
            interactive,
        }
    }

    pub fn controller(&self) -> &ContactFormController {
        &self.controller
    }

    /// Prompts for every empty field. Without a terminal the fields are left
    /// as they are and submit reports what is missing.
    pub fn collect(&mut self) -> Result<()> {
        if !self.interactive {
            return Ok(());
        }

        for field in FormField::ALL {
            if !self.controller.state().data.get(field).trim().is_empty() {
                continue;
            }
            let value = self.prompt(field)?;
            self.controller.update_field(field, value);
        }
        Ok(())
    }

    /// Submits once; in interactive mode a failed delivery can be retried
    /// with the same fields.
    pub async fn submit(&mut self, wait_dismiss: bool) -> Result<()> {
        loop {
            let result = self.controller.submit().await;
            self.render()?;

            match result {
                Ok(()) => {
                    if wait_dismiss {
                        self.controller.wait_until_idle().await;
                        self.render()?;
                    }
                    return Ok(());
                }
                Err(err) if self.interactive && is_delivery_failure(&err) => {
                    if !self.confirm("Try again? [y/N] ")? {
                        return Err(err);
                    }
                }
                Err(err) => {
                    if wait_dismiss && is_delivery_failure(&err) {
                        self.controller.wait_until_idle().await;
                        self.render()?;
                    }
                    return Err(err);
                }
            }
        }
    }

    pub fn render(&mut self) -> Result<()> {
        writeln!(self.output, "{}", self.controller.view())?;
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, field: FormField) -> Result<String> {
        loop {
            let value = match field.kind() {
                InputKind::MultiLine => {
                    writeln!(
                        self.output,
                        "{} * ({}; finish with an empty line):",
                        field.label(),
                        field.placeholder()
                    )?;
                    self.output.flush()?;
                    self.read_block()?
                }
                _ => {
                    write!(self.output, "{} * ({}): ", field.label(), field.placeholder())?;
                    self.output.flush()?;
                    self.read_line()?
                }
            };

            let checked = match field.kind() {
                InputKind::Email => validate_required(field.key(), &value)
                    .and_then(|_| validate_email(field.key(), &value)),
                _ => validate_required(field.key(), &value),
            };
            match checked {
                Ok(()) => return Ok(value),
                Err(err) => writeln!(self.output, "  {}", err.user_message())?,
            }
        }
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let answer = self.read_line()?;
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ContactError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed before the form was complete",
            )));
        }
        Ok(line.trim().to_string())
    }

    fn read_block(&mut self) -> Result<String> {
        let mut lines = Vec::new();
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim_end_matches(['\r', '\n']);
            if line.is_empty() {
                break;
            }
            lines.push(line.to_string());
        }
        Ok(lines.join("\n"))
    }
}

fn is_delivery_failure(err: &ContactError) -> bool {
    matches!(
        err.category(),
        ErrorCategory::Application | ErrorCategory::Network | ErrorCategory::Unknown
    )
}
