//! The session loop.
//!
//! A [`Session`] owns the API facade for the lifetime of the process and writes
//! rendered output to any `Write`. Lines come either from a rustyline editor
//! (interactive) or from a reader (scripts, piped stdin); both paths go through
//! [`Session::run_line`].

use std::io::{self, BufRead, IsTerminal, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use billzapp::api::BillzApi;
use billzapp::commands::helpers::pluralize;
use billzapp::commands::sample::DEMO_ONLY_MESSAGE;
use billzapp::commands::{CmdMessage, CmdResult};
use billzapp::sample::burst_schedule;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::form;
use super::render::{
    render_cards, render_fields, render_help, render_invoice, render_log, render_messages,
    render_table,
};
use super::setup::{parse_session_line, DemoSwitch, SessionCommand};

const PROMPT: &str = "billz> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<W: Write> {
    api: BillzApi,
    out: W,
    use_color: Option<bool>,
}

/// Runs a session on stdin: interactive on a terminal, line by line otherwise.
pub fn run(api: BillzApi, use_color: Option<bool>) -> Result<()> {
    let mut session = Session::new(api, io::stdout(), use_color);
    if io::stdin().is_terminal() {
        session.run_interactive()
    } else {
        session.run_script(io::stdin().lock())
    }
}

impl<W: Write> Session<W> {
    pub fn new(api: BillzApi, out: W, use_color: Option<bool>) -> Self {
        Self {
            api,
            out,
            use_color,
        }
    }

    pub fn run_interactive(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new()?;
        let mut banner = vec![CmdMessage::info(
            "billz: invoices live for this session only. Type help for commands.",
        )];
        if self.api.demo_mode() {
            banner.push(CmdMessage::info("Demo mode on"));
        }
        self.print_messages(&banner)?;

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    if self.run_line(&line, Some(&mut editor))? == Flow::Quit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Runs every line of `input` as a session command, stopping at `quit`.
    pub fn run_script<R: BufRead>(&mut self, input: R) -> Result<()> {
        for line in input.lines() {
            if self.run_line(&line?, None)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Parses and executes one line. Parse errors are printed, not returned.
    pub fn run_line(&mut self, line: &str, editor: Option<&mut DefaultEditor>) -> Result<Flow> {
        match parse_session_line(line) {
            Ok(Some(command)) => self.execute(command, editor),
            Ok(None) => Ok(Flow::Continue),
            Err(message) => {
                self.print_messages(&[CmdMessage::error(message)])?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(
        &mut self,
        command: SessionCommand,
        editor: Option<&mut DefaultEditor>,
    ) -> Result<Flow> {
        tracing::debug!(?command, "session command");
        match command {
            SessionCommand::New { sample, set } => self.create(sample, &set, editor)?,
            SessionCommand::List => {
                let result = self.api.list_invoices()?;
                self.print_table(&result)?;
                self.print_messages(&result.messages)?;
            }
            SessionCommand::Show { id } => {
                let result = self.api.show_invoice(&id)?;
                for invoice in &result.listed {
                    let output =
                        render_invoice(self.api.store().collection(), invoice, self.use_color);
                    self.print(&output)?;
                }
                self.print_messages(&result.messages)?;
            }
            SessionCommand::Filter { status } => {
                let result = self.api.filter(status.as_deref())?;
                self.print_messages(&result.messages)?;
                if !result.has_errors() {
                    self.print_table(&result)?;
                }
            }
            SessionCommand::Summary => self.print_summary()?,
            SessionCommand::Remove { ids } => {
                let result = self.api.remove_invoices(&ids)?;
                self.print_messages(&result.messages)?;
            }
            SessionCommand::Modify { id, changes } => self.modify(&id, &changes, editor)?,
            SessionCommand::Sample { count } => self.sample_burst(count)?,
            SessionCommand::Demo { switch } => {
                let on = match switch {
                    Some(DemoSwitch::On) => true,
                    Some(DemoSwitch::Off) => false,
                    None => !self.api.demo_mode(),
                };
                let result = self.api.set_demo_mode(on);
                self.print_messages(&result.messages)?;
            }
            SessionCommand::Export => {
                let result = self.api.export()?;
                if let Some(json) = &result.export {
                    writeln!(self.out, "{}", json)?;
                }
                self.print_messages(&result.messages)?;
            }
            SessionCommand::Fields => {
                let result = self.api.fields()?;
                let output = render_fields(&result.fields, self.use_color);
                self.print(&output)?;
            }
            SessionCommand::Log { limit } => {
                let result = self.api.transition_log(limit)?;
                let output = render_log(&result.transitions, self.use_color);
                self.print(&output)?;
                self.print_messages(&result.messages)?;
            }
            SessionCommand::Help => {
                let output = render_help(self.use_color);
                self.print(&output)?;
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn create(
        &mut self,
        sample: bool,
        pairs: &[String],
        editor: Option<&mut DefaultEditor>,
    ) -> Result<()> {
        let mut form = if sample {
            match self.api.sample_form() {
                Some(form) => form,
                None => return self.print_messages(&[CmdMessage::warning(DEMO_ONLY_MESSAGE)]),
            }
        } else {
            self.api.blank_form()
        };

        if let (Some(editor), true) = (editor, pairs.is_empty()) {
            if !form::fill(editor, &mut form, false)? {
                return self.print_messages(&[CmdMessage::info("Cancelled")]);
            }
        }

        let result = self.api.create_from_form(&form, pairs)?;
        self.print_messages(&result.messages)
    }

    fn modify(
        &mut self,
        id: &str,
        pairs: &[String],
        editor: Option<&mut DefaultEditor>,
    ) -> Result<()> {
        let result = match (editor, self.api.edit_form(id)) {
            (Some(editor), Some(mut form)) if pairs.is_empty() => {
                if !form::fill(editor, &mut form, true)? {
                    return self.print_messages(&[CmdMessage::info("Cancelled")]);
                }
                self.api.modify_from_form(id, &form)?
            }
            _ => self.api.modify_invoice(id, pairs)?,
        };
        self.print_messages(&result.messages)
    }

    /// Generates sample invoices one at a time, `sample-delay-ms` apart.
    ///
    /// Outside demo mode, or with no delay configured, the whole burst is a single
    /// call so the library reports the outcome.
    pub fn sample_burst(&mut self, count: Option<usize>) -> Result<()> {
        let count = count.unwrap_or(self.api.config().sample_count);
        let spacing = Duration::from_millis(self.api.config().sample_delay_ms);
        if !self.api.demo_mode() || spacing.is_zero() || count <= 1 {
            let result = self.api.generate_samples(Some(count))?;
            return self.print_messages(&result.messages);
        }

        let start = Instant::now();
        for offset in burst_schedule(count, spacing) {
            if let Some(wait) = offset.checked_sub(start.elapsed()) {
                thread::sleep(wait);
            }
            self.api.generate_samples(Some(1))?;
        }
        self.print_messages(&[CmdMessage::success(format!(
            "Generated {}",
            pluralize(count, "sample invoice")
        ))])
    }

    pub fn print_summary(&mut self) -> Result<()> {
        let result = self.api.summary()?;
        let output = render_cards(
            self.api.store().collection(),
            &result.summaries,
            &self.api.config().default_currency,
            self.use_color,
        );
        self.print(&output)?;
        self.print_messages(&result.messages)
    }

    fn print_table(&mut self, result: &CmdResult) -> Result<()> {
        let output = render_table(
            self.api.store().collection(),
            &result.listed,
            self.api.store().table_status(),
            &self.api.config().default_currency,
            self.use_color,
        );
        self.print(&output)
    }

    fn print_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        let output = render_messages(messages, self.use_color);
        self.print(&output)
    }

    fn print(&mut self, output: &str) -> Result<()> {
        if !output.is_empty() {
            write!(self.out, "{}", output)?;
            self.out.flush()?;
        }
        Ok(())
    }
}
