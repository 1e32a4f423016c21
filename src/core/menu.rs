use crate::core::{Command, EofPolicy, MenuState, SessionEnd, SessionSummary};
use crate::domain::text;
use crate::utils::error::{ConsoleError, Result};
use std::io::{BufRead, Write};

pub struct MenuLoop<R: BufRead, W: Write> {
    input: R,
    output: W,
    eof_policy: EofPolicy,
    state: MenuState,
    commands_handled: usize,
    ended_by: Option<SessionEnd>,
}

impl<R: BufRead, W: Write> MenuLoop<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            eof_policy: EofPolicy::default(),
            state: MenuState::Running,
            commands_handled: 0,
            ended_by: None,
        }
    }

    pub fn with_eof_policy(mut self, eof_policy: EofPolicy) -> Self {
        self.eof_policy = eof_policy;
        self
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line with its terminator removed. `None` means end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// One iteration: banner, prompt, read, respond.
    pub fn step(&mut self) -> Result<MenuState> {
        if self.state == MenuState::Stopped {
            return Ok(self.state);
        }

        text::write_banner(&mut self.output)?;
        text::write_prompt(&mut self.output)?;

        let line = match self.read_line()? {
            Some(line) => line,
            None => return self.end_of_input(),
        };

        let command = Command::parse(&line);
        match &command {
            Command::Invalid(raw) => tracing::debug!("Invalid input: {:?}", raw),
            other => tracing::debug!("Dispatching command: {:?}", other.keyword()),
        }

        text::respond(&command, &mut self.output)?;
        self.output.flush()?;
        self.commands_handled += 1;

        self.state = self.state.after(&command);
        if self.state == MenuState::Stopped {
            self.ended_by = Some(SessionEnd::StopCommand);
        }
        Ok(self.state)
    }

    fn end_of_input(&mut self) -> Result<MenuState> {
        match self.eof_policy {
            EofPolicy::Fail => {
                tracing::warn!(
                    "Input closed after {} command(s) without 'stop'",
                    self.commands_handled
                );
                Err(ConsoleError::InputClosed)
            }
            EofPolicy::Stop => {
                tracing::info!("Input closed, treating as 'stop'");
                writeln!(self.output)?;
                text::write_farewell(&mut self.output)?;
                self.output.flush()?;
                self.state = MenuState::Stopped;
                self.ended_by = Some(SessionEnd::EndOfInput);
                Ok(self.state)
            }
        }
    }

    pub fn run(&mut self) -> Result<SessionSummary> {
        tracing::info!("Starting console menu");

        while self.step()? == MenuState::Running {}

        let summary = SessionSummary {
            commands_handled: self.commands_handled,
            ended_by: self.ended_by.unwrap_or(SessionEnd::StopCommand),
        };
        tracing::info!(
            "Console menu stopped after {} command(s) ({:?})",
            summary.commands_handled,
            summary.ended_by
        );
        Ok(summary)
    }
}
