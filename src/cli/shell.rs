//! Line-oriented tracking session
//!
//! Each input line is one command. Lines are split into words (double
//! quotes group words) and parsed with clap, so every command gets the
//! same argument handling and help output as the top-level CLI.

use crate::application::TrackerService;
use crate::cli::output::{
    format_grams, format_money, format_profile, format_record, format_saved, format_summary,
    format_week,
};
use crate::domain::{Day, DayAnswer, MetricsView};
use crate::domain::profile::DEFAULT_AGE;
use crate::error::{Result, TrackerError};
use chrono::Local;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "travel", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ShellCommand {
    /// Enter your details and start tracking
    Setup {
        #[arg(long)]
        name: String,

        #[arg(long, default_value_t = DEFAULT_AGE)]
        age: u32,

        /// Vehicle model (e.g. "Honda City")
        #[arg(long)]
        vehicle: String,

        #[arg(long)]
        city: String,
    },

    /// Save whether you traveled on a day
    Day {
        /// monday..sunday, mon..sun, or today
        day: String,

        answer: Answer,

        /// Where you traveled
        #[arg(long = "to")]
        destination: Option<String>,

        /// Kilometres traveled
        #[arg(long, allow_negative_numbers = true)]
        km: Option<f64>,
    },

    /// Show one day, or the whole week
    Show { day: Option<String> },

    /// Show totals, charts and the detailed summary table
    Summary,

    /// Write the week's records to a CSV file
    Export {
        /// Output directory (default: configured export_dir)
        dir: Option<PathBuf>,
    },

    /// Show the current user
    Profile,

    /// Discard the profile and all travel data
    Reset,

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// Answer given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Answer {
    #[value(alias = "y")]
    Yes,
    #[value(alias = "n")]
    No,
}

impl From<Answer> for DayAnswer {
    fn from(answer: Answer) -> Self {
        match answer {
            Answer::Yes => DayAnswer::Traveled,
            Answer::No => DayAnswer::NotTraveled,
        }
    }
}

/// Result of parsing a line
#[derive(Debug, PartialEq)]
pub enum ParsedLine {
    Empty,
    Help(String),
    Command(ShellCommand),
}

/// Whether the session should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Split a line into words, honouring double quotes
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err(TrackerError::Command("unterminated quote".to_string()));
    }
    if has_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Parse one input line. Blank lines and `#` comments are `Empty`.
pub fn parse_line(line: &str) -> Result<ParsedLine> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(ParsedLine::Empty);
    }

    let tokens = tokenize(line)?;
    match ShellLine::try_parse_from(tokens) {
        Ok(parsed) => Ok(ParsedLine::Command(parsed.command)),
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            Ok(ParsedLine::Help(e.render().to_string()))
        }
        Err(e) => {
            // First paragraph only; the rest is usage text
            let rendered = e.to_string();
            let paragraph: Vec<&str> = rendered
                .lines()
                .take_while(|line| !line.trim().is_empty())
                .map(str::trim)
                .collect();
            let message = paragraph.join(" ");
            let message = message.strip_prefix("error: ").unwrap_or(&message);
            Err(TrackerError::Command(message.to_string()))
        }
    }
}

/// A tracking session writing its output to `out`
pub struct Shell<W: Write> {
    service: TrackerService,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(service: TrackerService, out: W) -> Self {
        Shell { service, out }
    }

    #[cfg(test)]
    fn service(&self) -> &TrackerService {
        &self.service
    }

    /// Parse and execute one line
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        match parse_line(line)? {
            ParsedLine::Empty => Ok(Flow::Continue),
            ParsedLine::Help(text) => {
                write!(self.out, "{}", text)?;
                Ok(Flow::Continue)
            }
            ParsedLine::Command(command) => self.execute(command),
        }
    }

    fn execute(&mut self, command: ShellCommand) -> Result<Flow> {
        match command {
            ShellCommand::Setup {
                name,
                age,
                vehicle,
                city,
            } => {
                let profile = self.service.setup(&name, age, &vehicle, &city)?;
                write!(self.out, "Setup complete!\n{}", format_profile(profile))?;
            }
            ShellCommand::Day {
                day,
                answer,
                destination,
                km,
            } => {
                let day = Day::parse_relative(&day, Local::now().date_naive())?;
                let view =
                    self.service
                        .save_day(day, answer.into(), destination.as_deref(), km)?;
                self.write_saved(day, &view)?;
            }
            ShellCommand::Show { day } => {
                let session = self.service.session();
                session.require_profile()?;
                let config = self.service.config();
                let text = match day {
                    Some(day) => {
                        let day = Day::parse_relative(&day, Local::now().date_naive())?;
                        match session.store().get(day) {
                            Some(record) => format_record(record, config),
                            None => format!("{}: no answer yet\n", day),
                        }
                    }
                    None => format_week(session.store(), config),
                };
                write!(self.out, "{}", text)?;
            }
            ShellCommand::Summary => {
                let session = self.service.session();
                session.require_profile()?;
                let text = format_summary(&session.metrics(), self.service.config());
                write!(self.out, "{}", text)?;
            }
            ShellCommand::Export { dir } => {
                let path = self.service.export(dir.as_deref())?;
                writeln!(self.out, "Exported travel data to {}", path.display())?;
            }
            ShellCommand::Profile => {
                let profile = self.service.session().require_profile()?;
                write!(self.out, "{}", format_profile(profile))?;
            }
            ShellCommand::Reset => {
                self.service.reset();
                writeln!(self.out, "Tracking data reset. Run 'setup' to start again.")?;
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn write_saved(&mut self, day: Day, view: &MetricsView) -> Result<()> {
        let session = self.service.session();
        let (Some(record), Some(profile)) = (session.store().get(day), session.profile()) else {
            return Ok(());
        };
        let config = self.service.config();

        write!(self.out, "{}", format_saved(record, profile.name(), config))?;
        writeln!(
            self.out,
            "Week so far: {} of {} days traveled, {}, {}",
            view.day_count,
            view.answered_days,
            format_money(view.totals.total_cost, &config.currency_symbol),
            format_grams(view.totals.total_emission)
        )?;
        Ok(())
    }

    /// Read commands until `quit` or end of input. Errors are reported
    /// inline and the session continues.
    pub fn run_interactive<R: BufRead>(&mut self, input: R, prompt: bool) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(self.out, "travel> ")?;
                self.out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            match self.execute_line(&line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    warn!(command = line.trim(), error = %e, "command failed");
                    writeln!(self.out, "Error: {}", e.display_with_suggestions())?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Execute every line, stopping at the first failing command
    pub fn run_script<R: BufRead>(&mut self, input: R) -> Result<()> {
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            match self.execute_line(&line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    warn!(line = index + 1, command = line.trim(), "script stopped");
                    self.out.flush()?;
                    return Err(e);
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
