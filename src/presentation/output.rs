//! Output Rendering
//!
//! Renders use case results as human-readable text or NDJSON. Money is
//! rounded to two decimals in text only; JSON carries the unrounded values.

use std::io::{self, Write};

use crate::application::{ActionResult, CheckReport, CheckStatus, UserHistory};
use crate::domain::services::SalaryBreakdown;
use crate::domain::value_objects::ActionKind;

use super::json::{write_event, CompleteEvent, DataEvent, ErrorEvent, RowEvent};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub struct Renderer<'a> {
    format: OutputFormat,
    command: &'a str,
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}

impl<'a> Renderer<'a> {
    pub fn new(format: OutputFormat, command: &'a str) -> Self {
        Self { format, command }
    }

    pub fn action(&self, out: &mut impl Write, result: &ActionResult) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            for row in &result.appended {
                write_event(out, &RowEvent::new(self.command, row))?;
            }
            return write_event(
                out,
                &CompleteEvent::success(self.command).with_appended(result.appended_count()),
            );
        }

        let user = &result.user;
        match result.kind {
            ActionKind::Join => {
                let level = result
                    .appended
                    .first()
                    .map(|row| row.level.as_str())
                    .unwrap_or("-");
                writeln!(out, "Joined {user} at {level}")?;
            }
            ActionKind::Upgrade => {
                let level = result
                    .appended
                    .last()
                    .map(|row| row.level.as_str())
                    .unwrap_or("-");
                writeln!(out, "Upgraded {user} to {level}")?;
            }
            ActionKind::EarnBadge => {
                writeln!(out, "Recorded {} badge(s) for {user}", result.appended_count())?;
            }
        }
        for badge in result.badges() {
            writeln!(out, "  + {badge}")?;
        }
        writeln!(
            out,
            "{} row(s) appended, ledger now has {}",
            result.appended_count(),
            result.ledger_len
        )
    }

    pub fn salary(&self, out: &mut impl Write, breakdown: &SalaryBreakdown) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            write_event(out, &DataEvent::new(self.command, breakdown))?;
            return write_event(out, &CompleteEvent::success(self.command));
        }

        writeln!(out, "{}  {}", breakdown.user, breakdown.level)?;
        writeln!(out, "  base               {:>12}", money(breakdown.base))?;
        writeln!(out, "  shortfall          {:>12}", money(-breakdown.shortfall))?;
        writeln!(
            out,
            "  next level credit  {:>12}",
            money(breakdown.next_level_credit)
        )?;
        writeln!(out, "  salary             {:>12}", money(breakdown.salary))
    }

    pub fn history(&self, out: &mut impl Write, history: &UserHistory) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            for row in &history.events {
                write_event(out, &RowEvent::new(self.command, row))?;
            }
            write_event(
                out,
                &DataEvent::new(
                    self.command,
                    serde_json::json!({
                        "user": history.user,
                        "current_level": history.current_level,
                        "badges": history.badges,
                    }),
                ),
            )?;
            return write_event(out, &CompleteEvent::success(self.command));
        }

        writeln!(
            out,
            "{}  {}  ({} badge(s))",
            history.user,
            history.current_level,
            history.badges.len()
        )?;
        for (index, row) in history.events.iter().enumerate() {
            writeln!(
                out,
                "  {:>3}  {:<9}  {}",
                index + 1,
                row.level.as_str(),
                row.badge.as_deref().unwrap_or("-")
            )?;
        }
        Ok(())
    }

    pub fn check(&self, out: &mut impl Write, report: &CheckReport) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            write_event(out, &DataEvent::new(self.command, report))?;
            return write_event(out, &CompleteEvent::success(self.command));
        }

        writeln!(out, "salary grid  {} entries", report.grid_entries)?;
        writeln!(out, "badges       {}", report.badges)?;
        writeln!(
            out,
            "ledger       {} row(s), {} user(s)",
            report.events, report.users
        )?;
        match report.status() {
            CheckStatus::Pass => writeln!(out, "ok: ledger matches the reference tables"),
            CheckStatus::Warning => {
                for issue in &report.issues {
                    writeln!(out, "warning: row {}: {}", issue.row, issue.message)?;
                }
                writeln!(out, "{} issue(s) found", report.issues.len())
            }
        }
    }

    /// JSON mode only; text errors go to stderr through the binary's error path
    pub fn error(&self, out: &mut impl Write, code: &str, message: &str) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            write_event(out, &ErrorEvent::new(self.command, code, message))?;
        }
        Ok(())
    }
}
