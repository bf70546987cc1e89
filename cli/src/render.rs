//! Table rendering for traces and results.
//!
//! The engine's trace entries are structured records with no display
//! text of their own; every piece of wording and layout lives here on
//! the caller's side.

use std::io::Write;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use alu::{Action, OperationOutcome, TraceEntry};

fn get_colour_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Chooses the wording for a step.
fn describe(action: Action) -> &'static str {
    match action {
        Action::Initial => "initial register load",
        Action::AddMultiplicand => "A := A + M",
        Action::SubtractMultiplicand => "A := A - M",
        Action::NoChange => "no change",
        Action::ShiftRight => "shift A:Q right",
        Action::TrialSubtract => "shift left, A := A - M",
        Action::Restore => "restore A, quotient bit 0",
        Action::SetQuotientBit => "quotient bit 1",
        Action::Add => "add, re-encode",
        Action::Subtract => "subtract, re-encode",
    }
}

pub struct TraceTableWriter {
    stream: StandardStream,
}

impl TraceTableWriter {
    pub fn new() -> TraceTableWriter {
        TraceTableWriter {
            stream: StandardStream::stdout(get_colour_choice()),
        }
    }

    fn write_bold(&mut self, text: &str) -> Result<(), std::io::Error> {
        self.stream.set_color(ColorSpec::new().set_bold(true))?;
        write!(self.stream, "{text}")?;
        self.stream.reset()
    }

    fn write_row(
        &mut self,
        step: usize,
        entry: &TraceEntry,
        reg_width: usize,
    ) -> Result<(), std::io::Error> {
        let q = entry
            .q
            .map(|q| q.to_string())
            .unwrap_or_else(|| "-".to_string());
        let q_guard = match entry.q_guard {
            Some(true) => "1",
            Some(false) => "0",
            None => "-",
        };
        let m = entry
            .m
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".to_string());
        let count = entry
            .count
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            self.stream,
            "{step:>4}  {:<26}  {:>reg_width$}  {:>reg_width$}  {q_guard:>3}  {:>reg_width$}  {count:>5}",
            describe(entry.action),
            entry.a.to_string(),
            q,
            m,
        )
    }

    pub fn write_outcome(&mut self, outcome: &OperationOutcome) -> Result<(), std::io::Error> {
        let reg_width = outcome
            .trace
            .iter()
            .map(|entry| entry.a.width() as usize)
            .max()
            .unwrap_or(1);

        self.write_bold(&format!(
            "{:>4}  {:<26}  {:>reg_width$}  {:>reg_width$}  {:>3}  {:>reg_width$}  {:>5}\n",
            "step", "action", "A", "Q", "Q-1", "M", "count",
        ))?;
        for (step, entry) in outcome.trace.iter().enumerate() {
            self.write_row(step, entry, reg_width)?;
        }

        writeln!(self.stream)?;
        self.write_bold("result")?;
        writeln!(
            self.stream,
            ": {} ({})",
            outcome.result, outcome.result_decimal
        )?;
        if let (Some(remainder), Some(remainder_decimal)) =
            (outcome.remainder, outcome.remainder_decimal)
        {
            self.write_bold("remainder")?;
            writeln!(self.stream, ": {remainder} ({remainder_decimal})")?;
        }
        Ok(())
    }
}

impl Default for TraceTableWriter {
    fn default() -> Self {
        Self::new()
    }
}
