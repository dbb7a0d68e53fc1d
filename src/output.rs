//! Rendering of a calculation for the terminal.

use anyhow::{Context, Result};
use serde::Serialize;

use doomsday_calculator::{DoomsdayResult, ExplanationStep};
use doomsday_calendar::{CalendarDate, LeapRule, Weekday};

/// How the answer is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Answer line followed by a numbered list of steps.
    Text,
    /// Pretty-printed JSON object.
    Json,
}

/// JSON shape of a calculation.
#[derive(Debug, Serialize)]
pub struct WeekdayOutput<'a> {
    pub date: String,
    pub weekday: Weekday,
    pub leap_rule: LeapRule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<&'a [ExplanationStep]>,
}

/// Renders `result` in `format`. Steps are left out when `show_steps` is false.
pub fn render(
    date: CalendarDate,
    leap_rule: LeapRule,
    result: &DoomsdayResult,
    format: OutputFormat,
    show_steps: bool,
) -> Result<String> {
    let steps = show_steps.then(|| result.steps());
    match format {
        OutputFormat::Text => Ok(render_text(result.weekday(), steps)),
        OutputFormat::Json => {
            let output = WeekdayOutput {
                date: date.to_string(),
                weekday: result.weekday(),
                leap_rule,
                steps,
            };
            serde_json::to_string_pretty(&output).context("failed to serialize result")
        }
    }
}

fn render_text(weekday: Weekday, steps: Option<&[ExplanationStep]>) -> String {
    let mut out = format!("The day of the week is: {weekday}\n");
    for (i, step) in steps.unwrap_or_default().iter().enumerate() {
        out.push_str(&format!("{:>3}. {step}\n", i + 1));
    }
    out
}
