//! Output types for Doomsday calculations.

use std::fmt;

use doomsday_calendar::Weekday;
use serde::Serialize;

/// One line of the derivation, in plain English.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExplanationStep(String);

impl ExplanationStep {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the step text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExplanationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of a Doomsday calculation.
///
/// Steps are in derivation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoomsdayResult {
    weekday: Weekday,
    steps: Vec<ExplanationStep>,
}

impl DoomsdayResult {
    pub(crate) fn new(weekday: Weekday, steps: Vec<ExplanationStep>) -> Self {
        Self { weekday, steps }
    }

    /// Returns the computed day of the week.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the explanation steps.
    pub fn steps(&self) -> &[ExplanationStep] {
        &self.steps
    }

    /// Splits into the weekday and the owned steps.
    pub fn into_parts(self) -> (Weekday, Vec<ExplanationStep>) {
        (self.weekday, self.steps)
    }
}
