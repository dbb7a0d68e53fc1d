//! Pure conversion functions: TOML config structs -> typed settings.

use anyhow::{Result, bail};

use doomsday_calculator::DoomsdayConfig;
use doomsday_calendar::LeapRule;

use crate::config::CalculatorToml;
use crate::output::OutputFormat;

/// Parses an output format name into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Parses a leap-year rule name into the corresponding enum variant.
pub fn parse_leap_rule(s: &str) -> Result<LeapRule> {
    match s.to_lowercase().as_str() {
        "simplified" => Ok(LeapRule::Simplified),
        "gregorian" => Ok(LeapRule::Gregorian),
        other => bail!("unknown leap rule: {other:?}"),
    }
}

/// Builds a [`DoomsdayConfig`] from the TOML calculator section.
pub fn build_calculator_config(calc: &CalculatorToml) -> Result<DoomsdayConfig> {
    Ok(DoomsdayConfig::new().with_leap_rule(parse_leap_rule(&calc.leap_rule)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats() {
        assert_eq!(parse_format("text").unwrap(), OutputFormat::Text);
        assert_eq!(parse_format("JSON").unwrap(), OutputFormat::Json);
        assert!(parse_format("yaml").is_err());
    }

    #[test]
    fn leap_rules() {
        assert_eq!(parse_leap_rule("simplified").unwrap(), LeapRule::Simplified);
        assert_eq!(parse_leap_rule("Gregorian").unwrap(), LeapRule::Gregorian);
        let err = parse_leap_rule("julian").unwrap_err();
        assert_eq!(err.to_string(), "unknown leap rule: \"julian\"");
    }

    #[test]
    fn calculator_config_from_defaults() {
        let cfg = build_calculator_config(&CalculatorToml::default()).unwrap();
        assert_eq!(cfg.leap_rule(), LeapRule::Simplified);
    }
}
