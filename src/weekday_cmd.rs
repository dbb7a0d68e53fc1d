//! Weekday command: parse a date, run the calculator, print the answer.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use doomsday_calculator::compute_with_config;
use doomsday_calendar::CalendarDate;

use crate::cli::WeekdayArgs;
use crate::config::DoomsdayToml;
use crate::convert;
use crate::output;

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "doomsday.toml";

/// Run a single calculation and print it to stdout.
pub fn run(args: WeekdayArgs) -> Result<()> {
    let rendered = execute(&args)?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Run a single calculation and return the rendered output.
pub fn execute(args: &WeekdayArgs) -> Result<String> {
    let _cmd = info_span!("weekday").entered();

    // 1. Load config, CLI flags override file values
    let mut config = load_config(args.config.as_deref())?;
    if let Some(ref format) = args.format {
        config.output.format = format.clone();
    }
    if let Some(ref leap_rule) = args.leap_rule {
        config.calculator.leap_rule = leap_rule.clone();
    }
    if args.no_steps {
        config.output.steps = false;
    }

    let format = convert::parse_format(&config.output.format)?;
    let calc_cfg = convert::build_calculator_config(&config.calculator)?;

    // 2. Validate the date before the calculator sees it
    let date: CalendarDate = args.date.parse()?;
    info!(date = %date, leap_rule = calc_cfg.leap_rule().name(), "computing weekday");

    // 3. Compute and render
    let result = compute_with_config(date, &calc_cfg);
    info!(weekday = %result.weekday(), n_steps = result.steps().len(), "computed");

    output::render(
        date,
        calc_cfg.leap_rule(),
        &result,
        format,
        config.output.steps,
    )
}

/// Reads the TOML config.
///
/// An explicit path must exist. Without one, `doomsday.toml` in the working
/// directory is used if present, and defaults otherwise.
fn load_config(path: Option<&Path>) -> Result<DoomsdayToml> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG);
            if !default.is_file() {
                debug!("no config file, using defaults");
                return Ok(DoomsdayToml::default());
            }
            default
        }
    };
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: DoomsdayToml = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use doomsday_calendar::CalendarError;
    use tempfile::NamedTempFile;

    use super::*;

    fn args(date: &str) -> WeekdayArgs {
        WeekdayArgs {
            date: date.to_string(),
            config: None,
            format: None,
            no_steps: false,
            leap_rule: None,
        }
    }

    const JSON_GREGORIAN: &str = r#"
[output]
format = "json"

[calculator]
leap_rule = "gregorian"
"#;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn text_answer() {
        let out = execute(&args("2024-12-25")).unwrap();
        assert!(out.starts_with("The day of the week is: Wednesday\n"));
        assert!(out.contains("  1. "));
    }

    #[test]
    fn no_steps_flag() {
        let mut a = args("1776-07-04");
        a.no_steps = true;
        assert_eq!(execute(&a).unwrap(), "The day of the week is: Thursday\n");
    }

    #[test]
    fn empty_date_rejected() {
        let err = execute(&args("")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CalendarError>(),
            Some(&CalendarError::EmptyInput)
        );
        assert_eq!(err.to_string(), "please input a date before submitting");
    }

    #[test]
    fn invalid_date_rejected() {
        let err = execute(&args("2023-02-30")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CalendarError>(),
            Some(CalendarError::InvalidDate { .. })
        ));
        let full = format!("{err:#}");
        assert!(full.contains("date input is invalid"));
        assert!(full.contains("max 28"));
    }

    #[test]
    fn config_file_selects_json_and_gregorian() {
        let file = config_file(JSON_GREGORIAN);
        let mut a = args("1900-01-01");
        a.config = Some(file.path().to_path_buf());
        let out = execute(&a).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["weekday"], "Monday");
        assert_eq!(parsed["leap_rule"], "gregorian");
    }

    #[test]
    fn cli_flags_override_config_file() {
        let file = config_file(JSON_GREGORIAN);
        let mut a = args("1900-01-01");
        a.config = Some(file.path().to_path_buf());
        a.format = Some("text".to_string());
        a.leap_rule = Some("simplified".to_string());
        a.no_steps = true;
        assert_eq!(execute(&a).unwrap(), "The day of the week is: Sunday\n");
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let mut a = args("2000-01-01");
        a.config = Some(PathBuf::from("/nonexistent/doomsday.toml"));
        let err = execute(&a).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn bad_config_value_is_an_error() {
        let file = config_file("[calculator]\nleap_rule = \"julian\"\n");
        let mut a = args("2000-01-01");
        a.config = Some(file.path().to_path_buf());
        assert!(execute(&a).is_err());
    }
}
