use serde::Deserialize;

/// Top-level configuration file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DoomsdayToml {
    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Calculator settings.
    #[serde(default)]
    pub calculator: CalculatorToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_true")]
    pub steps: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
            steps: true,
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorToml {
    #[serde(default = "default_leap_rule")]
    pub leap_rule: String,
}

impl Default for CalculatorToml {
    fn default() -> Self {
        Self {
            leap_rule: default_leap_rule(),
        }
    }
}

fn default_leap_rule() -> String {
    "simplified".to_string()
}
