use log::warn;
use std::fmt;

/// Deployment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Development,
    #[default]
    Production,
}

impl Mode {
    /// Map a raw environment value onto a mode.
    ///
    /// Missing, empty and unknown values all become `Production`; unknown
    /// values are logged.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            None | Some("") => Mode::Production,
            Some("development") => Mode::Development,
            Some("production") => Mode::Production,
            Some(other) => {
                warn!("Unrecognized environment mode {other:?}, falling back to production");
                Mode::Production
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
