//! Target platform for the generated Apple project.

use std::fmt;
use std::str::FromStr;

/// Which Apple platform the extension is scaffolded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Ios,
    Macos,
}

impl Platform {
    /// Generated project directory name under `gen/`.
    pub fn dir_name(self) -> &'static str {
        match self {
            Platform::Ios => "apple",
            Platform::Macos => "apple-macos",
        }
    }

    /// Suffix of the host app target name, e.g. `MyApp_iOS`.
    pub fn target_suffix(self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Macos => "macOS",
        }
    }

    /// Platform value understood by the project generator.
    pub fn generator_value(self) -> &'static str {
        self.target_suffix()
    }

    /// Minimum OS version for scaffolded extension targets.
    pub fn deployment_target(self) -> &'static str {
        match self {
            Platform::Ios => "14.0",
            Platform::Macos => "11.0",
        }
    }

    /// The macOS sandbox entitlement is mandatory for extensions there.
    pub fn needs_sandbox(self) -> bool {
        matches!(self, Platform::Macos)
    }

    /// How to set up the project directory when it is missing.
    pub fn init_hint(self) -> &'static str {
        match self {
            Platform::Ios => "Run 'tauri ios init' first.",
            Platform::Macos => "Set up the macOS Xcode project first.",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Ios => write!(f, "ios"),
            Platform::Macos => write!(f, "macos"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ios" => Ok(Platform::Ios),
            "macos" => Ok(Platform::Macos),
            other => Err(format!("unknown platform: {other} (expected ios or macos)")),
        }
    }
}
