use std::fmt;
use std::str::FromStr;

/// Package manager named by the `binary` part of a `binary:script`
/// startup script reference.
///
/// - `Npm` / `Yarn`: the script is run through `run ... --if-present`.
/// - `Npx`: the script is executed directly, with no `run` and no
///   `--if-present`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Npx,
}

impl PackageManager {
    pub fn binary(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Npx => "npx",
        }
    }

    /// Shell command that runs `script` with this package manager.
    pub fn command_for(self, script: &str) -> String {
        match self {
            PackageManager::Npm | PackageManager::Yarn => {
                format!("{} run {} --if-present", self.binary(), script)
            }
            PackageManager::Npx => format!("{} {}", self.binary(), script),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    // Exact, case-sensitive: `NPM:build` is not a package manager reference.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "npx" => Ok(PackageManager::Npx),
            other => Err(format!(
                "unknown package manager: {other} (expected \"npm\", \"yarn\" or \"npx\")"
            )),
        }
    }
}
