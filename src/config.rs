//! Run settings
//!
//! Paths and replacement tables were hard-coded in earlier iterations of
//! these tools; they now live in a settings structure that can be loaded
//! from a YAML file, with defaults matching the original literal values.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::constants::{APPLICATION, CONFIG_FILE_NAME, ORGANIZATION, QUALIFIER};
use crate::errors::{
    config_parsing_error, file_operation_error, replacement_order_error, Result,
};

/// A single literal find/replace pair
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Replacement {
    /// Literal string to search for
    pub find: String,
    /// Literal string to substitute
    pub replace: String,
}

/// A Markdown source to module artifact conversion descriptor
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ConversionSpec {
    /// Source path, relative to the prompts root
    pub source: PathBuf,
    /// Target path, relative to the module root
    pub target: PathBuf,
    /// Identifier the generated module binds the content to
    pub export_name: String,
    /// One-line description placed in the leading comment
    pub description: String,
}

/// Settings for a batch run
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Root directory holding the Markdown prompt files
    pub prompts_root: PathBuf,
    /// Root directory of the generated module tree
    pub module_root: PathBuf,
    /// Subdirectories of the prompts root also scanned by the rebrand task
    pub rebrand_subdirs: Vec<String>,
    /// Ordered brand/name substitution table
    pub replacements: Vec<Replacement>,
    /// Conversion descriptors for the convert task
    pub conversions: Vec<ConversionSpec>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            prompts_root: PathBuf::from("提示词"),
            module_root: PathBuf::from("lib/prompts"),
            rebrand_subdirs: vec![
                "IP行业分析工作台".to_string(),
                "Ai挖词工具".to_string(),
            ],
            replacements: vec![
                Replacement {
                    find: "星盒".to_string(),
                    replace: "IP内容工厂".to_string(),
                },
                Replacement {
                    find: "记者Aim（艾米）".to_string(),
                    replace: "小艾".to_string(),
                },
                Replacement {
                    find: "记者Aim".to_string(),
                    replace: "小艾".to_string(),
                },
            ],
            conversions: vec![
                ConversionSpec {
                    source: PathBuf::from("IP行业分析工作台/P1.md"),
                    target: PathBuf::from("research/p1-industry.ts"),
                    export_name: "p1IndustryPrompt".to_string(),
                    description: "P1: 行业目标分析师提示词".to_string(),
                },
                ConversionSpec {
                    source: PathBuf::from("IP行业分析工作台/P2.md"),
                    target: PathBuf::from("research/p2-cognition.ts"),
                    export_name: "p2CognitionPrompt".to_string(),
                    description: "P2: 行业认知深度分析助手提示词".to_string(),
                },
                ConversionSpec {
                    source: PathBuf::from("IP行业分析工作台/P3.md"),
                    target: PathBuf::from("research/p3-emotion.ts"),
                    export_name: "p3EmotionPrompt".to_string(),
                    description: "P3: 情绪价值分析专家提示词".to_string(),
                },
                ConversionSpec {
                    source: PathBuf::from("IP传记采访机器人v1.3（情绪深挖版）.md"),
                    target: PathBuf::from("research/ip-biography.ts"),
                    export_name: "ipBiographyPrompt".to_string(),
                    description: "IP传记: 记者型操盘手提示词".to_string(),
                },
            ],
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Settings> {
        let text = read_to_string(path)
            .map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))?;
        let settings: Settings = serde_yaml::from_str(&text)
            .map_err(|e| config_parsing_error(e, &format!("{}", path.display())))?;
        settings.validate()?;
        Ok(settings.expanded())
    }

    /// Check the replacement table ordering invariant
    ///
    /// A later find-string containing an earlier one would never match,
    /// because the earlier pass already rewrote its occurrences. Longer
    /// and more specific patterns must be listed first.
    pub fn validate(&self) -> Result<()> {
        for (i, earlier) in self.replacements.iter().enumerate() {
            for later in &self.replacements[i + 1..] {
                if later.find.contains(&earlier.find) {
                    return Err(replacement_order_error(&earlier.find, &later.find));
                }
            }
        }
        Ok(())
    }

    /// Expand `~` in the configured root paths
    fn expanded(mut self) -> Settings {
        self.prompts_root = expand_tilde(&self.prompts_root);
        self.module_root = expand_tilde(&self.module_root);
        self
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).to_string()),
        None => path.to_path_buf(),
    }
}

/// Locate the per-user configuration file, if any
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load settings from an explicit path, the per-user config file, or defaults
///
/// An explicit path that cannot be read is an error; the per-user config
/// file is optional and silently falls back to the built-in defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => Settings::from_file(path),
        None => match default_config_path() {
            Some(path) if path.exists() => Settings::from_file(&path),
            _ => {
                let settings = Settings::default();
                settings.validate()?;
                Ok(settings.expanded())
            }
        },
    }
}
