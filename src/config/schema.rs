//! Settings file schema.
//!
//! These structs map to the YAML layout of `.cmdkit.yml`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::interact::SectionStyle;
use crate::style::StyleSpec;
use crate::ui::{Output, OutputType, Verbosity};

/// Root of the settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CmdKitConfig {
    /// Output settings.
    pub settings: Settings,

    /// Extra or replacement styles, keyed by name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: BTreeMap<String, StyleSpec>,
}

/// Output settings applied to every command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Verbosity used when no `-v`/`-q` flag is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<Verbosity>,

    /// How markup is written: normal, raw or plain.
    pub output: OutputType,

    /// How section headings are drawn.
    pub section_style: SectionStyle,

    /// Cap on block width.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Force colors on or off; unset follows the terminal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<bool>,

    /// Whether prompts read input; unset means yes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactive: Option<bool>,
}

fn default_max_line_length() -> usize {
    Output::MAX_LINE_LENGTH
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verbosity: None,
            output: OutputType::default(),
            section_style: SectionStyle::default(),
            max_line_length: default_max_line_length(),
            colors: None,
            interactive: None,
        }
    }
}
