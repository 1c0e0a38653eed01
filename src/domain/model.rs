use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three libjpeg API/ABI emulation levels the downstream build accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum JpegLibVersion {
    #[value(name = "62")]
    #[serde(rename = "62")]
    V62,
    #[value(name = "70")]
    #[serde(rename = "70")]
    V70,
    #[value(name = "80")]
    #[serde(rename = "80")]
    V80,
}

impl JpegLibVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            JpegLibVersion::V62 => "62",
            JpegLibVersion::V70 => "70",
            JpegLibVersion::V80 => "80",
        }
    }
}

impl fmt::Display for JpegLibVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean feature switch with an explicit textual grammar.
///
/// The accepted forms are `1`/`true`/`on`/`yes` (enabled) and
/// `0`/`false`/`off`/`no`/empty (disabled). Anything else is rejected at
/// argument-parsing time, before any file I/O happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Toggle(bool);

impl Toggle {
    pub const ON: Toggle = Toggle(true);
    pub const OFF: Toggle = Toggle(false);

    pub fn is_enabled(self) -> bool {
        self.0
    }
}

impl From<bool> for Toggle {
    fn from(enabled: bool) -> Self {
        Toggle(enabled)
    }
}

impl FromStr for Toggle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "true" | "on" | "yes" => Ok(Toggle::ON),
            "" | "0" | "false" | "off" | "no" => Ok(Toggle::OFF),
            other => Err(format!(
                "unrecognized toggle value '{}' (expected 1/true/on/yes or 0/false/off/no)",
                other
            )),
        }
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "1" } else { "0" })
    }
}

/// Immutable snapshot of all recognized options for one materialization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRequest {
    pub project: String,
    pub version: String,
    pub jpeg_lib_version: JpegLibVersion,
    pub arith_enc: Toggle,
    pub arith_dec: Toggle,
    pub mem_srcdst: Toggle,
}

/// The two templates the materializer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    JpegConfig,
    BuildConfig,
}

impl TemplateKind {
    /// Materialization order matches the original build script: jconfig.h
    /// first, then config.h.
    pub const ALL: [TemplateKind; 2] = [TemplateKind::JpegConfig, TemplateKind::BuildConfig];

    pub fn template_name(&self) -> &'static str {
        match self {
            TemplateKind::JpegConfig => "jconfig.h.in",
            TemplateKind::BuildConfig => "config.h.in",
        }
    }

    pub fn output_name(&self) -> &'static str {
        match self {
            TemplateKind::JpegConfig => "jconfig.h",
            TemplateKind::BuildConfig => "config.h",
        }
    }
}

/// Raw template text, held only between extract and transform.
#[derive(Debug, Clone)]
pub struct TemplateDocument {
    pub kind: TemplateKind,
    pub content: String,
}

/// A fully substituted header, ready to be written out.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct RenderResult {
    pub documents: Vec<RenderedDocument>,
}
