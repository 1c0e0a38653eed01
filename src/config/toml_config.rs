use crate::core::ConfigProvider;
use crate::domain::model::{JpegLibVersion, Toggle};
use crate::utils::error::{ConfGenError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A pinned build profile, so a CI job can check in the exact configure
/// invocation instead of spelling it out in flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub project: ProjectSection,
    pub jpeg: JpegSection,
    pub paths: Option<PathsSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JpegSection {
    pub lib_version: JpegLibVersion,
    pub arith_enc: Option<bool>,
    pub arith_dec: Option<bool>,
    pub mem_srcdst: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsSection {
    pub template_dir: Option<String>,
    pub output_dir: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConfGenError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ConfGenError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` references from the environment. Unset variables are
    /// left as-is so the TOML error points at the real culprit.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("paths.template_dir", self.template_dir())?;
        validate_path("paths.output_dir", self.output_dir())?;
        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl ConfigProvider for TomlConfig {
    fn project(&self) -> &str {
        &self.project.name
    }

    fn version(&self) -> &str {
        &self.project.version
    }

    fn jpeg_lib_version(&self) -> JpegLibVersion {
        self.jpeg.lib_version
    }

    fn arith_enc(&self) -> Toggle {
        Toggle::from(self.jpeg.arith_enc.unwrap_or(true))
    }

    fn arith_dec(&self) -> Toggle {
        Toggle::from(self.jpeg.arith_dec.unwrap_or(true))
    }

    fn mem_srcdst(&self) -> Toggle {
        Toggle::from(self.jpeg.mem_srcdst.unwrap_or(true))
    }

    fn template_dir(&self) -> &str {
        self.paths
            .as_ref()
            .and_then(|p| p.template_dir.as_deref())
            .unwrap_or("win")
    }

    fn output_dir(&self) -> &str {
        self.paths
            .as_ref()
            .and_then(|p| p.output_dir.as_deref())
            .unwrap_or(".")
    }
}
