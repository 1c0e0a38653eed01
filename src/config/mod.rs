pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{JpegLibVersion, Toggle};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "jconfgen")]
#[command(about = "Materializes jconfig.h/config.h build headers from templates")]
pub struct CliConfig {
    /// Project name embedded in config.h
    #[arg(long, default_value = "libmozjpeg")]
    pub project: String,

    /// Project version embedded in both headers
    #[arg(long, default_value = "1.0.1")]
    pub version: String,

    /// libjpeg API/ABI emulation level
    #[arg(long, value_enum, default_value = "62")]
    pub jpeg_lib_version: JpegLibVersion,

    /// Arithmetic encoding support
    #[arg(long, default_value = "1")]
    pub arith_enc: Toggle,

    /// Arithmetic decoding support
    #[arg(long, default_value = "1")]
    pub arith_dec: Toggle,

    /// In-memory source/destination manager functions when emulating the
    /// libjpeg v6b or v7 API/ABI
    #[arg(long, default_value = "1")]
    pub mem_srcdst: Toggle,

    /// Directory holding jconfig.h.in and config.h.in
    #[arg(long, default_value = "win")]
    pub template_dir: String,

    /// Directory the rendered headers are written to
    #[arg(long, default_value = ".")]
    pub output_dir: String,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn project(&self) -> &str {
        &self.project
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn jpeg_lib_version(&self) -> JpegLibVersion {
        self.jpeg_lib_version
    }

    fn arith_enc(&self) -> Toggle {
        self.arith_enc
    }

    fn arith_dec(&self) -> Toggle {
        self.arith_dec
    }

    fn mem_srcdst(&self) -> Toggle {
        self.mem_srcdst
    }

    fn template_dir(&self) -> &str {
        &self.template_dir
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("template_dir", &self.template_dir)?;
        validate_path("output_dir", &self.output_dir)?;
        Ok(())
    }
}
