pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::ConfGenEngine, pipeline::HeaderPipeline};
pub use domain::model::{ConfigRequest, JpegLibVersion, Toggle};
pub use utils::error::{ConfGenError, Result};
