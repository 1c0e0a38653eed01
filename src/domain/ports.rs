use crate::domain::model::{
    ConfigRequest, JpegLibVersion, RenderResult, TemplateDocument, Toggle,
};
use crate::utils::error::Result;

/// Filesystem seam. Returns raw `io::Result` so the pipeline can classify
/// failures (missing template vs. unwritable output) itself.
pub trait Storage {
    fn read_file(&self, path: &str) -> std::io::Result<String>;
    fn write_file(&self, path: &str, contents: &str) -> std::io::Result<()>;
}

pub trait ConfigProvider {
    fn project(&self) -> &str;
    fn version(&self) -> &str;
    fn jpeg_lib_version(&self) -> JpegLibVersion;
    fn arith_enc(&self) -> Toggle;
    fn arith_dec(&self) -> Toggle;
    fn mem_srcdst(&self) -> Toggle;
    fn template_dir(&self) -> &str;
    fn output_dir(&self) -> &str;

    fn to_request(&self) -> ConfigRequest {
        ConfigRequest {
            project: self.project().to_string(),
            version: self.version().to_string(),
            jpeg_lib_version: self.jpeg_lib_version(),
            arith_enc: self.arith_enc(),
            arith_dec: self.arith_dec(),
            mem_srcdst: self.mem_srcdst(),
        }
    }
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<TemplateDocument>>;
    fn transform(&self, templates: Vec<TemplateDocument>) -> Result<RenderResult>;
    fn load(&self, result: RenderResult) -> Result<Vec<String>>;
}
