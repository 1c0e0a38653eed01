use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ConfGenEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConfGenEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<Vec<String>> {
        tracing::info!("Reading templates...");
        let templates = self.pipeline.extract()?;
        tracing::info!("Read {} templates", templates.len());

        tracing::info!("Rendering headers...");
        let rendered = self.pipeline.transform(templates)?;
        tracing::info!("Rendered {} documents", rendered.documents.len());

        tracing::info!("Writing outputs...");
        let written = self.pipeline.load(rendered)?;
        for path in &written {
            tracing::info!("Wrote {}", path);
        }

        Ok(written)
    }
}
