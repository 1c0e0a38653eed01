use crate::core::render;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{RenderResult, RenderedDocument, TemplateDocument, TemplateKind};
use crate::utils::error::{ConfGenError, Result};
use std::path::Path;

/// Materializes the two build headers from their templates. Both templates
/// are read before either output is written, so a missing template never
/// leaves a half-finished run behind. Writes themselves are not
/// transactional: if the second write fails, the first output stays as
/// written.
pub struct HeaderPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    build_stamp: String,
}

impl<S: Storage, C: ConfigProvider> HeaderPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            build_stamp: render::today_stamp(),
        }
    }

    /// Pins the build stamp instead of using today's date. The stamp is the
    /// only volatile output field, so pinning it makes runs reproducible.
    pub fn with_build_stamp(mut self, stamp: impl Into<String>) -> Self {
        self.build_stamp = stamp.into();
        self
    }

    fn template_path(&self, kind: TemplateKind) -> String {
        Path::new(self.config.template_dir())
            .join(kind.template_name())
            .display()
            .to_string()
    }

    fn output_path(&self, file_name: &str) -> String {
        Path::new(self.config.output_dir())
            .join(file_name)
            .display()
            .to_string()
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for HeaderPipeline<S, C> {
    fn extract(&self) -> Result<Vec<TemplateDocument>> {
        let mut templates = Vec::with_capacity(TemplateKind::ALL.len());

        for kind in TemplateKind::ALL {
            let path = self.template_path(kind);
            tracing::debug!("Reading template: {}", path);

            let content = self
                .storage
                .read_file(&path)
                .map_err(|source| ConfGenError::MissingTemplate { path, source })?;

            templates.push(TemplateDocument { kind, content });
        }

        Ok(templates)
    }

    fn transform(&self, templates: Vec<TemplateDocument>) -> Result<RenderResult> {
        let request = self.config.to_request();
        tracing::debug!(
            "Rendering with version={} lib_version={} build={}",
            request.version,
            request.jpeg_lib_version,
            self.build_stamp
        );

        let documents = templates
            .into_iter()
            .map(|template| {
                let content = match template.kind {
                    TemplateKind::JpegConfig => {
                        render::render_jpeg_config(&template.content, &request)
                    }
                    TemplateKind::BuildConfig => {
                        render::render_build_config(&template.content, &request, &self.build_stamp)
                    }
                };
                RenderedDocument {
                    file_name: template.kind.output_name().to_string(),
                    content,
                }
            })
            .collect();

        Ok(RenderResult { documents })
    }

    fn load(&self, result: RenderResult) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(result.documents.len());

        for document in &result.documents {
            let path = self.output_path(&document.file_name);
            tracing::debug!("Writing {} ({} bytes)", path, document.content.len());

            self.storage
                .write_file(&path, &document.content)
                .map_err(|source| ConfGenError::UnwritableOutput {
                    path: path.clone(),
                    source,
                })?;

            written.push(path);
        }

        Ok(written)
    }
}
