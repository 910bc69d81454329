use crate::core::{loader, normalizer, reporter};
use crate::core::{ConfigProvider, DrawCandidate, Pipeline, Storage, TransformResult};
use crate::utils::error::{EtlError, Result};

pub struct DrawReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> DrawReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn read_template(&self) -> Result<String> {
        let path = self.config.template_path();
        let bytes = match self.storage.read_file(path) {
            Ok(bytes) => bytes,
            Err(EtlError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(EtlError::TemplateNotFound {
                    path: path.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
            message: format!("Template {} is not valid UTF-8: {}", path, e),
        })
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for DrawReportPipeline<S, C> {
    fn extract(&self) -> Result<Vec<DrawCandidate>> {
        Ok(loader::load_draws(&self.storage, &self.config))
    }

    fn transform(&self, data: Vec<DrawCandidate>) -> Result<TransformResult> {
        let result = normalizer::finalize(data);
        if result.discarded > 0 {
            tracing::info!(
                "Discarded {} records without complete ascending/draw numbers",
                result.discarded
            );
        }
        Ok(result)
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        // 模板不存在時不產生任何輸出
        let template = self.read_template()?;

        if result.processed_records.is_empty() {
            tracing::warn!("⚠️ No draw records, the report will show an empty table");
        }

        let json = reporter::render_json(&result.processed_records)?;

        let placeholder = self.config.placeholder();
        if !template.contains(placeholder) {
            tracing::warn!(
                "⚠️ Placeholder {} not found in {}, writing template unchanged",
                placeholder,
                self.config.template_path()
            );
        }

        let html =
            reporter::render_report(&template, placeholder, self.config.data_variable(), &json);

        tracing::debug!("Writing report ({} bytes)", html.len());
        self.storage
            .write_file(self.config.output_file(), html.as_bytes())?;

        Ok(format!(
            "{}/{}",
            self.config.data_dir().trim_end_matches('/'),
            self.config.output_file()
        ))
    }
}
