//! Render command executor

use std::io::Write;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::CommandExecutor;
use crate::cli::GraphFormat;
use crate::config::RenderConfig;
use crate::error::TortoiseHareError;
use crate::graph::{PathRenderer, to_digraph};
use crate::path::PathStore;

pub struct RenderExecutor;

impl RenderExecutor {
    /// Render the configured path into an in-memory buffer
    pub fn render(config: &RenderConfig) -> Result<Vec<u8>> {
        let path = PathStore::from_shape(config.shape);
        let graph = to_digraph(&path);
        let renderer = PathRenderer::new(config.highlight_cycle);

        let mut output = Vec::new();
        let rendered = match config.format {
            GraphFormat::Ascii => renderer.render_ascii(&graph, &mut output),
            GraphFormat::Mermaid => renderer.render_mermaid(&graph, &mut output),
            GraphFormat::Dot => renderer.render_dot(&graph, &mut output),
        };
        rendered.wrap_err("Failed to render path")?;

        Ok(output)
    }
}

impl CommandExecutor for RenderExecutor {
    type Config = RenderConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Rendering path ({})...",
            style("🎨").cyan(),
            style(config.shape).dim()
        );

        let output = Self::render(&config)?;

        match &config.output {
            Some(path) => {
                std::fs::write(path, &output).map_err(|source| {
                    TortoiseHareError::FileWriteError {
                        path: path.clone(),
                        source,
                    }
                })?;
                eprintln!(
                    "{} Diagram written to {}",
                    style("✓").green(),
                    style(path.display()).bold()
                );
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(&output)
                    .into_diagnostic()
                    .wrap_err("Failed to write diagram to stdout")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;
    use crate::path::PathShape;

    fn config(format: GraphFormat, output: Option<std::path::PathBuf>) -> RenderConfig {
        RenderConfig::builder()
            .with_shape(PathShape::new(1, 2))
            .with_format(format)
            .with_output(output)
            .with_highlight_cycle(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_render_each_format() {
        let ascii = RenderExecutor::render(&config(GraphFormat::Ascii, None)).unwrap();
        let mermaid = RenderExecutor::render(&config(GraphFormat::Mermaid, None)).unwrap();
        let dot = RenderExecutor::render(&config(GraphFormat::Dot, None)).unwrap();

        assert!(String::from_utf8(ascii).unwrap().contains("CYCLE ENTRY"));
        assert!(String::from_utf8(mermaid).unwrap().starts_with("flowchart LR"));
        assert!(String::from_utf8(dot).unwrap().starts_with("digraph path"));
    }

    #[test]
    fn test_execute_writes_output_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("path.dot");

        RenderExecutor::execute(config(GraphFormat::Dot, Some(file.clone()))).unwrap();

        let written = std::fs::read_to_string(file).unwrap();
        assert!(written.contains(r#""n2" -> "n1""#));
    }

    #[test]
    fn test_execute_reports_unwritable_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("missing").join("path.dot");

        let error = RenderExecutor::execute(config(GraphFormat::Dot, Some(file))).unwrap_err();
        assert!(error.to_string().starts_with("Failed to write file"));
    }
}
