//! Archboard CLI library
//!
//! This module contains the core CLI logic for the Archboard dashboard tool:
//! reading a data bundle, building the diagram and writing it to disk.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io::Write, path::Path};

use log::{info, warn};
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use archboard::{ArchboardError, Assembler, BuildReport, DataBundle};

/// Run the Archboard CLI application
///
/// This function reads the input bundle, assembles it with the selected
/// template and writes the resulting draw.io document to the output file.
///
/// The template is taken from the command line, else from the bundle, else
/// from the configured default.
///
/// # Errors
///
/// Returns `ArchboardError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Bundle parsing errors
/// - Template errors
/// - Layout errors
pub fn run(args: &Args) -> Result<(), ArchboardError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing bundle"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    let bundle: DataBundle = parse_toml("bundle", source)?;

    let assembler = Assembler::new(app_config);
    let template = args
        .template
        .as_deref()
        .unwrap_or_else(|| assembler.template_name_for(&bundle));
    let build = assembler.build(template, &bundle)?;
    let xml = build.to_xml()?;

    summarize(build.report());
    write_atomically(Path::new(&args.output), &xml)?;

    info!(output_file = args.output; "Diagram exported successfully");

    Ok(())
}

/// Deserializes a TOML document, keeping the source for error reporting.
pub(crate) fn parse_toml<T: DeserializeOwned>(
    what: &'static str,
    source: String,
) -> Result<T, ArchboardError> {
    toml::from_str(&source)
        .map_err(|err| ArchboardError::new_parse_error(what, err.message(), err.span(), source))
}

/// Surfaces the non-fatal findings of a build.
fn summarize(report: &BuildReport) {
    for dropped in report.dropped_connections() {
        warn!(
            interface = dropped.interface.as_str(),
            missing:? = dropped.missing;
            "Connection left out of the diagram"
        );
    }
    for (first, second) in report.overlaps() {
        warn!(first = first.name(), second = second.name(); "Template regions overlap");
    }
    for overflow in report.grid_overflows() {
        warn!(
            panel = overflow.panel.name(),
            group = overflow.group.as_str(),
            children = overflow.children;
            "Content did not fit its panel"
        );
    }
    info!(
        template = report.template(),
        panels = report.panels().len(),
        clean = report.is_clean();
        "Build finished"
    );
}

/// Writes through a temporary file in the destination directory so that a
/// failure never leaves a partial document behind.
fn write_atomically(path: &Path, contents: &str) -> Result<(), ArchboardError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn args_for(input: &Path, output: &Path) -> Args {
        Args {
            input: input.to_string_lossy().to_string(),
            output: output.to_string_lossy().to_string(),
            template: None,
            config: None,
            log_level: "off".to_string(),
        }
    }

    #[test]
    fn test_run_writes_document() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bundle.toml");
        let output = dir.path().join("out.drawio");
        fs::write(
            &input,
            r#"
            [summary]
            id = "ABB-1"
            name = "Checkout"

            [[components]]
            id = "web"
            layer = "application"
            "#,
        )
        .unwrap();

        run(&args_for(&input, &output)).unwrap();

        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.starts_with("<mxfile"));
        assert!(xml.contains("ABB-1: Checkout"));
    }

    #[test]
    fn test_failed_build_leaves_no_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bundle.toml");
        let output = dir.path().join("out.drawio");
        fs::write(&input, "template = \"poster\"\n").unwrap();

        let result = run(&args_for(&input, &output));

        assert!(matches!(result, Err(ArchboardError::Template(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_template_flag_overrides_bundle() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bundle.toml");
        let output = dir.path().join("out.drawio");
        fs::write(&input, "template = \"poster\"\n").unwrap();

        let mut args = args_for(&input, &output);
        args.template = Some("business".to_string());

        run(&args).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_bundle_parse_error_has_span() {
        let source = "[summary]\nname = \n".to_string();
        let result: Result<DataBundle, _> = parse_toml("bundle", source);
        match result {
            Err(ArchboardError::Parse { what, span, .. }) => {
                assert_eq!(what, "bundle");
                assert!(span.is_some());
            }
            other => panic!("Expected parse error, got {other:?}"),
        }
    }
}
