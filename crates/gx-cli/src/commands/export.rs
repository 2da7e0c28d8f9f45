use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use gx_canvas::{CanvasApi, CanvasClient};
use gx_config::GradexConfig;
use gx_core::CourseId;
use gx_export::{CsvPayload, DEFAULT_FILE_NAME, ExportOptions, export_course};

use crate::cli::ExportArgs;
use crate::progress::Progress;
use crate::ui;

const CONTENT_NOTICE: &str = "Note: this export includes student emails and raw scores. \
It is not re-importable into Canvas.";

pub async fn handle(args: &ExportArgs, config: &GradexConfig) -> anyhow::Result<()> {
    let course = CourseId::parse(&args.course)?;
    let canvas = config.require_canvas()?;
    if !canvas.has_token() {
        tracing::warn!("no canvas.access_token configured; requests carry no credentials");
    }

    let client =
        CanvasClient::new(&canvas.user_agent)?.with_access_token(canvas.access_token.as_str());
    let api = CanvasApi::new(client, &canvas.base_url, canvas.per_page)?;
    let options = ExportOptions {
        include_ungraded: args.include_ungraded || config.export.include_ungraded,
    };

    if ui::prefs().notices {
        eprintln!("{CONTENT_NOTICE}");
    }

    let mut progress = Progress::bar("assignments");
    let payload = match export_course(&api, course, &options, &mut progress).await {
        Ok(payload) => {
            progress.finish_clear();
            payload
        }
        Err(error) => {
            progress.finish_err("export failed");
            return Err(error).with_context(|| format!("failed to export course {course}"));
        }
    };

    if args.stdout {
        return write_to(&mut std::io::stdout().lock(), &payload)
            .context("failed to write CSV to stdout");
    }

    let path = resolve_output_path(args.output.as_deref(), &config.export.output_dir);
    write_payload(&path, &payload).await?;

    if ui::prefs().notices {
        eprintln!(
            "Wrote {} students x {} assignments to {}",
            payload.student_rows,
            payload.assignment_columns,
            path.display()
        );
    }
    Ok(())
}

/// Explicit `--output` wins; otherwise the default file name inside the
/// configured output directory.
fn resolve_output_path(output: Option<&Path>, output_dir: &str) -> PathBuf {
    output.map_or_else(
        || Path::new(output_dir).join(DEFAULT_FILE_NAME),
        Path::to_path_buf,
    )
}

/// The same bytes a file export gets: BOM first, no trailing newline.
fn write_to<W: Write>(out: &mut W, payload: &CsvPayload) -> std::io::Result<()> {
    out.write_all(&payload.bytes())?;
    out.flush()
}

async fn write_payload(path: &Path, payload: &CsvPayload) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tokio::fs::write(path, payload.bytes())
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}
