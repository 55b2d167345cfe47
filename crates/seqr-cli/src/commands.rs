use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use seqr_ingest::{ParserOptions, TemplateFileParser, TemplateSource, is_supported_path};
use seqr_model::ParseResult;
use seqr_standards::TemplateKind;

/// Parser options from command-line values; the size limit falls back to
/// `SEQR_TEMPLATE_MAX_BYTES` and then the built-in default.
pub fn parser_options(max_bytes: Option<u64>, allow_duplicates: bool) -> ParserOptions {
    let options = match max_bytes {
        Some(limit) => ParserOptions::default().with_max_file_size(limit),
        None => ParserOptions::from_env(),
    };
    options.with_enforce_unique(!allow_duplicates)
}

/// Read and validate `path` on a dedicated runtime.
pub fn run_validate(kind: TemplateKind, path: &Path, options: ParserOptions) -> Result<ParseResult> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start runtime")?;
    runtime.block_on(validate_file(kind, path, options))
}

/// Validate `path` as `kind` without blocking the caller's runtime.
pub async fn validate_file(
    kind: TemplateKind,
    path: &Path,
    options: ParserOptions,
) -> Result<ParseResult> {
    let parser = TemplateFileParser::for_kind(kind, options);
    if !is_supported_path(path) {
        return parser
            .parse_path(path)
            .with_context(|| format!("parse template: {}", path.display()));
    }
    let source = TemplateSource::from_path_with_limit(path, options.max_file_size)
        .with_context(|| format!("read template: {}", path.display()))?;
    let result = parser
        .parse_async(source)
        .await
        .with_context(|| format!("parse template: {}", path.display()))?;
    info!(
        template = %kind,
        rows = result.rows.len(),
        invalid = result.invalid_row_count(),
        valid = result.valid,
        "template checked"
    );
    Ok(result)
}

pub fn render_json(result: &ParseResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("serialize result")
}
