//! Extract highlighted text from a decoded PDF page dump.
//!
//! Reads a JSON page dump (`{"pages": [{"annotations": [...], "items": [...]}]}`)
//! written by an external PDF decoder and prints the text under every
//! highlight annotation.
//!
//! Usage:
//!   cargo run --release --bin extract_highlights -- dump.json
//!   cargo run --release --bin extract_highlights -- dump.json --format json --output out.json
//!
//! Options:
//!   --format text|clipboard|paginated|json   Output format (default: text)
//!   --output PATH                            Write to PATH instead of stdout
//!   --name NAME                              Document name shown in titles
//!   --skip-bad-pages                         Continue past unreadable pages
//!   --fallback TEXT                          Text for unreadable highlights
//!   --wrap N                                 Wrap width for paginated output
//!   --verbose, -v                            Print the summary line to stderr

use pdf_highlights::converters::{
    ClipboardConverter, HighlightConverter, LayoutConfig, PaginatedLayout, PlainTextConverter,
    TextExportConfig,
};
use pdf_highlights::{
    DocumentLoader, ExtractionConfig, ExtractionResult, HighlightPipeline, JsonDocumentLoader,
    PageErrorPolicy,
};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Clipboard,
    Paginated,
    Json,
}

impl OutputFormat {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "clipboard" => Some(Self::Clipboard),
            "paginated" => Some(Self::Paginated),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

struct CliConfig {
    input: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
    document_name: String,
    extraction: ExtractionConfig,
    wrap_width: Option<usize>,
    verbose: bool,
}

impl CliConfig {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut input = None;
        let mut output = None;
        let mut format = OutputFormat::Text;
        let mut document_name = None;
        let mut extraction = ExtractionConfig::default();
        let mut wrap_width = None;
        let mut verbose = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--format" => {
                    i += 1;
                    let value = args.get(i).ok_or("--format needs a value")?;
                    format = OutputFormat::parse(value)
                        .ok_or_else(|| format!("unknown format '{}'", value))?;
                },
                "--output" => {
                    i += 1;
                    output = Some(PathBuf::from(args.get(i).ok_or("--output needs a path")?));
                },
                "--name" => {
                    i += 1;
                    document_name = Some(args.get(i).ok_or("--name needs a value")?.clone());
                },
                "--skip-bad-pages" => {
                    extraction = extraction.with_page_error_policy(PageErrorPolicy::SkipPage);
                },
                "--fallback" => {
                    i += 1;
                    let text = args.get(i).ok_or("--fallback needs a value")?;
                    extraction = extraction.with_fallback_text(text.as_str());
                },
                "--wrap" => {
                    i += 1;
                    let value = args.get(i).ok_or("--wrap needs a value")?;
                    wrap_width = Some(
                        value
                            .parse()
                            .map_err(|_| format!("invalid wrap width '{}'", value))?,
                    );
                },
                "--verbose" | "-v" => verbose = true,
                other if other.starts_with('-') => return Err(format!("unknown option '{}'", other)),
                other => input = Some(PathBuf::from(other)),
            }
            i += 1;
        }

        let input = input.ok_or("missing input page dump")?;
        let document_name = document_name.unwrap_or_else(|| {
            input
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        Ok(Self {
            input,
            output,
            format,
            document_name,
            extraction,
            wrap_width,
            verbose,
        })
    }
}

fn render(config: &CliConfig, result: &ExtractionResult) -> Result<String, serde_json::Error> {
    let rendered = match config.format {
        OutputFormat::Text => {
            PlainTextConverter::new(TextExportConfig::new(&config.document_name)).convert(result)
        },
        OutputFormat::Clipboard => ClipboardConverter::new().convert(result),
        OutputFormat::Paginated => {
            let mut layout = LayoutConfig::default();
            if let Some(width) = config.wrap_width {
                layout = layout.with_wrap_width(width);
            }
            PaginatedLayout::new(layout)
                .with_document_name(&config.document_name)
                .convert(result)
        },
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
    };
    Ok(rendered)
}

fn run(config: &CliConfig) -> pdf_highlights::Result<()> {
    let mut source = JsonDocumentLoader::new().open(&config.input)?;
    let result = HighlightPipeline::with_config(config.extraction.clone()).extract(&mut source)?;

    if config.verbose {
        eprintln!("{}", result.summary.message());
    }

    let rendered = render(config, &result)?;
    match &config.output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{}", rendered),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match CliConfig::from_args() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Usage: extract_highlights <dump.json> [--format text|clipboard|paginated|json] [--output PATH]");
            return ExitCode::from(2);
        },
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}: {}", config.input.display(), e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        },
    }
}
