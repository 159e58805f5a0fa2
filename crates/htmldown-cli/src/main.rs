//! Batch HTML to Markdown conversion from the command line.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use glob::glob;
use htmldown::MarkdownConverter;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "htmldown",
    version,
    about = "Convert HTML file(s) to Markdown",
    after_help = "Examples:\n  \
        htmldown input.html -o output.md\n  \
        htmldown \"docs/*.html\" -o output_md/\n  \
        htmldown index.html --log-level debug\n  \
        cat page.html | htmldown -"
)]
struct Cli {
    /// Input HTML file path or glob pattern (quote patterns containing
    /// wildcards). Use '-' to read HTML from standard input.
    input_pattern: String,

    /// Output file or directory. A directory receives one .md file per
    /// input; with multiple inputs the output is always treated as a
    /// directory. When omitted, .md files are created alongside the inputs
    /// (stdin input prints to stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Logging verbosity.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

/// Where converted files are written.
enum OutputTarget {
    /// Single input, explicit output file path.
    File(PathBuf),
    /// One `<stem>.md` per input inside this directory.
    Directory(PathBuf),
    /// `<stem>.md` next to each input.
    Alongside,
}

impl OutputTarget {
    fn resolve(output: Option<&Path>, input_count: usize) -> Result<Self> {
        let Some(output) = output else {
            return Ok(OutputTarget::Alongside);
        };

        let looks_like_dir = output.is_dir()
            || output
                .to_string_lossy()
                .ends_with(std::path::MAIN_SEPARATOR);

        if looks_like_dir || input_count > 1 {
            if !looks_like_dir {
                warn!(
                    output = %output.display(),
                    "multiple input files; treating output as a directory"
                );
            }
            fs::create_dir_all(output)
                .with_context(|| format!("failed to create output directory {}", output.display()))?;
            return Ok(OutputTarget::Directory(output.to_path_buf()));
        }

        Ok(OutputTarget::File(output.to_path_buf()))
    }

    fn output_for(&self, input: &Path) -> PathBuf {
        match self {
            OutputTarget::File(path) => path.clone(),
            OutputTarget::Directory(dir) => dir.join(markdown_file_name(input)),
            OutputTarget::Alongside => input.with_extension("md"),
        }
    }
}

/// `<stem>.md` for any input extension (.html, .htm, .xhtml, ...).
fn markdown_file_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    PathBuf::from(stem).with_extension("md")
}

fn convert_file(converter: &MarkdownConverter, input: &Path, output: &Path) -> Result<()> {
    info!(input = %input.display(), "converting");

    let html = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let markdown = converter
        .convert_html(&html)
        .with_context(|| format!("failed to convert {}", input.display()))?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(output, markdown)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(output = %output.display(), "wrote markdown");
    Ok(())
}

/// Convert HTML read from standard input, writing to `output` or stdout.
fn convert_stdin(converter: &MarkdownConverter, output: Option<&Path>) -> Result<()> {
    let mut html = String::new();
    std::io::stdin()
        .read_to_string(&mut html)
        .context("failed to read HTML from stdin")?;
    let markdown = converter
        .convert_html(&html)
        .context("failed to convert stdin input")?;

    match output {
        Some(path) => {
            fs::write(path, markdown)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(output = %path.display(), "wrote markdown");
        }
        None => print!("{markdown}"),
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    if cli.input_pattern == "-" {
        let converter = MarkdownConverter::new();
        return convert_stdin(&converter, cli.output.as_deref());
    }

    let inputs: Vec<PathBuf> = glob(&cli.input_pattern)
        .with_context(|| format!("invalid glob pattern: {}", cli.input_pattern))?
        .collect::<std::result::Result<_, _>>()
        .context("failed to read a path matching the pattern")?;

    if inputs.is_empty() {
        bail!("no files found matching pattern: {}", cli.input_pattern);
    }
    info!(count = inputs.len(), "found input file(s)");

    let target = OutputTarget::resolve(cli.output.as_deref(), inputs.len())?;
    let converter = MarkdownConverter::new();

    let mut failures = 0usize;
    for input in &inputs {
        let output = target.output_for(input);
        if paths_collide(input, &output) {
            error!(
                input = %input.display(),
                "input and output paths are the same, skipping"
            );
            failures += 1;
            continue;
        }
        if let Err(err) = convert_file(&converter, input, &output) {
            error!(input = %input.display(), "{err:#}");
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} of {} file(s) failed", inputs.len());
    }
    Ok(())
}

fn paths_collide(input: &Path, output: &Path) -> bool {
    let absolute = |p: &Path| fs::canonicalize(p).unwrap_or_else(|_| p.to_path_buf());
    absolute(input) == absolute(output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_level.as_directive()))
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
