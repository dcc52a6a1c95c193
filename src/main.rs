//! Transcript Stepper - Entry Point

use clap::builder::PossibleValuesParser;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};
use transcript_stepper::config::{self, CliOverrides, ConfigError, ResolvedConfig};
use transcript_stepper::model::AppError;
use transcript_stepper::source::TranscriptSource;
use transcript_stepper::view::highlight::{is_valid_theme, VALID_THEMES};
use transcript_stepper::view::{export_turns, HtmlPage, Stepper, StepperOptions, SyntaxHighlighter};

/// Transcript Stepper - step through a JSONL chat transcript one turn at a time
#[derive(Parser, Debug)]
#[command(name = "transcript-stepper")]
#[command(version)]
#[command(about = "Render a JSONL chat transcript as turn-by-turn HTML pages")]
pub struct Args {
    /// Transcript location: file path, http(s) URL, or `-` for stdin
    pub source: Option<String>,

    /// Write one page per turn plus index.html into this directory
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Turn to print when writing to stdout (must be positive)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub turn: u32,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,

    /// Page shell template containing `{{stepper}}`
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Color theme for syntax highlighting
    #[arg(long, value_parser = PossibleValuesParser::new(VALID_THEMES.iter().copied()))]
    pub theme: Option<String>,

    /// Disable syntax highlighting of code blocks
    #[arg(long)]
    pub no_highlight: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            transcript_path: self.source.clone(),
            page_title: self.title.clone(),
            template_path: self.template.clone(),
            theme: self.theme.clone(),
            highlight: self.no_highlight.then_some(false),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(with_env, args.cli_overrides())
    };

    transcript_stepper::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let page = build_page(&config)?;
    let Some(mut stepper) = Stepper::mount(page, stepper_options(&config)) else {
        return Ok(());
    };

    let source = TranscriptSource::detect(&config.transcript_path);
    let loaded = stepper.load(&source);

    match &args.out_dir {
        Some(out_dir) => {
            export_turns(&mut stepper, out_dir)?;
        }
        None => {
            let index = (args.turn - 1) as usize;
            if index > 0 && !stepper.select(index) {
                warn!(
                    turn = args.turn,
                    turns = stepper.state().turn_count(),
                    "Requested turn out of range, showing first turn"
                );
            }
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(stepper.surface().to_html().as_bytes())?;
            stdout.flush()?;
        }
    }

    // The error page has been produced; still report the failure.
    loaded?;
    Ok(())
}

/// Page from the configured template, or the built-in shell.
fn build_page(config: &ResolvedConfig) -> Result<HtmlPage, ConfigError> {
    match &config.template_path {
        Some(path) => {
            let shell = read_template(path)?;
            Ok(HtmlPage::with_shell(shell, config.page_title.clone()))
        }
        None => Ok(HtmlPage::new(config.page_title.clone())),
    }
}

fn read_template(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn stepper_options(config: &ResolvedConfig) -> StepperOptions {
    if config.highlight && !is_valid_theme(&config.theme) {
        warn!(theme = %config.theme, "Unknown theme, using default");
    }

    StepperOptions {
        scroll_offset: config.scroll_offset,
        fetch_timeout: config.fetch_timeout,
        highlighter: config.highlight.then(|| SyntaxHighlighter::new(&config.theme)),
    }
}
