// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::too_many_arguments)]

use anyhow::{Result, anyhow, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::{Config, SubtitleFormat, TimestampPrecision};
use app_controller::Controller;

mod app_config;
mod transcript;
mod segmenter;
mod subtitle_builder;
mod file_utils;
mod app_controller;
mod language_utils;
mod errors;

/// CLI Wrapper for SubtitleFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliSubtitleFormat {
    Srt,
    Vtt,
}

impl From<CliSubtitleFormat> for SubtitleFormat {
    fn from(cli_format: CliSubtitleFormat) -> Self {
        match cli_format {
            CliSubtitleFormat::Srt => SubtitleFormat::Srt,
            CliSubtitleFormat::Vtt => SubtitleFormat::Vtt,
        }
    }
}

/// CLI Wrapper for the split-character presets offered by the original UI
#[derive(Debug, Clone, ValueEnum)]
enum CliSplitPreset {
    /// No forced splits
    None,
    /// Split after . ! ?
    Punctuation,
}

impl CliSplitPreset {
    fn split_chars(&self) -> Vec<String> {
        match self {
            CliSplitPreset::None => Vec::new(),
            CliSplitPreset::Punctuation => {
                vec![".".to_string(), "!".to_string(), "?".to_string()]
            }
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert word-level transcripts to subtitle files (default command)
    #[command(alias = "convert")]
    Convert(ConvertArgs),

    /// Generate shell completions for subit
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input transcript JSON file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Language code of the transcript (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    language: Option<String>,

    /// Maximum words per sentence (1-20)
    #[arg(short, long)]
    max_sentence_length: Option<usize>,

    /// Maximum sentence duration in seconds (1-20)
    #[arg(short = 't', long)]
    max_sentence_time: Option<f64>,

    /// Shift applied to every cue timestamp in seconds (-5 to 5)
    #[arg(short = 'T', long, allow_hyphen_values = true)]
    time_offset: Option<f64>,

    /// Split-character preset
    #[arg(long, value_enum, conflicts_with = "split_chars")]
    split_preset: Option<CliSplitPreset>,

    /// Custom space-separated split characters (e.g., '. ! ?')
    #[arg(long, value_name = "CHARS")]
    split_chars: Option<String>,

    /// Output container format
    #[arg(long, value_enum)]
    format: Option<CliSubtitleFormat>,

    /// Reproduce legacy whole-second timestamps (,000 millisecond field)
    #[arg(long)]
    legacy_timestamps: bool,

    /// Output directory (defaults to the input file's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Sub-it - word-level transcripts to subtitle files
///
/// Groups the timestamped words of a speech-to-text transcript into
/// sentence-sized cues and writes them as a numbered subtitle document.
#[derive(Parser, Debug)]
#[command(name = "subit")]
#[command(author = "Sub-it Team")]
#[command(version = "1.0.0")]
#[command(about = "Word-level transcript to subtitle converter")]
#[command(long_about = "subit converts word-level speech-to-text transcripts into subtitle files.

EXAMPLES:
    subit transcript.json                       # Convert using default config
    subit -f transcript.json                    # Force overwrite existing files
    subit -m 8 -t 6.5 transcript.json           # Custom sentence length and duration
    subit -T -0.5 transcript.json               # Shift every cue half a second back
    subit --split-preset none transcript.json   # Disable forced splits
    subit --split-chars '. ! ? ;' transcript.json  # Custom split characters
    subit --format vtt transcript.json          # Emit WebVTT instead of SRT
    subit /transcripts/                         # Process an entire directory
    subit completions bash > subit.bash         # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.

INPUT:
    The input is the speech-to-text collaborator's verbose JSON response with
    word-level timestamps (a 'words' array of {word, start, end} objects).")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input transcript JSON file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Language code of the transcript (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    language: Option<String>,

    /// Maximum words per sentence (1-20)
    #[arg(short, long)]
    max_sentence_length: Option<usize>,

    /// Maximum sentence duration in seconds (1-20)
    #[arg(short = 't', long)]
    max_sentence_time: Option<f64>,

    /// Shift applied to every cue timestamp in seconds (-5 to 5)
    #[arg(short = 'T', long, allow_hyphen_values = true)]
    time_offset: Option<f64>,

    /// Split-character preset
    #[arg(long, value_enum, conflicts_with = "split_chars")]
    split_preset: Option<CliSplitPreset>,

    /// Custom space-separated split characters (e.g., '. ! ?')
    #[arg(long, value_name = "CHARS")]
    split_chars: Option<String>,

    /// Output container format
    #[arg(long, value_enum)]
    format: Option<CliSubtitleFormat>,

    /// Reproduce legacy whole-second timestamps (,000 millisecond field)
    #[arg(long)]
    legacy_timestamps: bool,

    /// Output directory (defaults to the input file's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subit", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Convert(args)) => run_convert(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            let convert_args = ConvertArgs {
                input_path,
                force_overwrite: cli.force_overwrite,
                language: cli.language,
                max_sentence_length: cli.max_sentence_length,
                max_sentence_time: cli.max_sentence_time,
                time_offset: cli.time_offset,
                split_preset: cli.split_preset,
                split_chars: cli.split_chars,
                format: cli.format,
                legacy_timestamps: cli.legacy_timestamps,
                output_dir: cli.output_dir,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_convert(convert_args)
        }
    }
}

fn run_convert(options: ConvertArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(language) = &options.language {
        config.language = language.clone();
    }

    if let Some(max_sentence_length) = options.max_sentence_length {
        config.max_sentence_length = max_sentence_length;
    }

    if let Some(max_sentence_time) = options.max_sentence_time {
        config.max_sentence_time = max_sentence_time;
    }

    if let Some(time_offset) = options.time_offset {
        config.time_offset = time_offset;
    }

    if let Some(preset) = &options.split_preset {
        config.split_chars = preset.split_chars();
    }

    if let Some(chars) = &options.split_chars {
        config.split_chars = chars.split_whitespace().map(|s| s.to_string()).collect();
    }

    if let Some(format) = &options.format {
        config.format = format.clone().into();
    }

    if options.legacy_timestamps {
        config.timestamp_precision = TimestampPrecision::Seconds;
    }

    // Update log level in config if specified via command line
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create controller; this validates the configuration after overrides
    let controller = Controller::with_config(config)?;

    // Run the controller with the input file(s) and output directory
    if options.input_path.is_file() {
        // Process a single file
        let output_dir = options.output_dir.clone().unwrap_or_else(|| {
            options
                .input_path
                .parent()
                .unwrap_or(Path::new("."))
                .to_path_buf()
        });
        controller.run(options.input_path.clone(), output_dir, options.force_overwrite)?;
    } else if options.input_path.is_dir() {
        // Process a directory
        controller.run_folder(options.input_path.clone(), options.force_overwrite)?;
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    Ok(())
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
