// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::Write;
use std::path::PathBuf;

use episode_translator::app_config::{self, Config, TranslationMode};
use episode_translator::{Controller, Glossary};

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
    /// Translate every chapter in the source directory (default command)
    Translate(TranslateArgs),

    /// Print the effective glossary as JSON
    Terms {
        /// Extra glossary file merged over the built-in tables
        #[arg(short, long)]
        glossary: Option<PathBuf>,
    },

    /// Generate shell completions for episode-translator
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct TranslateArgs {
    /// Directory containing the English chapter files
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Directory the translated chapters are written to
    #[arg(short, long)]
    target_dir: Option<PathBuf>,

    /// Configuration file path (JSON)
    #[arg(short, long = "config")]
    config_path: Option<PathBuf>,

    /// Extra glossary file merged over the built-in tables
    #[arg(short, long)]
    glossary: Option<PathBuf>,

    /// Copy text unchanged instead of substituting glossary terms
    #[arg(long)]
    passthrough: bool,

    /// Show a progress bar while translating
    #[arg(long)]
    progress: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// episode-translator - terminology-driven chapter translation
///
/// Reads markdown chapters from the source directory, substitutes known
/// cultivation terms and character names, and writes the result under the
/// same file names into the target directory.
#[derive(Parser, Debug)]
#[command(name = "episode-translator")]
#[command(version)]
#[command(about = "Terminology-driven English to Burmese chapter translation")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "episode-translator rewrites chapter files using a fixed terminology table.

EXAMPLES:
    episode-translator                                   # eng-episodes/0001-0100 -> burmese-episodes/0001-0100
    episode-translator -s eng/0101-0200 -t mm/0101-0200  # Other directories
    episode-translator -g extra-terms.json               # Merge an extra glossary
    episode-translator terms                             # Show the glossary
    episode-translator completions bash > et.bash        # Generate bash completions")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    translate: TranslateArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and label for a log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "❌"),
            Level::Warn => ("\x1B[1;33m", "🚧"),
            Level::Info => ("\x1B[1;32m", ""),
            Level::Debug => ("\x1B[1;36m", "🔍"),
            Level::Trace => ("\x1B[1;35m", "📋"),
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
            let (colour, label) = Self::style_for_level(record.level());
            let _ = writeln!(std::io::stderr(), "{}{} {} {}\x1B[0m", colour, now, label, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Info until the config says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "episode-translator", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Terms { glossary }) => print_terms(glossary),
        Some(Commands::Translate(args)) => run_translate(args),
        None => run_translate(cli.translate),
    }
}

fn run_translate(options: TranslateArgs) -> Result<()> {
    let mut config = match &options.config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    // Command line wins over the config file
    if let Some(source_dir) = options.source_dir {
        config.source_dir = source_dir;
    }
    if let Some(target_dir) = options.target_dir {
        config.target_dir = target_dir;
    }
    if let Some(glossary) = options.glossary {
        config.translation.glossary_path = Some(glossary);
    }
    if options.passthrough {
        config.translation.mode = TranslationMode::Passthrough;
    }
    if options.progress {
        config.show_progress = true;
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }

    log::set_max_level(config.log_level.to_level_filter());
    debug!("Effective configuration: {:?}", config);

    let controller = Controller::with_config(config)?;
    controller.run()?;

    Ok(())
}

fn print_terms(glossary_path: Option<PathBuf>) -> Result<()> {
    let config = Config {
        translation: app_config::TranslationConfig {
            glossary_path,
            ..Default::default()
        },
        ..Config::default()
    };

    let glossary: Glossary = Controller::effective_glossary(&config)?;
    let json = serde_json::to_string_pretty(&glossary)?;
    println!("{}", json);

    Ok(())
}
