//! Secure Text: classical cipher CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use secure_text::config::{load_config, starter_config, EffectiveConfig, OutputFormat, CONFIG_FILENAME};
use secure_text::files::{read_text, transform_file, write_text};
use secure_text::menu::{about_text, Menu};
use secure_text::reporter::{ConsoleReporter, JsonReporter};
use secure_text::{analyze, BruteForceReport, Cipher, CipherError, CipherKind, Direction, TransformOutput};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Secure Text: Caesar, substitution and Vigenere ciphers with frequency analysis
#[derive(Parser, Debug)]
#[command(name = "secure-text")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format as JSON
    #[arg(long, short, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to config file (default: search .securetextrc.json in current dir and parents)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive numbered menu (default when no subcommand is given)
    Menu,

    /// Encrypt text with a classical cipher
    Encrypt(TransformArgs),

    /// Decrypt text with a classical cipher
    Decrypt(TransformArgs),

    /// Try all 25 Caesar shifts
    BruteForce {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Letter frequency table
    Frequency {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// About Secure Text
    About,

    /// Create .securetextrc.json with sensible defaults
    Init {
        /// Default Caesar shift to record
        #[arg(long, allow_negative_numbers = true)]
        shift: Option<i64>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct TransformArgs {
    /// Cipher to apply
    #[arg(long, short, value_enum)]
    cipher: CipherKind,

    /// Caesar shift; any integer, negative included (default: config or 3)
    #[arg(long, short, allow_negative_numbers = true)]
    shift: Option<i64>,

    /// Vigenere keyword or 26-letter substitution key
    #[arg(long, short)]
    key: Option<String>,

    #[command(flatten)]
    source: SourceArgs,

    /// Write the result to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

/// Where the input text comes from; stdin when neither is given
#[derive(clap::Args, Debug)]
struct SourceArgs {
    /// Text to process
    #[arg(long, short, conflicts_with = "input")]
    text: Option<String>,

    /// File to read the text from
    #[arg(long, short)]
    input: Option<PathBuf>,
}

impl SourceArgs {
    fn read(&self) -> Result<String> {
        if let Some(ref text) = self.text {
            return Ok(text.clone());
        }
        if let Some(ref path) = self.input {
            return Ok(read_text(path)?);
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        Ok(buffer)
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            match e.downcast_ref::<CipherError>() {
                Some(err) if err.is_key_error() => ExitCode::from(1),
                _ => ExitCode::from(2),
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = load_config(&cwd, args.config.as_deref())?;

    let shift_flag = match &args.command {
        Some(Commands::Encrypt(t)) | Some(Commands::Decrypt(t)) => t.shift,
        _ => None,
    };
    let effective = config.merge_with_cli(shift_flag, args.json, args.no_color);
    if !effective.color {
        colored::control::set_override(false);
    }
    log::debug!("output format {:?}, color {}", effective.format, effective.color);

    match args.command.unwrap_or(Commands::Menu) {
        Commands::Menu => run_menu(&effective),
        Commands::Encrypt(t) => run_transform(&t, Direction::Encrypt, &effective),
        Commands::Decrypt(t) => run_transform(&t, Direction::Decrypt, &effective),
        Commands::BruteForce { source } => {
            let report = BruteForceReport::new(&source.read()?);
            match effective.format {
                OutputFormat::Json => println!("{}", JsonReporter::new().pretty().report_brute_force(&report)),
                OutputFormat::Console => console_reporter(&effective).report_brute_force(&report),
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Frequency { source } => {
            let text = source.read()?;
            let report = analyze(&text);
            match effective.format {
                OutputFormat::Json => println!("{}", JsonReporter::new().pretty().report_frequency(&report)),
                OutputFormat::Console => console_reporter(&effective).report_frequency(&report),
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::About => {
            print!("{}", about_text());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init { shift, dir } => run_init(shift, dir.as_deref(), &cwd),
    }
}

fn console_reporter(effective: &EffectiveConfig) -> ConsoleReporter {
    ConsoleReporter::new().with_colors(effective.color)
}

fn run_menu(effective: &EffectiveConfig) -> Result<ExitCode> {
    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout())
        .with_reporter(console_reporter(effective))
        .with_default_shift(effective.shift);
    menu.run().context("Interactive session failed")?;
    Ok(ExitCode::SUCCESS)
}

fn run_transform(
    args: &TransformArgs,
    direction: Direction,
    effective: &EffectiveConfig,
) -> Result<ExitCode> {
    // Validate the key before touching any input
    let key = args.key.as_deref().unwrap_or("");
    let cipher = match args.cipher {
        CipherKind::Caesar => Cipher::caesar(effective.shift),
        CipherKind::Vigenere => Cipher::vigenere(key)?,
        CipherKind::Substitution => Cipher::substitution(key)?,
    };

    if let (Some(input), Some(path)) = (&args.source.input, &args.output) {
        transform_file(input, path, &cipher, direction)?;
        report_written(cipher.kind(), path);
        return Ok(ExitCode::SUCCESS);
    }

    let text = args.source.read()?;
    let output = TransformOutput::run(&cipher, direction, &text);

    if let Some(ref path) = args.output {
        write_text(path, &output.text)?;
        report_written(output.cipher, path);
        return Ok(ExitCode::SUCCESS);
    }

    match effective.format {
        OutputFormat::Json => println!("{}", JsonReporter::new().pretty().report_transform(&output)),
        OutputFormat::Console => console_reporter(effective).report_transform(&output),
    }
    Ok(ExitCode::SUCCESS)
}

fn report_written(kind: CipherKind, path: &Path) {
    eprintln!(
        "{}: {} text written to {}",
        "Done".green().bold(),
        kind,
        path.display()
    );
}

fn run_init(shift: Option<i64>, dir: Option<&Path>, cwd: &Path) -> Result<ExitCode> {
    let dir = dir.unwrap_or(cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let json = starter_config(shift)?;
    std::fs::write(&config_path, json)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {}",
        "Done".green().bold(),
        config_path.display()
    );
    Ok(ExitCode::SUCCESS)
}
