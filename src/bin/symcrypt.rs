// src/bin/symcrypt.rs
//! symcrypt CLI, one subcommand per cipher preset
//!
//!   symcrypt aes-256-cbc -e -c "Hello, world!"
//!   symcrypt aes-256-cbc -d -c <ciphertext> -k <key> -i <iv>
//!
//! Decryption asks for any of content / key / iv left out.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use symcrypt::config::Config;
use symcrypt::consts::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};
use symcrypt::input::read_content_file;
use symcrypt::{output, ConsolePrompt, CryptoRequest, Operation, RequestProcessor, TracingObserver};

#[derive(Parser)]
#[command(name = "symcrypt")]
#[command(about = "AES and Triple-DES encryption in CBC or ECB mode")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(name = "aes-128-cbc", about = "AES, 128-bit key, CBC")]
    Aes128Cbc(CipherArgs),
    #[command(name = "aes-192-cbc", about = "AES, 192-bit key, CBC")]
    Aes192Cbc(CipherArgs),
    #[command(name = "aes-256-cbc", about = "AES, 256-bit key, CBC")]
    Aes256Cbc(CipherArgs),
    #[command(name = "aes-128-ecb", about = "AES, 128-bit key, ECB")]
    Aes128Ecb(CipherArgs),
    #[command(name = "aes-192-ecb", about = "AES, 192-bit key, ECB")]
    Aes192Ecb(CipherArgs),
    #[command(name = "aes-256-ecb", about = "AES, 256-bit key, ECB")]
    Aes256Ecb(CipherArgs),
    #[command(name = "tdes-128-cbc", about = "Triple-DES, 128-bit key, CBC")]
    Tdes128Cbc(CipherArgs),
    #[command(name = "tdes-192-cbc", about = "Triple-DES, 192-bit key, CBC")]
    Tdes192Cbc(CipherArgs),
    #[command(name = "tdes-128-ecb", about = "Triple-DES, 128-bit key, ECB")]
    Tdes128Ecb(CipherArgs),
    #[command(name = "tdes-192-ecb", about = "Triple-DES, 192-bit key, ECB")]
    Tdes192Ecb(CipherArgs),
}

impl Command {
    fn into_parts(self) -> (&'static str, CipherArgs) {
        match self {
            Command::Aes128Cbc(args) => ("aes-128-cbc", args),
            Command::Aes192Cbc(args) => ("aes-192-cbc", args),
            Command::Aes256Cbc(args) => ("aes-256-cbc", args),
            Command::Aes128Ecb(args) => ("aes-128-ecb", args),
            Command::Aes192Ecb(args) => ("aes-192-ecb", args),
            Command::Aes256Ecb(args) => ("aes-256-ecb", args),
            Command::Tdes128Cbc(args) => ("tdes-128-cbc", args),
            Command::Tdes192Cbc(args) => ("tdes-192-cbc", args),
            Command::Tdes128Ecb(args) => ("tdes-128-ecb", args),
            Command::Tdes192Ecb(args) => ("tdes-192-ecb", args),
        }
    }
}

#[derive(Args)]
#[command(group(ArgGroup::new("operation").required(true).args(["encrypt", "decrypt"])))]
struct CipherArgs {
    /// Encrypt the content
    #[arg(short, long)]
    encrypt: bool,

    /// Decrypt base64 content
    #[arg(short, long)]
    decrypt: bool,

    /// Plaintext (encrypt) or base64 ciphertext (decrypt)
    #[arg(short, long, conflicts_with = "input")]
    content: Option<String>,

    /// Read the content from a file instead
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Base64 key; generated when encrypting without one
    #[arg(short, long)]
    key: Option<String>,

    /// Base64 initialization vector (CBC only)
    #[arg(short, long)]
    iv: Option<String>,

    /// Output format, overrides the config file
    #[arg(short, long, value_parser = ["human", "json"])]
    format: Option<String>,

    /// Write the result to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = symcrypt::load_config();
    let filter = config
        .as_ref()
        .map(|c| c.logging.filter.as_str())
        .unwrap_or(DEFAULT_LOG_FILTER);
    init_tracing(filter);

    let result = config
        .context("failed to load configuration")
        .and_then(|config| run(cli, config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            tracing::error!(error = ?err, "request failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(fallback: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    let (preset, args) = cli.command.into_parts();

    let operation = if args.encrypt {
        Operation::Encrypt
    } else {
        Operation::Decrypt
    };

    let content = match &args.input {
        Some(path) => Some(
            read_content_file(path)
                .with_context(|| format!("failed to read input file {}", path.display()))?,
        ),
        None => args.content,
    };

    let request = CryptoRequest {
        preset: preset.to_owned(),
        operation: Some(operation),
        content,
        key: args.key,
        iv: args.iv,
    };

    let observer = TracingObserver;
    let mut prompt = ConsolePrompt::new(config.prompt.mask_secrets);
    let result = RequestProcessor::new(&observer, &mut prompt).process(request)?;

    let format = match args.format.as_deref() {
        Some(format) => format.parse()?,
        None => config.output.format,
    };
    let rendered = output::render(&result, format)?;
    output::emit(&rendered, args.output.as_deref())
        .context("failed to write output")?;

    Ok(())
}
