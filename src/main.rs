use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use undertone::cli::{decode_from_file, encode_to_file, EncodeOptions};
use undertone::UndertoneError;

/// Version info from build.rs
const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROFILE: &str = env!("UNDERTONE_PROFILE");
const GIT_HASH: &str = env!("UNDERTONE_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} ({})", VERSION, PROFILE, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "undertone")]
#[command(author, about = "Hide a message in the least significant bits of a WAV file", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Path to the cover file for encoding or to the input file for decoding
    path: Option<PathBuf>,

    /// Decode the input file instead of encoding
    #[arg(short, long)]
    decode: bool,

    /// Message to embed in encoding mode
    #[arg(short, long)]
    message: Option<String>,

    /// Output file for the encoded audio
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn run(cli: Cli) -> undertone::Result<()> {
    let path = cli.path.ok_or_else(|| {
        UndertoneError::InvalidArguments("an input path is required".into())
    })?;

    if cli.decode {
        let decoded = decode_from_file(&path)?;
        if !decoded.terminated {
            eprintln!("Warning: no terminator found, message may be truncated");
        }
        println!("{}", decoded.text);
        return Ok(());
    }

    let (message, output) = match (cli.message, cli.output) {
        (Some(message), Some(output)) => (message, output),
        _ => {
            return Err(UndertoneError::InvalidArguments(
                "--message and --output are required for encoding".into(),
            ))
        }
    };

    if !path.is_file() {
        return Err(UndertoneError::InvalidArguments(format!(
            "input file {} does not exist",
            path.display()
        )));
    }

    let options = EncodeOptions { message };
    let bytes = encode_to_file(&path, &output, &options)?;
    println!("Embedded {} bytes into {}", bytes, output.display());

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("undertone {}", get_version());
        return ExitCode::SUCCESS;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
