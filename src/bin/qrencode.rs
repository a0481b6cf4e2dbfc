use clap::Parser;
use log::info;
use rust_qr_encoder::{ECLevel, EncoderConfig, QrEncoder, QrError};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrencode", version, about = "Encode a file into a QR code PNG")]
struct Cli {
    /// Error correction level: l/low, m/medium, q/quarter, h/high
    #[arg(short = 'e', long, default_value = "m")]
    error_correction: ECLevel,

    /// Pixels per module (1-100)
    #[arg(short = 'm', long)]
    module_size: Option<usize>,

    /// Quiet zone in pixels (4 modules to 400)
    #[arg(short = 'q', long)]
    quiet_zone: Option<usize>,

    /// Read the input as UTF-8 text instead of raw bytes
    #[arg(short = 't', long)]
    text: bool,

    /// Input file
    input: PathBuf,

    /// Output PNG file
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("qrencode: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), QrError> {
    let mut config = EncoderConfig::new(cli.error_correction);
    if let Some(module_size) = cli.module_size {
        config.set_module_size(module_size)?;
    }
    if let Some(quiet_zone) = cli.quiet_zone {
        config.set_quiet_zone(quiet_zone)?;
    }
    let encoder = QrEncoder::with_config(config);

    let symbol = if cli.text {
        let text = std::fs::read_to_string(&cli.input)?;
        encoder.encode_str(&text)?
    } else {
        let data = std::fs::read(&cli.input)?;
        encoder.encode_bytes(&data)?
    };
    info!(
        "{}: version {}, level {}, mask {}",
        cli.input.display(),
        symbol.version(),
        symbol.ec_level(),
        symbol.mask_pattern().id()
    );

    encoder.save_png(&symbol, &cli.output)
}
