use clap::Parser;
use hachi64::{decode, encode};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hachi64")]
#[command(version)]
#[command(about = "Encode and decode binary data as Chinese characters", long_about = None)]
struct Cli {
    /// File to encode/decode (if not provided, reads from stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Decode instead of encode
    #[arg(short, long)]
    decode: bool,

    /// Encode without '=' padding; when decoding, treat '=' as invalid
    #[arg(short = 'n', long)]
    no_padding: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the alphabet and exit
    #[arg(long)]
    alphabet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.alphabet {
        println!("{}", hachi64::HACHI_ALPHABET);
        return Ok(());
    }

    let use_padding = !cli.no_padding;

    // Read input data
    let input_data = if let Some(file_path) = &cli.file {
        fs::read(file_path)?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        buffer
    };

    if cli.decode {
        let input_str =
            String::from_utf8(input_data).map_err(|_| "Input must be valid UTF-8 for decoding")?;
        let decoded = decode(input_str.trim(), use_padding)?;
        if let Some(output_path) = &cli.output {
            fs::write(output_path, &decoded)?;
        } else {
            io::stdout().write_all(&decoded)?;
        }
    } else {
        let encoded = encode(&input_data, use_padding);
        if let Some(output_path) = &cli.output {
            fs::write(output_path, encoded.as_bytes())?;
        } else {
            println!("{}", encoded);
        }
    }

    Ok(())
}
