//! The `base-prism` command line: encode, decode, multibase and listings
//! over the alphabet registry.

use crate::encoders::errors::DecodeError;
use crate::multibase::{self, Multibase};
use crate::registry::Registry;
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "base-prism")]
#[command(about = "Encode and decode binary data across many textual bases", long_about = None)]
pub struct Cli {
    /// Extra alphabet definitions (TOML), merged over the built-ins
    #[arg(short = 'a', long, value_name = "FILE", global = true)]
    pub alphabets: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode bytes to text
    Encode(CodingArgs),
    /// Decode text to bytes
    Decode(CodingArgs),
    /// Encode with a multibase prefix
    Multibase(MultibaseArgs),
    /// Decode multibase text, printing the detected scheme on stderr
    Unmultibase(InputArgs),
    /// List registered scheme names
    List,
}

#[derive(Args, Debug)]
pub struct CodingArgs {
    /// Scheme name from the registry
    pub scheme: String,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct MultibaseArgs {
    /// Multibase scheme name (e.g. base58btc, base32, base16upper)
    pub scheme: String,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

fn read_input(file: &Option<PathBuf>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn write_output(output: &Option<PathBuf>, data: &[u8]) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, data),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()
        }
    }
}

fn multibase_by_name(name: &str) -> Option<Multibase> {
    const ALL: [Multibase; 22] = [
        Multibase::Base2,
        Multibase::Base8,
        Multibase::Base10,
        Multibase::Base16Lower,
        Multibase::Base16Upper,
        Multibase::Base32Lower,
        Multibase::Base32Upper,
        Multibase::Base32PadLower,
        Multibase::Base32PadUpper,
        Multibase::Base32HexLower,
        Multibase::Base32HexUpper,
        Multibase::Base32Z,
        Multibase::Base36Lower,
        Multibase::Base36Upper,
        Multibase::Base45,
        Multibase::Base58Btc,
        Multibase::Base58Flickr,
        Multibase::Base64,
        Multibase::Base64Pad,
        Multibase::Base64Url,
        Multibase::Base64UrlPad,
        Multibase::Base256Emoji,
    ];
    ALL.into_iter().find(|base| base.name() == name)
}

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = Registry::with_defaults();
    if let Some(path) = &cli.alphabets {
        registry.load_toml_file(path)?;
    }

    match cli.command {
        Command::Encode(args) => {
            let codec = registry
                .get(&args.scheme)
                .ok_or_else(|| format!("unknown scheme '{}'; try `base-prism list`", args.scheme))?;
            let input = read_input(&args.file)?;
            let mut encoded = codec.encode(&input);
            encoded.push('\n');
            write_output(&args.output, encoded.as_bytes())?;
        }
        Command::Decode(args) => {
            let codec = registry
                .get(&args.scheme)
                .ok_or_else(|| format!("unknown scheme '{}'; try `base-prism list`", args.scheme))?;
            let input = read_input(&args.file)?;
            let text = String::from_utf8(input)
                .map_err(|_| DecodeError::InvalidCharacter { character: char::REPLACEMENT_CHARACTER, position: 0 })?;
            let decoded = codec.decode(text.trim_end_matches(['\r', '\n']))?;
            write_output(&args.output, &decoded)?;
        }
        Command::Multibase(args) => {
            let base = multibase_by_name(&args.scheme)
                .ok_or_else(|| format!("unknown multibase scheme '{}'", args.scheme))?;
            let input = read_input(&args.file)?;
            let mut encoded = multibase::encode(base, &input);
            encoded.push('\n');
            write_output(&args.output, encoded.as_bytes())?;
        }
        Command::Unmultibase(args) => {
            let input = read_input(&args.file)?;
            let text = String::from_utf8(input)
                .map_err(|_| DecodeError::InvalidCharacter { character: char::REPLACEMENT_CHARACTER, position: 0 })?;
            let (base, decoded) = multibase::decode(text.trim_end_matches(['\r', '\n']))?;
            eprintln!("scheme: {}", base.name());
            write_output(&args.output, &decoded)?;
        }
        Command::List => {
            let mut stdout = io::stdout().lock();
            for name in registry.names() {
                writeln!(stdout, "{}", name)?;
            }
        }
    }

    Ok(())
}
