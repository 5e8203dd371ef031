/*
 * Copyright (C) 2022 taylor.fish <contact@taylor.fish>
 *
 * This file is part of basetext.
 *
 * basetext is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * basetext is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with basetext. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs::File;
use std::io::{stdin, stdout, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;

use basetext::hex::EncodeConfig;
use basetext::wrap::wrap_lines;
use basetext::{base91, hex};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Codec {
    Hex,
    Base91,
}

/// Encodes or decodes data from [file] and writes the result to standard
/// output. If [file] is missing or "-", the data is read from standard input.
#[derive(Parser, Debug)]
#[command(name = "basetext", version)]
struct Cli {
    /// Decode data instead of encoding
    #[arg(short, long)]
    decode: bool,

    /// Codec to use
    #[arg(short, long, value_enum, default_value_t = Codec::Base91)]
    codec: Codec,

    /// When encoding hex, use lower-case digits
    #[arg(long)]
    lower: bool,

    /// When encoding base91, break lines after this many characters
    /// (0 disables wrapping)
    #[arg(short, long, default_value_t = 0)]
    wrap: usize,

    /// Log level (error|warn|info|debug|trace); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Input file
    file: Option<PathBuf>,
}

fn init_logger(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    let read = match path.filter(|p| *p != Path::new("-")) {
        Some(path) => {
            let file = File::open(path).with_context(|| {
                format!("could not open file '{}'", path.display())
            })?;
            BufReader::new(file).read_to_end(&mut data)
        }
        None => stdin().lock().read_to_end(&mut data),
    };
    read.context("could not read input")?;
    debug!("read {} bytes", data.len());
    Ok(data)
}

fn write_output(data: &[u8]) -> Result<()> {
    let mut writer = BufWriter::new(stdout().lock());
    writer
        .write_all(data)
        .and_then(|_| writer.flush())
        .context("could not write to standard output")?;
    debug!("wrote {} bytes", data.len());
    Ok(())
}

fn encode(cli: &Cli, data: &[u8]) -> Result<Vec<u8>> {
    Ok(match cli.codec {
        Codec::Hex => {
            let config = if cli.lower {
                EncodeConfig::lower()
            } else {
                EncodeConfig::new()
            };
            hex::encode_to_string_with(data, config)
                .context("could not encode input as hex")?
                .into_bytes()
        }
        Codec::Base91 if cli.wrap != 0 => {
            wrap_lines(&base91::encode_to_string(data), cli.wrap).into_bytes()
        }
        Codec::Base91 => base91::encode_to_bytes(data),
    })
}

fn decode(cli: &Cli, data: &[u8]) -> Result<Vec<u8>> {
    Ok(match cli.codec {
        Codec::Hex => {
            let text = std::str::from_utf8(data)
                .context("input is not valid UTF-8")?;
            hex::decode_str(text).context("input is not valid hex data")?
        }
        Codec::Base91 => base91::decode_bytes(data),
    })
}

fn validate(cli: &Cli) -> Result<()> {
    if cli.wrap != 0 && (cli.decode || cli.codec == Codec::Hex) {
        bail!("--wrap only applies when encoding base91");
    }
    if cli.lower && (cli.decode || cli.codec != Codec::Hex) {
        bail!("--lower only applies when encoding hex");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(&cli.log_level);
    validate(&cli)?;

    let input = read_input(cli.file.as_deref())?;
    let output = if cli.decode {
        decode(&cli, &input)?
    } else {
        encode(&cli, &input)?
    };
    write_output(&output)
}
