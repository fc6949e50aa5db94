//! Simple command that converts given UUID strings or prints one or '-n count' new UUIDv4s

use std::{env, io, io::Write, process::ExitCode};
use uuid25::Uuid25;

const USAGE: &str = "[-f uuid25|hex|hyphenated|braced|urn] [-n count | uuid ...]";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Format {
    #[default]
    Uuid25,
    Hex,
    Hyphenated,
    Braced,
    Urn,
}

#[derive(Debug, Default)]
struct Options {
    format: Format,
    count: Option<usize>,
    inputs: Vec<String>,
}

fn main() -> io::Result<ExitCode> {
    let mut args = env::args();
    let program = args.next();
    let program = program.as_deref().unwrap_or("uuid25");
    let opts = match parse_args(args) {
        Ok(opts) => opts,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Usage: {} {}", program, USAGE);
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    if opts.inputs.is_empty() {
        for _ in 0..opts.count.unwrap_or(1) {
            write_formatted(&mut buf, uuid25::gen_v4(), opts.format)?;
        }
    } else {
        for e in &opts.inputs {
            match Uuid25::parse(e) {
                Ok(uuid) => write_formatted(&mut buf, uuid, opts.format)?,
                Err(err) => {
                    buf.flush()?;
                    eprintln!("Error: '{}': {}", e, err);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }
    buf.flush()?;

    Ok(ExitCode::SUCCESS)
}

fn write_formatted(w: &mut impl Write, uuid: Uuid25, format: Format) -> io::Result<()> {
    match format {
        Format::Uuid25 => writeln!(w, "{}", uuid),
        Format::Hex => writeln!(w, "{}", uuid.to_hex()),
        Format::Hyphenated => writeln!(w, "{}", uuid.to_hyphenated()),
        Format::Braced => writeln!(w, "{}", uuid.to_braced()),
        Format::Urn => writeln!(w, "{}", uuid.to_urn()),
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options::default();
    let mut format = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" => {
                if opts.count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                opts.count.replace(c);
            }
            "-f" => {
                if format.is_some() {
                    return Err("option 'f' given more than once".to_owned());
                }
                let Some(f_arg) = args.next() else {
                    return Err("argument to option 'f' missing".to_owned());
                };
                format.replace(match f_arg.as_str() {
                    "uuid25" => Format::Uuid25,
                    "hex" => Format::Hex,
                    "hyphenated" => Format::Hyphenated,
                    "braced" => Format::Braced,
                    "urn" => Format::Urn,
                    _ => return Err(format!("invalid argument to option 'f': '{}'", f_arg)),
                });
            }
            _ if arg.starts_with('-') => {
                return Err(format!("unrecognized argument '{}'", arg));
            }
            _ => opts.inputs.push(arg),
        }
    }
    if opts.count.is_some() && !opts.inputs.is_empty() {
        return Err("option 'n' cannot be used with uuid arguments".to_owned());
    }
    opts.format = format.unwrap_or_default();
    Ok(opts)
}
