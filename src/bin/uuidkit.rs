//! Command that prints one or '-n count' UUID strings of the version given by '-v'

use std::{env, io, io::Write, process::ExitCode};

use tracing_subscriber::EnvFilter;
use uuidkit::{NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500};

const USAGE: &str = "[-v version] [-n count] [--namespace ns] [--name name]";

#[derive(Debug, Default, PartialEq)]
struct Options {
    version: Option<u8>,
    count: Option<usize>,
    namespace: Option<String>,
    name: Option<String>,
}

fn main() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut args = env::args();
    let program = args.next();
    let opts = match parse_args(args) {
        Ok(opts) => opts,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Usage: {} {}", program.as_deref().unwrap_or("uuidkit"), USAGE);
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count.unwrap_or(1) {
        match generate(&opts) {
            Ok(uuid) => writeln!(buf, "{}", uuid)?,
            Err(err) => {
                buf.flush()?;
                eprintln!("Error: {}", err);
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn generate(opts: &Options) -> uuidkit::Result<String> {
    let namespace = opts.namespace.as_deref().unwrap_or(NAMESPACE_DNS);
    let name = opts.name.as_deref().unwrap_or_default();
    match opts.version.unwrap_or(4) {
        1 => uuidkit::v1(),
        2 => uuidkit::v2(),
        3 => uuidkit::v3(namespace, name),
        5 => uuidkit::v5(namespace, name),
        _ => uuidkit::v4(),
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        let Some(value) = args.next() else {
            return Err(format!("argument to option '{}' missing", arg));
        };
        match arg.as_str() {
            "-v" => {
                let Ok(v @ 1..=5) = value.parse::<u8>() else {
                    return Err(format!("invalid argument to option 'v': '{}'", value));
                };
                set_once(&mut opts.version, "v", v)?;
            }
            "-n" => {
                let Ok(c) = value.parse::<usize>() else {
                    return Err(format!("invalid argument to option 'n': '{}'", value));
                };
                set_once(&mut opts.count, "n", c)?;
            }
            "--namespace" => {
                let ns = match value.to_ascii_lowercase().as_str() {
                    "dns" => NAMESPACE_DNS.to_owned(),
                    "url" => NAMESPACE_URL.to_owned(),
                    "oid" => NAMESPACE_OID.to_owned(),
                    "x500" => NAMESPACE_X500.to_owned(),
                    _ => value,
                };
                set_once(&mut opts.namespace, "namespace", ns)?;
            }
            "--name" => set_once(&mut opts.name, "name", value)?,
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }

    match opts.version {
        Some(3 | 5) if opts.name.is_none() => {
            Err("option 'name' required for version 3 and 5".to_owned())
        }
        Some(3 | 5) => Ok(opts),
        _ if opts.namespace.is_some() || opts.name.is_some() => {
            Err("options 'namespace' and 'name' apply to version 3 and 5 only".to_owned())
        }
        _ => Ok(opts),
    }
}

fn set_once<T>(slot: &mut Option<T>, option: &str, value: T) -> Result<(), String> {
    if slot.replace(value).is_some() {
        return Err(format!("option '{}' given more than once", option));
    }
    Ok(())
}
