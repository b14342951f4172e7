//! Command-line surface.

use std::ffi::OsString;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use crate::hash::{self, Target};

#[derive(Debug, Parser)]
#[command(name = "caffeinated", version, about = "Caffeinated - command-line power tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Calculate the hash of a file (md5)
    Hash {
        /// File to hash, or the text itself with --text
        target: OsString,
        /// Hash algorithm
        #[arg(default_value = "md5")]
        algorithm: String,
        /// Treat TARGET as literal text instead of a path
        #[arg(short = 's', long)]
        text: bool,
    },
}

/// Runs one invocation and returns the process exit status.
///
/// The result line goes to `stdout`; diagnostics go to `stderr`.
pub fn run<I, T, O, E>(args: I, stdout: &mut O, stderr: &mut E) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = emit(stdout, format_args!("{}", err.render()));
                    0
                }
                _ => {
                    let _ = emit(stderr, format_args!("{}", err.render()));
                    1
                }
            };
        }
    };
    debug!(?cli, "parsed arguments");

    match cli.command {
        Command::Hash { target, algorithm, text } => {
            let target = if text {
                // Non-UTF-8 text is hashed after lossy replacement.
                Target::Text(target.into_string().unwrap_or_else(|raw| raw.to_string_lossy().into_owned()))
            } else {
                Target::File(PathBuf::from(target))
            };
            match hash::hash_target(&algorithm, target) {
                Ok(line) => match emit(stdout, format_args!("{}\n", line)) {
                    Ok(()) => 0,
                    Err(_) => 1,
                },
                Err(err) => {
                    let _ = emit(stderr, format_args!("{}\n", err));
                    1
                }
            }
        }
    }
}

fn emit<W: Write>(out: &mut W, args: fmt::Arguments) -> io::Result<()> {
    out.write_fmt(args).map_err(|err| {
        warn!(%err, "failed to write output");
        err
    })
}
