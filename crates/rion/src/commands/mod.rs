pub mod convert;
pub mod equals;

use clap::ArgAction;
use rion_rst::Version;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Command line arguments shared by every invocation
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Input files, or `<INPUT> <OUTPUT>` when exactly two are given
    #[arg(value_name = "INPUT", required_unless_present = "equals")]
    inputs: Vec<PathBuf>,

    /// Check whether two RST files contain the same table
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["FILE_A", "FILE_B"],
        conflicts_with_all = ["inputs", "output", "batch"]
    )]
    equals: Option<Vec<PathBuf>>,

    /// The path to the output file, only valid with a single input
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Treat every positional argument as an input, even when there are two
    #[arg(short, long, default_value_t = false)]
    batch: bool,

    /// Hash table used to name entries when decoding [default: RSTHashes.txt next to the executable]
    #[arg(long, value_name = "FILE", env = "RION_HASHES")]
    hashes: Option<PathBuf>,

    /// Version written when a document declares none, or one that is not supported
    #[arg(long, value_name = "VERSION", value_parser = parse_version)]
    default_version: Option<Version>,

    /// Display version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

fn parse_version(value: &str) -> core::result::Result<Version, String> {
    let byte = value.parse::<u8>().map_err(|e| e.to_string())?;
    Version::try_from(byte).map_err(|e| e.to_string())
}

/// An operation resolved from the command line
#[derive(Debug)]
pub enum Command {
    /// Compare two RST files
    Equals(equals::EqualsCommand),
    /// Convert files between RST and JSON
    Convert(convert::ConvertCommand),
}

impl Args {
    /// Validate the arguments and decide what to run
    pub fn into_command(self) -> Result<Command> {
        if let Some(mut files) = self.equals {
            if files.len() != 2 {
                return Err(Error::Usage("equals requires two files".into()));
            }
            let right = files.remove(1);
            let left = files.remove(0);
            return Ok(Command::Equals(equals::EqualsCommand::new(left, right)));
        }

        let Some(first) = self.inputs.first().cloned() else {
            return Err(Error::Usage("no input file specified".into()));
        };
        if !first.exists() {
            return Err(Error::Usage(format!(
                "input file does not exist: {}",
                first.display()
            )));
        }

        let jobs = match (self.output, self.inputs.len(), self.batch) {
            (Some(output), 1, _) => vec![convert::Job::new(first, Some(output))],
            (Some(_), _, _) => {
                return Err(Error::Usage(
                    "--output can only be used with a single input".into(),
                ))
            }
            (None, 2, false) => vec![convert::Job::new(
                self.inputs[0].clone(),
                Some(self.inputs[1].clone()),
            )],
            (None, _, _) => self
                .inputs
                .into_iter()
                .map(|input| convert::Job::new(input, None))
                .collect(),
        };

        let hashes = match self.hashes {
            Some(hashes) => hashes,
            None => convert::default_hash_table()?,
        };

        Ok(Command::Convert(convert::ConvertCommand::new(
            jobs,
            hashes,
            self.default_version.unwrap_or_else(Version::latest),
        )))
    }
}

impl Command {
    /// Run the resolved command
    pub fn handle(&self) -> Result<()> {
        match self {
            Command::Equals(equals) => equals.handle(),
            Command::Convert(convert) => convert.handle(),
        }
    }
}
