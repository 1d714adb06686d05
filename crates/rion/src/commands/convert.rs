use rion_rst::Version;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::{
    error::{Error, Result},
    hashes::{HashTable, DEFAULT_HASH_TABLE},
    sniff::{classify, FileKind},
    transcode::{decode_file, encode_file},
};

/// Location of the hash table shipped alongside the executable
pub fn default_hash_table() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(match exe.parent() {
        Some(directory) => directory.join(DEFAULT_HASH_TABLE),
        None => PathBuf::from(DEFAULT_HASH_TABLE),
    })
}

/// A single file to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    input: PathBuf,
    output: Option<PathBuf>,
}

impl Job {
    /// A job writing to `output`, or to a path derived from `input` when `None`
    pub fn new(input: PathBuf, output: Option<PathBuf>) -> Self {
        Job { input, output }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Explicit destination, if one was given
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

/// Converts each input to the other format, stopping at the first failure
#[derive(Debug)]
pub struct ConvertCommand {
    jobs: Vec<Job>,
    hashes: PathBuf,
    default_version: Version,
}

impl ConvertCommand {
    /// `hashes` is the hash table file, which may not exist
    pub fn new(jobs: Vec<Job>, hashes: PathBuf, default_version: Version) -> Self {
        ConvertCommand {
            jobs,
            hashes,
            default_version,
        }
    }

    /// Jobs in the order they run
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Version used for documents without a supported one
    pub fn default_version(&self) -> Version {
        self.default_version
    }

    /// Load the hash table and run every job in order
    pub fn handle(&self) -> Result<()> {
        let hashes = HashTable::load(&self.hashes)?;

        for job in &self.jobs {
            self.convert(job, &hashes)?;
        }

        Ok(())
    }

    /// Convert one file, returning the path that was written
    pub fn convert(&self, job: &Job, hashes: &HashTable) -> Result<PathBuf> {
        if !job.input.exists() {
            return Err(Error::InputNotFound(job.input.clone()));
        }

        info!("input: {}", job.input.display());

        match classify(&job.input)? {
            FileKind::Rst => decode_file(&job.input, job.output(), hashes),
            FileKind::Json => encode_file(&job.input, job.output(), self.default_version),
            FileKind::Unknown => Err(Error::UnknownFileType(job.input.clone())),
        }
    }
}
