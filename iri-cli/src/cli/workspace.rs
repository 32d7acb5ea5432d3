//! Workspace definition and helper
use std::{
    fs::{create_dir_all, File},
    io,
    path::{Path, PathBuf},
};

use crate::cli::Cli;

/// Default output products directory (container convention)
const DEFAULT_OUTPUT: &str = "/app/output";

/// Workspace: where all output products land
pub struct Workspace {
    /// Root fullpath for this session
    pub root: PathBuf,
}

impl Workspace {
    /// Builds the session workspace, either
    ///  1. from the $IRI_OUTPUT environment variable
    ///  2. from the --output CLI argument
    ///  3. or defaults to /app/output.
    /// A non creatable directory is a fatal error.
    pub fn new(cli: &Cli) -> Result<Self, io::Error> {
        let root = match std::env::var("IRI_OUTPUT") {
            Ok(path) => Path::new(&path).to_path_buf(),
            _ => match cli.output_dir() {
                Some(path) => Path::new(path).to_path_buf(),
                None => Path::new(DEFAULT_OUTPUT).to_path_buf(),
            },
        };
        create_dir_all(&root)?;
        info!("session workspace is \"{}\"", root.to_string_lossy());
        Ok(Self { root })
    }
    /// Creates new file within this session
    pub fn create_file(&self, filename: &str) -> Result<File, io::Error> {
        let fullpath = self.root.join(filename);
        let fd = File::create(&fullpath)?;
        info!("{} has been generated", fullpath.display());
        Ok(fd)
    }
    /// Full path of a file within this session
    pub fn filepath(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }
}
