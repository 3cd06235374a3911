//! Project configuration file representation

use crate::project::{OutputFormat, Result};
use relative_path::{RelativePath, RelativePathBuf};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fs, io};

/// In-memory representation of the current project configuration.
///
/// This file is typically read from a file named `rvsyntax.json`, and it
/// lists the sources to check along with the preferred output format.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Project {
    /// Assembly sources, relative to the directory holding the project file.
    #[serde(default)]
    sources: Vec<RelativePathBuf>,

    #[serde(default)]
    format: OutputFormat,

    #[serde(skip)]
    root: PathBuf,
}

impl Project {
    pub fn read(filename: &str) -> Result<Self> {
        let project_file = fs::File::open(filename)?;
        let mut project: Self = serde_json::from_reader(project_file)?;

        project.root = Path::new(filename)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(project)
    }

    /// Read the project file, treating a missing file as an empty project.
    pub fn read_or_default(filename: &str) -> Result<Self> {
        match Self::read(filename) {
            Ok(project) => Ok(project),
            Err(crate::project::Error::IoError(ref e)) if e.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// List the project's sources as written in the project file.
    pub fn iter_sources(&self) -> impl Iterator<Item = &RelativePath> {
        self.sources.iter().map(|s| s.as_relative_path())
    }

    /// List the project's sources as paths usable from the working directory.
    pub fn iter_source_paths<'a>(&'a self) -> impl 'a + Iterator<Item = PathBuf> {
        self.iter_sources().map(move |s| s.to_path(&self.root))
    }
}
