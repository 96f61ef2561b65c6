// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! Loads forests from tree dump files.

use std::path::Path;
use std::path::PathBuf;

use itertools::Itertools;
use log::debug;
use log::warn;
use thiserror::Error;
use tree_fingerprint::tree::Forest;
use tree_fingerprint::tree::ParseTreeError;
use walkdir::WalkDir;

pub const DEFAULT_EXTENSION: &str = "txt";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("path does not exist: {0}")]
    MissingPath(PathBuf),
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
    #[error("cannot read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseTreeError,
    },
}

/// What happened to one file while loading a corpus.
#[derive(Debug)]
pub enum FileStatus<'a> {
    /// The file contributed this many trees.
    Loaded(usize),
    /// The file contains no trees.
    Empty,
    /// The file could not be loaded.  Loading stops after this.
    Failed(&'a LoadError),
}

/// Loads a corpus of tree dumps into a single forest.
///
/// Directories are walked recursively in file name order, so the same corpus always yields the
/// same forest.  Only files with the configured extension are loaded from directories; files that
/// are named explicitly are always loaded.
#[derive(Clone, Debug)]
pub struct CorpusLoader {
    extension: String,
}

impl Default for CorpusLoader {
    fn default() -> Self {
        CorpusLoader {
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl CorpusLoader {
    pub fn new() -> CorpusLoader {
        CorpusLoader::default()
    }

    pub fn with_extension<S: Into<String>>(mut self, extension: S) -> CorpusLoader {
        self.extension = extension.into();
        self
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Returns every file that makes up the corpus, in load order.  A file reached through
    /// several of the given paths is listed once.
    pub fn source_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<PathBuf>, LoadError> {
        let mut files = Vec::new();
        for path in paths {
            let path = path.as_ref();
            if !path.exists() {
                return Err(LoadError::MissingPath(path.to_path_buf()));
            }
            if !path.is_dir() {
                files.push(path.to_path_buf());
                continue;
            }
            for entry in WalkDir::new(path)
                .follow_links(true)
                .sort_by_file_name()
            {
                let entry = entry?;
                if entry.file_type().is_file() && self.has_extension(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        }
        Ok(files.into_iter().unique().collect())
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .map_or(false, |extension| extension == self.extension.as_str())
    }

    /// Loads the trees of a single file.
    pub fn load_file(&self, path: &Path) -> Result<Forest, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Forest::parse(&text).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads every file of a corpus into one forest.
    pub fn load<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Forest, LoadError> {
        self.load_with_status(paths, |_, _| {})
    }

    /// Loads every file of a corpus into one forest, reporting the outcome of each file.
    pub fn load_with_status<P, F>(&self, paths: &[P], mut status: F) -> Result<Forest, LoadError>
    where
        P: AsRef<Path>,
        F: FnMut(&Path, FileStatus),
    {
        let mut forest = Forest::new();
        for path in self.source_files(paths)? {
            match self.load_file(&path) {
                Ok(trees) if trees.is_empty() => {
                    warn!("{}: no trees found", path.display());
                    status(&path, FileStatus::Empty);
                }
                Ok(trees) => {
                    debug!("{}: loaded {} trees", path.display(), trees.len());
                    status(&path, FileStatus::Loaded(trees.len()));
                    forest.extend(trees);
                }
                Err(err) => {
                    status(&path, FileStatus::Failed(&err));
                    return Err(err);
                }
            }
        }
        Ok(forest)
    }
}
