// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

use anyhow::Context as _;
use clap::Args;
use log::info;
use std::path::PathBuf;
use tree_fingerprint::tree::Forest;

use crate::cli::util::reporter::ConsoleReporter;
use crate::cli::util::reporter::Reporter;
use crate::load::CorpusLoader;
use crate::load::FileStatus;
use crate::load::DEFAULT_EXTENSION;

#[derive(Args)]
pub struct CorpusArgs {
    /// Extension of the tree dump files to load from directories.
    #[clap(long, value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Report every file as it is loaded.
    #[clap(long, short = 'v')]
    pub verbose: bool,

    /// Do not report skipped or failed files.
    #[clap(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CorpusArgs {
    pub fn new() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            verbose: false,
            quiet: false,
        }
    }

    fn reporter(&self) -> ConsoleReporter {
        if self.quiet {
            ConsoleReporter::none()
        } else if self.verbose {
            ConsoleReporter::details()
        } else {
            ConsoleReporter::problems()
        }
    }

    /// Loads the corpus made up of the given files and directories.
    pub fn load(&self, paths: &[PathBuf]) -> anyhow::Result<Forest> {
        let loader = CorpusLoader::new().with_extension(self.extension.clone());
        let reporter = self.reporter();
        let mut files = 0;
        let forest = loader
            .load_with_status(paths, |path, status| {
                if let FileStatus::Loaded(_) = status {
                    files += 1;
                }
                reporter.report(path, status);
            })
            .context("Error loading corpus")?;
        info!("loaded {} trees from {} files", forest.len(), files);
        Ok(forest)
    }
}
