// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

use clap::Args;
use clap::ValueHint;
use colored::Colorize as _;
use std::path::PathBuf;

use crate::cli::analyze::ConsolidationArgs;
use crate::cli::load::CorpusArgs;
use crate::cli::util::path_exists;

#[derive(Args)]
pub struct ShowArgs {
    /// Tree dump file or directory paths.
    #[clap(
        value_name = "CORPUS_PATH",
        required = true,
        value_hint = ValueHint::AnyPath,
        value_parser = path_exists,
    )]
    pub corpus_paths: Vec<PathBuf>,

    #[clap(flatten)]
    pub consolidation: ConsolidationArgs,
}

impl ShowArgs {
    pub fn run(&self, corpus: &CorpusArgs) -> anyhow::Result<()> {
        let forest = corpus.load(&self.corpus_paths)?;
        match self.consolidation.options().consolidator().consolidate(&forest)? {
            Some(tree) => print!("{}", tree),
            None => eprintln!("{}", "corpus contains no trees".yellow()),
        }
        Ok(())
    }
}
