// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

use anyhow::anyhow;
use clap::Args;
use clap::ValueHint;
use colored::Colorize as _;
use std::path::PathBuf;

use crate::cli::analyze::ConsolidationArgs;
use crate::cli::load::CorpusArgs;
use crate::cli::util::path_exists;

#[derive(Args)]
pub struct CompareArgs {
    /// Tree dump files or directories of the left corpus.
    #[clap(
        long,
        value_name = "CORPUS_PATH",
        required = true,
        num_args = 1..,
        value_hint = ValueHint::AnyPath,
        value_parser = path_exists,
    )]
    pub left: Vec<PathBuf>,

    /// Tree dump files or directories of the right corpus.
    #[clap(
        long,
        value_name = "CORPUS_PATH",
        required = true,
        num_args = 1..,
        value_hint = ValueHint::AnyPath,
        value_parser = path_exists,
    )]
    pub right: Vec<PathBuf>,

    #[clap(flatten)]
    pub consolidation: ConsolidationArgs,
}

impl CompareArgs {
    /// Prints every difference between the two corpora.  Fails if there is any.
    pub fn run(&self, corpus: &CorpusArgs) -> anyhow::Result<()> {
        let left = self.consolidation.analyze(corpus, &self.left)?;
        let right = self.consolidation.analyze(corpus, &self.right)?;

        let fingerprint_drift = left.fingerprint().compare(right.fingerprint());
        let class_drift = left.classification().compare(right.classification());
        if fingerprint_drift.is_empty() && class_drift.is_empty() {
            println!("{}", "no drift".green());
            return Ok(());
        }

        print!("{}", fingerprint_drift);
        for drift in &class_drift {
            println!("{}", drift);
        }
        Err(anyhow!(
            "found {} differences",
            fingerprint_drift.len() + class_drift.len()
        ))
    }
}
