// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

use anyhow::Context as _;
use clap::Args;
use clap::ValueHint;
use log::info;
use std::path::PathBuf;
use tree_fingerprint::Analysis;
use tree_fingerprint::AnalysisOptions;

use crate::cli::load::CorpusArgs;
use crate::cli::util::path_exists;
use crate::export::ArtifactWriter;

#[derive(Args)]
pub struct ConsolidationArgs {
    /// Consolidate every node with this label instead of the tree roots.
    #[clap(long, value_name = "LABEL")]
    pub anchor: Option<String>,

    /// Drop the subtrees of nodes with this label during consolidation.
    /// Can be specified multiple times.
    #[clap(long, value_name = "LABEL")]
    pub truncate: Vec<String>,
}

impl ConsolidationArgs {
    pub fn options(&self) -> AnalysisOptions {
        AnalysisOptions {
            anchor: self.anchor.clone(),
            truncate: self.truncate.clone(),
        }
    }

    /// Loads a corpus and analyzes it.
    pub fn analyze(&self, corpus: &CorpusArgs, paths: &[PathBuf]) -> anyhow::Result<Analysis> {
        let forest = corpus.load(paths)?;
        let analysis = Analysis::run(&forest, &self.options()).context("Error analyzing corpus")?;
        info!(
            "found {} labels, {} subpaths, {} cyclic labels",
            analysis.classification().len(),
            analysis.subpaths().len(),
            analysis.cyclic_labels().len(),
        );
        Ok(analysis)
    }
}

#[derive(Args)]
pub struct AnalyzeArgs {
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

    /// Directory to write the artifacts to.
    #[clap(
        long,
        short = 'o',
        value_name = "DIR",
        value_hint = ValueHint::DirPath,
        default_value = "data",
    )]
    pub output: PathBuf,
}

impl AnalyzeArgs {
    pub fn run(&self, corpus: &CorpusArgs) -> anyhow::Result<()> {
        let analysis = self.consolidation.analyze(corpus, &self.corpus_paths)?;
        let writer = ArtifactWriter::new(&self.output);
        writer
            .write(&analysis)
            .with_context(|| format!("Error writing artifacts to {}", self.output.display()))?;
        Ok(())
    }
}
