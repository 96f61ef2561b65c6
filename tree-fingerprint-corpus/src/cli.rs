// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! Defines the `tree-fingerprint` command line interface.

pub mod analyze;
pub mod compare;
pub mod load;
pub mod show;
mod util;

use anyhow::Result;
use clap::Parser;
use clap::Subcommand;

use self::analyze::AnalyzeArgs;
use self::compare::CompareArgs;
use self::load::CorpusArgs;
use self::show::ShowArgs;

/// Structural fingerprints of tree dump corpora.
#[derive(Parser)]
#[clap(about, version, propagate_version = true)]
pub struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn main() -> Result<()> {
        let cli = Cli::parse();
        match &cli.command {
            Commands::Analyze(cmd) => cmd.run(),
            Commands::Compare(cmd) => cmd.run(),
            Commands::Show(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    Analyze(Analyze),
    Compare(Compare),
    Show(Show),
}

/// Analyze a corpus and write its artifacts
#[derive(clap::Parser)]
pub struct Analyze {
    #[clap(flatten)]
    corpus_args: CorpusArgs,
    #[clap(flatten)]
    analyze_args: AnalyzeArgs,
}

impl Analyze {
    pub fn run(&self) -> Result<()> {
        self.analyze_args.run(&self.corpus_args)
    }
}

/// Report structural drift between two corpora
#[derive(clap::Parser)]
pub struct Compare {
    #[clap(flatten)]
    corpus_args: CorpusArgs,
    #[clap(flatten)]
    compare_args: CompareArgs,
}

impl Compare {
    pub fn run(&self) -> Result<()> {
        self.compare_args.run(&self.corpus_args)
    }
}

/// Print the consolidated tree of a corpus
#[derive(clap::Parser)]
pub struct Show {
    #[clap(flatten)]
    corpus_args: CorpusArgs,
    #[clap(flatten)]
    show_args: ShowArgs,
}

impl Show {
    pub fn run(&self) -> Result<()> {
        self.show_args.run(&self.corpus_args)
    }
}
