// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! This crate connects the [`tree-fingerprint`][] library to the file system.  It loads a
//! [`Forest`][] from a corpus of tree dump files, and writes the results of an [`Analysis`][] as a
//! directory of text artifacts that can be diffed between runs.
//!
//! With the `cli` feature enabled, it also provides the `tree-fingerprint` command line tool.
//!
//! [`tree-fingerprint`]: https://docs.rs/tree-fingerprint/
//! [`Forest`]: https://docs.rs/tree-fingerprint/*/tree_fingerprint/tree/struct.Forest.html
//! [`Analysis`]: https://docs.rs/tree-fingerprint/*/tree_fingerprint/analysis/struct.Analysis.html

#[cfg(feature = "cli")]
pub mod cli;
pub mod export;
pub mod load;

pub use export::ArtifactWriter;
pub use export::ExportError;
pub use load::CorpusLoader;
pub use load::FileStatus;
pub use load::LoadError;
