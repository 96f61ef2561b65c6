// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

use colored::ColoredString;
use colored::Colorize;
use std::error::Error;
use std::io::Write;
use std::path::Path;

use crate::load::FileStatus;

/// Trait that supports reporting the status of each corpus file as it is loaded.
///
/// For each file, exactly one of [`loaded`], [`skipped`], or [`failed`] is called.
///
/// Guidance for severity of these statuses:
///  - Failed files should be reported as errors.
///  - Skipped files can be reported as warnings.
///  - Loaded files can be reported as info.
pub trait Reporter {
    /// File was loaded and contributed trees to the forest.
    fn loaded(&self, path: &Path, summary: &str, details: Option<&dyn std::fmt::Display>);

    /// File contained nothing to load.
    fn skipped(&self, path: &Path, summary: &str, details: Option<&dyn std::fmt::Display>);

    /// File could not be loaded.
    fn failed(&self, path: &Path, summary: &str, details: Option<&dyn std::fmt::Display>);

    /// Reports a [`FileStatus`] through the matching method.
    fn report(&self, path: &Path, status: FileStatus) {
        match status {
            FileStatus::Loaded(trees) => {
                let summary = if trees == 1 {
                    "1 tree".to_string()
                } else {
                    format!("{} trees", trees)
                };
                self.loaded(path, &summary, None)
            }
            FileStatus::Empty => self.skipped(path, "no trees", None),
            FileStatus::Failed(err) => {
                let mut details = err.to_string();
                let mut source = err.source();
                while let Some(err) = source {
                    details.push_str(&format!("\n  {}", err));
                    source = err.source();
                }
                self.failed(path, "failed", Some(&details))
            }
        }
    }
}

/// An enum describing the level of detail that should be reported.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Level {
    None,
    Summary,
    Details,
}

/// A console reporter that outputs one line per file, with its status appended.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleReporter {
    pub loaded_level: Level,
    pub skipped_level: Level,
    pub failed_level: Level,
}

impl ConsoleReporter {
    pub fn none() -> Self {
        Self {
            loaded_level: Level::None,
            skipped_level: Level::None,
            failed_level: Level::None,
        }
    }

    /// Reports skipped and failed files only.
    pub fn problems() -> Self {
        Self {
            loaded_level: Level::None,
            skipped_level: Level::Summary,
            failed_level: Level::Details,
        }
    }

    pub fn details() -> Self {
        Self {
            loaded_level: Level::Details,
            skipped_level: Level::Details,
            failed_level: Level::Details,
        }
    }

    fn print(
        &self,
        level: Level,
        path: &Path,
        summary: ColoredString,
        details: Option<&dyn std::fmt::Display>,
    ) {
        if level < Level::Summary {
            return;
        }
        let mut stdout = std::io::stdout().lock();
        // Best effort.
        let _ = writeln!(stdout, "{}: {}", path.display(), summary);
        if level < Level::Details {
            return;
        }
        if let Some(details) = details {
            let _ = writeln!(stdout, "{}", details);
        }
    }
}

impl Reporter for ConsoleReporter {
    fn loaded(&self, path: &Path, summary: &str, details: Option<&dyn std::fmt::Display>) {
        self.print(self.loaded_level, path, summary.green(), details)
    }

    fn skipped(&self, path: &Path, summary: &str, details: Option<&dyn std::fmt::Display>) {
        self.print(self.skipped_level, path, summary.yellow(), details)
    }

    fn failed(&self, path: &Path, summary: &str, details: Option<&dyn std::fmt::Display>) {
        self.print(self.failed_level, path, summary.red(), details)
    }
}
