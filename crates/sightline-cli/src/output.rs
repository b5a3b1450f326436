//! Output formatting for CLI results.

use crate::error::Result;
use colored::Colorize;
use sightline_domain::{Bundle, KindSummary};

/// Formats engine results for the terminal.
pub struct Formatter {
    color: bool,
}

impl Formatter {
    /// Create a formatter with the given color setting.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print the kind listing, one kind per line.
    pub fn print_kinds(&self, kinds: &[KindSummary]) {
        for kind in kinds {
            let tag = format!("{:<12}", kind.type_tag);
            if self.color {
                println!("{} {}", tag.cyan(), kind.display_name);
            } else {
                println!("{} {}", tag, kind.display_name);
            }
        }
    }

    /// Print an observation result: a summary line on stderr, the full CTIM
    /// bundle as pretty JSON on stdout.
    pub fn print_bundle(&self, bundle: &Bundle) -> Result<()> {
        let summary = format!(
            "{} sightings, {} judgements, {} indicators, {} relationships",
            bundle.sightings.len(),
            bundle.judgements.len(),
            bundle.indicators.len(),
            bundle.relationships.len(),
        );
        if self.color {
            eprintln!("{}", summary.dimmed());
        } else {
            eprintln!("{}", summary);
        }

        println!("{}", serde_json::to_string_pretty(bundle)?);
        Ok(())
    }
}
