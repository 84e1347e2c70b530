/// Human-readable end-of-run summary.
use std::fmt;

use bootanim_shared::models::RunSummary;

pub struct Report<'a> {
    summary: &'a RunSummary,
    catalog_len: usize,
}

impl<'a> Report<'a> {
    pub fn new(summary: &'a RunSummary, catalog_len: usize) -> Self {
        Self { summary, catalog_len }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "--- Summary ---")?;
        writeln!(f, "Total videos: {}", self.catalog_len)?;
        writeln!(f, "Successfully processed: {}", summary.successful.len())?;
        writeln!(f, "Skipped (already exist): {}", summary.skipped.len())?;
        writeln!(f, "Failed: {}", summary.failed.len())?;

        if !summary.skipped.is_empty() {
            writeln!(f, "\nSkipped items (already exist):")?;
            for item in &summary.skipped {
                writeln!(f, "- {}", item)?;
            }
        }

        if !summary.failed.is_empty() {
            writeln!(f, "\nFailed items:")?;
            for item in &summary.failed {
                writeln!(f, "- {}", item)?;
            }
        }

        if !summary.warnings.is_empty() {
            writeln!(f, "\nConverted with cleanup warnings:")?;
            for (item, reason) in &summary.warnings {
                writeln!(f, "- {}: {}", item, reason)?;
            }
        }

        Ok(())
    }
}
