use crate::areas::repository::Repository;
use crate::artifacts::branch::BranchListing;
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub fn branches(&self) -> anyhow::Result<Vec<BranchListing>> {
        self.ensure_readable()?;
        self.refs().branch_listing()
    }

    /// Print every branch in creation order, marking the attached one
    pub fn branch(&self) -> anyhow::Result<()> {
        let listing = self.branches()?;
        let mut writer = self.writer();

        for BranchListing { name, is_current } in listing {
            if is_current {
                writeln!(writer, "* {}", name.as_ref().green())?;
            } else {
                writeln!(writer, "{name}")?;
            }
        }

        Ok(())
    }
}
