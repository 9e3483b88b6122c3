use super::{Command, CommandContext};
use crate::CountdownEntry;
use countdown_core::{CountdownError, CountdownResult};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in both the title and the date.";

/// Append a countdown to the end of the list
pub struct AddCountdown {
    pub title: String,
    pub target_date: String,
}

impl AddCountdown {
    /// Titles are trimmed; the date is kept as entered.
    pub fn new(title: &str, target_date: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            target_date: target_date.to_string(),
        }
    }
}

impl Command for AddCountdown {
    fn execute(&self, context: &mut CommandContext) -> CountdownResult<()> {
        if self.title.is_empty() || self.target_date.is_empty() {
            return Err(CountdownError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }

        context
            .entries
            .push(CountdownEntry::new(self.title.clone(), self.target_date.clone()));
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add countdown \"{}\"", self.title)
    }
}

/// Remove the countdown at a list position
pub struct DeleteCountdown {
    pub index: usize,
}

impl Command for DeleteCountdown {
    fn execute(&self, context: &mut CommandContext) -> CountdownResult<()> {
        if self.index >= context.entries.len() {
            return Err(CountdownError::NotFound(format!(
                "no countdown at position {}",
                self.index
            )));
        }

        context.entries.remove(self.index);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete countdown at position {}", self.index)
    }
}
