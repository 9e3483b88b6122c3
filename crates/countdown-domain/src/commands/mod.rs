use countdown_core::CountdownResult;

pub mod countdown_commands;

pub use countdown_commands::*;

/// Trait for domain commands that mutate the countdown list
pub trait Command: Send + Sync {
    /// Execute this command, mutating the list
    fn execute(&self, context: &mut CommandContext) -> CountdownResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub entries: &'a mut Vec<crate::CountdownEntry>,
}
