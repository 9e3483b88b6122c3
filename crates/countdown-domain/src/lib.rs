pub mod commands;
pub mod entry;
pub mod remaining;
pub mod view;

pub use commands::{AddCountdown, Command, CommandContext, DeleteCountdown, MISSING_FIELDS_MESSAGE};
pub use entry::{parse_target_date, CountdownEntry};
pub use remaining::{CountdownLabel, Remaining, COMPLETED_LABEL, INVALID_DATE_LABEL, PENDING_LABEL};
pub use view::{
    CountdownItemView, PageState, PageView, EMPTY_MESSAGE, LOADING_MESSAGE, LOAD_ERROR_MESSAGE,
};
