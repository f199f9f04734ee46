mod aggregate;
mod progress;

pub use aggregate::{spending_by_category, summarize};
pub use progress::{progress_of, Progress, Tier, ALERT_RED, WARNING_ORANGE};
