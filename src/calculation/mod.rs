//! Accounting engine.
//!
//! Turns raw time entries into normal/overtime splits per day and aggregates
//! monthly totals and targets. Every function here is a pure read of its
//! inputs and never fails.

mod day_totals;
mod monthly;

pub use day_totals::{HourSplit, day_totals, split_hours};
pub use monthly::{
    count_workdays_in_month, group_by_day, required_hours_for_month, summarize_month,
    total_hours_for_month,
};
