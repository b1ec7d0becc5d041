//! Work-hour accounting with the Latvian public holiday calendar.
//!
//! This crate splits logged hours into normal and overtime hours per day,
//! derives the monthly workday and required-hour targets, and renders
//! printable monthly reports.
//!
//! - [`calendar`]: holidays and weekend/holiday/workday classification
//! - [`calculation`]: day totals and month summaries
//! - [`store`]: tolerant readers for the browser-style key-value store
//! - [`report`]: `lv-LV` text and HTML rendering
//! - [`config`] and [`cli`]: the `worklog` command-line tool

#![warn(missing_docs)]

pub mod calculation;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
