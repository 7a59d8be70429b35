//! `town-schedule` — careers, shifts, and the calendar rules that gate them.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`job`]       | `Job`, `CompanyType`, `Weekdays`                          |
//! | [`registry`]  | `JobRegistry` (ladders, next level, desk capacity)        |
//! | [`calendar`]  | `HOLIDAYS`, `DayKind`                                     |
//! | [`loader`]    | `load_jobs_csv`, `load_jobs_reader`                       |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Shift model (summary)
//!
//! A job works on `weekdays` except holidays, from `start_hour` inclusive to
//! `end_hour` exclusive.  Checked once per simulated minute by the career
//! scheduler in `town-behavior`:
//!
//! ```text
//! works_today  = !holiday && weekdays.contains(weekday)
//! on_shift     = works_today && start_hour <= hour < end_hour
//! ```

pub mod calendar;
pub mod error;
pub mod job;
pub mod loader;
pub mod registry;


pub use calendar::{DayKind, HOLIDAYS, Holiday};
pub use error::{ScheduleError, ScheduleResult};
pub use job::{CompanyType, Job, Weekdays};
pub use loader::{load_jobs_csv, load_jobs_reader};
pub use registry::JobRegistry;
