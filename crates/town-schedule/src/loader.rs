//! CSV job-ladder loader.
//!
//! # CSV format
//!
//! One row per job.  The unemployed sentinel is implicit and must not appear.
//!
//! ```csv
//! key,title,company,level,salary,start_hour,end_hour,weekdays
//! barista,Barista,restaurant,1,180,7,15,1-6
//! head_barista,Head Barista,restaurant,2,320,7,15,"1-3,5"
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{CompanyType, JobRegistry, ScheduleError, ScheduleResult, Weekdays};

#[derive(Deserialize)]
struct JobRecord {
    key:        String,
    title:      String,
    company:    String,
    level:      u8,
    salary:     i64,
    start_hour: u8,
    end_hour:   u8,
    weekdays:   String,
}

/// Load a job registry from a CSV file.
pub fn load_jobs_csv(path: &Path) -> ScheduleResult<JobRegistry> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_jobs_reader(file)
}

/// Like [`load_jobs_csv`] but accepts any `Read` source.
pub fn load_jobs_reader<R: Read>(reader: R) -> ScheduleResult<JobRegistry> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut reg = JobRegistry::new();

    for result in csv_reader.deserialize::<JobRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        let company: CompanyType = row.company.parse()?;
        let weekdays: Weekdays = row.weekdays.parse()?;
        reg.add(
            row.key.trim(),
            row.title.trim(),
            company,
            row.level,
            row.salary,
            row.start_hour,
            row.end_hour,
            weekdays,
        )?;
    }

    Ok(reg)
}
