//! The job registry: every career ladder plus the unemployed sentinel.

use rustc_hash::FxHashMap;

use town_core::JobId;
use town_world::ObjectCatalog;

use crate::{CompanyType, Job, ScheduleError, ScheduleResult, Weekdays};

/// Key of the level-0 sentinel, always `JobId(0)`.
pub const UNEMPLOYED_KEY: &str = "unemployed";

/// All jobs, indexed by `JobId`.  `JobId(0)` is always "unemployed".
#[derive(Clone, Debug)]
pub struct JobRegistry {
    jobs:   Vec<Job>,
    by_key: FxHashMap<String, JobId>,
}

impl Default for JobRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl JobRegistry {
    /// A registry holding only the unemployed sentinel.
    pub fn new() -> Self {
        let unemployed = Job {
            id:         JobId(0),
            key:        UNEMPLOYED_KEY.to_owned(),
            title:      "Unemployed".to_owned(),
            company:    CompanyType::None,
            level:      0,
            salary:     0,
            start_hour: 0,
            end_hour:   0,
            weekdays:   Weekdays::NONE,
        };
        let mut by_key = FxHashMap::default();
        by_key.insert(UNEMPLOYED_KEY.to_owned(), JobId(0));
        Self { jobs: vec![unemployed], by_key }
    }

    /// Add a job and return its id.
    ///
    /// Fails on a duplicate key, an empty or inverted shift, or a level-0
    /// job (level 0 is reserved for the sentinel).
    #[allow(clippy::too_many_arguments)]
    pub fn add(
        &mut self,
        key:        &str,
        title:      &str,
        company:    CompanyType,
        level:      u8,
        salary:     i64,
        start_hour: u8,
        end_hour:   u8,
        weekdays:   Weekdays,
    ) -> ScheduleResult<JobId> {
        if self.by_key.contains_key(key) {
            return Err(ScheduleError::DuplicateJob(key.to_owned()));
        }
        if start_hour >= end_hour || end_hour > 24 {
            return Err(ScheduleError::InvalidShift { key: key.to_owned(), start: start_hour, end: end_hour });
        }
        if level == 0 || company == CompanyType::None {
            return Err(ScheduleError::Parse(format!(
                "job {key:?}: level 0 and company \"none\" are reserved for unemployed"
            )));
        }
        let id = JobId(self.jobs.len() as u16);
        self.jobs.push(Job {
            id,
            key: key.to_owned(),
            title: title.to_owned(),
            company,
            level,
            salary,
            start_hour,
            end_hour,
            weekdays,
        });
        self.by_key.insert(key.to_owned(), id);
        Ok(id)
    }

    /// The shipped ladders: five companies, four rungs each.
    pub fn default_ladders() -> Self {
        use CompanyType::{Business, Design, Internet, Restaurant, Store};
        let wk = Weekdays::range;
        let ladders: [(&str, &str, CompanyType, u8, i64, u8, u8, Weekdays); 20] = [
            ("dev_intern",       "Dev Intern",       Internet,   1, 300,  9,  18, wk(1, 5)),
            ("developer",        "Developer",        Internet,   2, 600,  10, 19, wk(1, 5)),
            ("senior_dev",       "Senior Developer", Internet,   3, 1000, 10, 18, wk(1, 5)),
            ("cto",              "CTO",              Internet,   4, 2000, 11, 17, wk(1, 5)),
            ("design_intern",    "Design Intern",    Design,     1, 250,  9,  18, wk(1, 5)),
            ("designer",         "Designer",         Design,     2, 500,  10, 19, wk(1, 5)),
            ("senior_designer",  "Senior Designer",  Design,     3, 800,  10, 18, wk(1, 5)),
            ("art_director",     "Art Director",     Design,     4, 1600, 11, 16, wk(1, 4)),
            ("biz_intern",       "Business Intern",  Business,   1, 200,  8,  17, wk(1, 5)),
            ("clerk_biz",        "Business Clerk",   Business,   2, 450,  9,  17, wk(1, 6)),
            ("biz_supervisor",   "Supervisor",       Business,   3, 900,  9,  17, wk(1, 5)),
            ("manager",          "Manager",          Business,   4, 1800, 10, 16, wk(1, 5)),
            ("store_trainee",    "Store Trainee",    Store,      1, 150,  8,  16, wk(1, 6)),
            ("clerk_book",       "Bookstore Clerk",  Store,      2, 250,  9,  17, wk(1, 7)),
            ("store_supervisor", "Store Supervisor", Store,      3, 400,  9,  18, wk(1, 6)),
            ("store_manager",    "Store Manager",    Store,      4, 600,  10, 17, wk(1, 5)),
            ("kitchen_helper",   "Kitchen Helper",   Restaurant, 1, 160,  10, 20, wk(1, 7)),
            ("waiter",           "Waiter",           Restaurant, 2, 280,  11, 20, wk(1, 7)),
            ("cook",             "Cook",             Restaurant, 3, 500,  10, 20, wk(1, 6)),
            ("head_chef",        "Head Chef",        Restaurant, 4, 800,  10, 19, wk(1, 5)),
        ];

        let mut reg = Self::new();
        for (key, title, company, level, salary, start, end, days) in ladders {
            let added = reg.add(key, title, company, level, salary, start, end, days);
            debug_assert!(added.is_ok(), "built-in ladder entry {key} rejected");
        }
        reg
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn unemployed(&self) -> JobId {
        JobId(0)
    }

    #[inline]
    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.get(id.index())
    }

    /// Like [`get`](Self::get) but a missing id is an error.
    pub fn job(&self, id: JobId) -> ScheduleResult<&Job> {
        self.get(id).ok_or(ScheduleError::JobNotFound(id))
    }

    pub fn by_key(&self, key: &str) -> Option<JobId> {
        self.by_key.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// The rung one above `id` in the same company, if any.
    pub fn next_level(&self, id: JobId) -> Option<JobId> {
        let job = self.get(id)?;
        if job.is_unemployed() {
            return None;
        }
        self.jobs
            .iter()
            .find(|j| j.company == job.company && j.level == job.level + 1)
            .map(|j| j.id)
    }

    /// Highest level present for `company`.
    pub fn top_level(&self, company: CompanyType) -> u8 {
        self.jobs.iter().filter(|j| j.company == company).map(|j| j.level).max().unwrap_or(0)
    }

    // ── Capacity ──────────────────────────────────────────────────────────

    /// How many agents may hold `id` at once.  `None` means unlimited
    /// (unemployed) or an unknown id.
    ///
    /// The count is the number of workstations whose label contains the
    /// job's desk keyword.  Store and restaurant jobs get at least two
    /// slots, doubled below level 3.  Every real job has at least one slot.
    pub fn capacity(&self, id: JobId, catalog: &ObjectCatalog) -> Option<usize> {
        let job = self.get(id)?;
        let keyword = job.desk_keyword()?;
        let mut cap = catalog.work_objects(keyword).count();
        if matches!(job.company, CompanyType::Store | CompanyType::Restaurant) {
            cap = cap.max(2);
            if job.level < 3 {
                cap *= 2;
            }
        }
        Some(cap.max(1))
    }

    /// Capacity of every job, indexed by `JobId`.
    pub fn capacity_table(&self, catalog: &ObjectCatalog) -> Vec<Option<usize>> {
        self.jobs.iter().map(|j| self.capacity(j.id, catalog)).collect()
    }
}
