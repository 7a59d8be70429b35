//! town — headless runner for the sandbox town.
//!
//! Loads a TOML config, optionally restores a JSON save, runs a number of
//! frames, writes the narrative log and daily snapshots, and prints a
//! resident summary.
//!
//! ```text
//! cargo run -p town -- --config demos/town/town.toml --days 3 --out ./output
//! RUST_LOG=town_behavior=debug cargo run -p town -- --days 1
//! ```

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use town_agent::AgentStore;
use town_core::{EventLog, GameTime, SimConfig, UNITS_PER_MINUTE};
use town_output::{JsonFileStore, OutputWriter, SimOutputObserver};
use town_schedule::{JobRegistry, load_jobs_csv};
use town_sim::{Sim, SimBuilder, SimObserver, load_config};
use town_world::load_catalog_csv;

#[derive(Parser, Debug)]
#[command(name = "town", about = "Run the sandbox town headless")]
struct Args {
    /// TOML run configuration; defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Game days to simulate.  Overrides `--frames`.
    #[arg(long)]
    days: Option<u32>,

    /// Frames to run.
    #[arg(long, default_value_t = 1_440)]
    frames: u64,

    /// Directory for the CSV files (and `town.db` with `--features sqlite`).
    #[arg(long, default_value = "output")]
    out: PathBuf,

    /// JSON save file.  Restored at start when present, rewritten at every
    /// day rollover.
    #[arg(long)]
    save: Option<PathBuf>,

    /// Furniture CSV replacing the built-in town.
    #[arg(long)]
    furniture: Option<PathBuf>,

    /// Job ladder CSV replacing the built-in ladders.
    #[arg(long)]
    jobs: Option<PathBuf>,

    /// Override the config seed.
    #[arg(long)]
    seed: Option<u64>,
}

// ── Observer wrapper to count output ─────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:          SimOutputObserver<W>,
    days:           u32,
    narrative_rows: u64,
    log_mark:       u64,
    halted:         Option<String>,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, days: 0, narrative_rows: 0, log_mark: 0, halted: None }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_day(&mut self, time: &GameTime, agents: &AgentStore, jobs: &JobRegistry) {
        self.days += 1;
        info!(day = time.day, residents = agents.len(), "day complete");
        self.inner.on_day(time, agents, jobs);
    }

    fn on_frame_end(&mut self, time: &GameTime, log: &EventLog) {
        self.narrative_rows += log.appended() - self.log_mark;
        self.log_mark = log.appended();
        self.inner.on_frame_end(time, log);
    }

    fn on_halt(&mut self, _time: &GameTime, reason: &str) {
        self.halted = Some(reason.to_owned());
    }

    fn on_sim_end(&mut self, time: &GameTime) {
        self.inner.on_sim_end(time);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path).with_context(|| format!("loading {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    let frames = match args.days {
        Some(days) => frames_for_days(days, config.start_speed)?,
        None => args.frames,
    };

    println!("=== town — sandbox life sim ===");
    println!(
        "Seed: {}  |  Residents: {}  |  Speed: {}  |  Frames: {frames}",
        config.seed, config.initial_agents, config.start_speed
    );
    println!();

    let mut builder = SimBuilder::new(config);
    if let Some(path) = &args.furniture {
        builder = builder.catalog(load_catalog_csv(path).with_context(|| format!("loading {}", path.display()))?);
    }
    if let Some(path) = &args.jobs {
        builder = builder.jobs(load_jobs_csv(path).with_context(|| format!("loading {}", path.display()))?);
    }
    if let Some(path) = &args.save {
        builder = builder.save_store(Box::new(JsonFileStore::new(path)));
    }
    let mut sim = builder.build()?;
    if sim.load()? {
        info!(residents = sim.store.len(), time = %sim.clock.time, "save restored");
    }
    println!(
        "Town: {} objects, {} jobs, {} residents",
        sim.catalog.len(),
        sim.jobs.len(),
        sim.store.len()
    );

    fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    let started = Instant::now();

    #[cfg(feature = "sqlite")]
    let writer = town_output::SqliteWriter::new(&args.out)?;
    #[cfg(not(feature = "sqlite"))]
    let writer = town_output::CsvWriter::new(&args.out)?;

    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));
    if let Err(e) = sim.run_frames(frames, &mut obs) {
        warn!(error = %e, "run stopped early");
    }
    if let Some(e) = obs.inner.take_error() {
        warn!(error = %e, "output error");
    }
    let elapsed = started.elapsed();

    print_summary(&sim);
    println!();
    println!("Ran {frames} frames in {:.2?}", elapsed);
    println!("Days completed: {}  |  Narrative lines: {}", obs.days, obs.narrative_rows);
    if let Some(reason) = &obs.halted {
        println!("Halted: {reason}");
    }
    println!("Output: {}", args.out.display());
    Ok(())
}

/// Frames needed to cover `days` game days at `speed` units per frame.
/// The clock never advances more than one minute per frame.
fn frames_for_days(days: u32, speed: u32) -> Result<u64> {
    anyhow::ensure!(speed > 0, "start_speed is 0; the clock would never move");
    let per_minute = (UNITS_PER_MINUTE as u64).div_ceil(u64::from(speed)).max(1);
    Ok(u64::from(days) * 24 * 60 * per_minute)
}

fn print_summary(sim: &Sim) {
    println!("{}", sim.clock.time);
    println!("{:<20} {:<18} {:>8} {:>6}  {}", "Resident", "Job", "Money", "Mood", "Doing");
    for agent in sim.store.iter() {
        let job = sim.jobs.job(agent.career.job).map_or("?", |j| j.title.as_str());
        println!(
            "{:<20} {:<18} {:>8} {:>6.1}  {:?}",
            agent.name, job, agent.wallet.money, agent.mood, agent.behavior.action
        );
    }

    println!();
    println!("Latest news:");
    for entry in sim.log.iter().take(10) {
        println!("  [{}] {}: {}", entry.time, entry.actor, entry.text);
    }
}
