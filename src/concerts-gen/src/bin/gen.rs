use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use clap::ValueEnum;
use concerts_gen::db::Store;
use concerts_gen::db::TABLE_ARTISTS;
use concerts_gen::db::TABLE_SHOWS;
use concerts_gen::db::TABLE_VENUES;
use concerts_gen::defaults::DATABASE_PATH;
use concerts_gen::defaults::DATA_PATH;
use concerts_gen::generator;
use concerts_gen::sources::Sources;
use concerts_gen::Generator;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use tracing::info;
use tracing::metadata::LevelFilter;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
        .into()
    }
}

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
    /// Seed for a reproducible dataset. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let rng = match args.seed {
        None => StdRng::from_entropy(),
        Some(seed) => {
            debug!("seed: {seed}");
            StdRng::seed_from_u64(seed)
        }
    };

    let sources = Sources::load(&PathBuf::from(DATA_PATH))?;
    let mut gen = Generator::new(rng, generator::Config::new(Utc::now()));
    let dataset = gen.generate(&sources)?;

    info!("writing {DATABASE_PATH}...");
    let mut store = Store::open(DATABASE_PATH)?;
    store.reset()?;
    store.write(&dataset)?;

    info!(
        "successfully generated {} artist(s), {} venue(s), {} show(s)",
        store.count(TABLE_ARTISTS)?,
        store.count(TABLE_VENUES)?,
        store.count(TABLE_SHOWS)?
    );

    Ok(())
}
