//! Simulation Binary
//!
//! Runs one all-bot draft against an in-memory catalog and prints what
//! each seat ended up with.
//!
//! Options: --drafters, --set, --size, --library, --seed, --delay, --shark, --events

use boosterdraft::*;
use clap::Parser;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Run a full bot draft and print the pools", long_about = None)]
struct Args {
    /// Seats at the table
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(2..=8))]
    drafters: u8,
    /// Set code for the synthetic catalog
    #[arg(long, default_value = "sim")]
    set: String,
    /// Scale of the synthetic catalog
    #[arg(long, default_value_t = 20)]
    size: usize,
    /// JSON list of printings to draft from instead of a synthetic set
    #[arg(long)]
    library: Option<std::path::PathBuf>,
    /// Seed for boosters, seating and picks
    #[arg(long)]
    seed: Option<u64>,
    /// Autopick delay in milliseconds
    #[arg(long, default_value_t = 1)]
    delay: u64,
    /// Rarity-weighted bots instead of uniform ones
    #[arg(long)]
    shark: bool,
    /// Print every event as JSON
    #[arg(long)]
    events: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    let args = Args::parse();
    let library = match args.library {
        Some(ref path) => Library::load(path)?,
        None => Library::synthetic(&args.set, args.size),
    };
    let picker: Arc<dyn Picker> = match args.shark {
        true => Arc::new(Shark::default()),
        false => Arc::new(Fish),
    };
    let mut config = SessionConfig::from_env().with_autopick(Duration::from_millis(args.delay));
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let store = Arc::new(MemoryStore::default());
    let (outbox, mut events) = Outbox::new();
    let registry = Arc::new(Registry::new(
        store.clone(),
        Arc::new(library),
        Arc::new(outbox),
        picker,
        config,
    ));
    let seats = args.drafters as usize;
    let id = registry
        .create(DraftConfig::default().with_capacity(seats).shuffled())
        .await?;
    for _ in 0..seats {
        registry.join(id, ID::default(), true).await?;
    }
    registry.start(id).await?;
    while let Some((_, event)) = events.recv().await {
        if args.events {
            println!("{}", event.to_json());
        }
        if event == Event::DraftCompleted {
            break;
        }
    }
    let record = store.load_draft_config(id).await?;
    let mut pools = BTreeMap::<usize, Vec<Card>>::new();
    for pick in store.picks(id).await? {
        let seat = record
            .seating
            .iter()
            .position(|d| *d == pick.drafter())
            .unwrap_or_default();
        pools.entry(seat).or_default().push(pick.card().clone());
    }
    for (seat, cards) in pools {
        let tally = Rarity::all()
            .iter()
            .map(|r| {
                let n = cards.iter().filter(|c| c.rarity() == *r).count();
                format!("{}{:<2}", r.symbol(), n)
            })
            .collect::<Vec<_>>()
            .join(" ");
        let foils = cards.iter().filter(|c| c.foil()).count();
        println!("seat {} {:>2} picks  {}  foil {}", seat, cards.len(), tally, foils);
    }
    Ok(())
}
