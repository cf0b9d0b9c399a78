//! `teamsync` command-line front end

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use std::time::Duration;
use teamsync_core::{Dashboard, DashboardConfig, TaskStatus};
use teamsync_live::{share, simulate, EventSource, LiveFeed, RngSource};
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_parser(value_parser!(PathBuf))
        .help("TOML configuration file")
}

fn seed_arg() -> Arg {
    Arg::new("seed")
        .long("seed")
        .value_parser(value_parser!(u64))
        .help("Random seed for reproducibility")
}

fn load_config(args: &ArgMatches) -> anyhow::Result<DashboardConfig> {
    match args.get_one::<PathBuf>("config") {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(DashboardConfig::default()),
    }
}

fn random_source(args: &ArgMatches) -> RngSource<rand::rngs::StdRng> {
    match args.get_one::<u64>("seed") {
        Some(seed) => RngSource::seeded(*seed),
        None => RngSource::from_entropy(),
    }
}

fn print_board(dashboard: &Dashboard) {
    for status in TaskStatus::ALL {
        let column: Vec<_> = dashboard.task_store().by_status(status).collect();
        println!("{} ({})", status.label(), column.len());
        for task in column {
            println!(
                "  #{} {} [{:?}] - {} - due {}",
                task.id, task.title, task.priority, task.assignee, task.due_date
            );
        }
        println!();
    }
}

fn print_feed(dashboard: &Dashboard) {
    println!("Activity");
    for entry in dashboard.activity_log().iter() {
        println!("  {} ({})", entry.headline(), entry.time);
    }
}

async fn run_live(args: &ArgMatches) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let seconds = args
        .get_one::<u64>("seconds")
        .copied()
        .context("missing --seconds")?;
    let settings = config.live;

    let shared = share(Dashboard::new(config));
    let mut toasts = shared.lock().subscribe_toasts();
    let feed = LiveFeed::spawn(shared.clone(), &settings, random_source(args))?;

    println!(
        "Live feed running for {}s (period {:?}), Ctrl-C to stop",
        seconds,
        feed.period()
    );

    let deadline = tokio::time::sleep(Duration::from_secs(seconds));
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            _ = &mut deadline => break,
            _ = tokio::signal::ctrl_c() => break,
            received = toasts.recv() => match received {
                Ok(toast) => println!("[{:?}] {}", toast.kind, toast.message),
                Err(RecvError::Lagged(skipped)) => tracing::warn!("Skipped {} toasts", skipped),
                Err(RecvError::Closed) => break,
            },
        }
    }

    let stats = feed.shutdown().await?;
    println!();
    println!("Ticks: {}  Events: {}", stats.ticks, stats.fired);
    print_feed(&shared.lock());
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Command::new("teamsync")
        .version(teamsync_live::VERSION)
        .about("TeamSync task board and live activity feed")
        .subcommand_required(true)
        .subcommand(
            Command::new("board")
                .about("Print the task board")
                .arg(config_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output the full dashboard snapshot as JSON"),
                ),
        )
        .subcommand(
            Command::new("simulate")
                .about("Run the simulated event source without a timer")
                .arg(
                    Arg::new("ticks")
                        .long("ticks")
                        .default_value("30")
                        .value_parser(value_parser!(u64))
                        .help("Number of timer firings to simulate"),
                )
                .arg(seed_arg().default_value("42"))
                .arg(config_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output the report as JSON"),
                ),
        )
        .subcommand(
            Command::new("run")
                .about("Run the live feed in real time")
                .arg(
                    Arg::new("seconds")
                        .long("seconds")
                        .default_value("60")
                        .value_parser(value_parser!(u64))
                        .help("How long to keep the feed running"),
                )
                .arg(seed_arg())
                .arg(config_arg()),
        );

    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("board", args)) => {
            let dashboard = Dashboard::new(load_config(args)?);
            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&dashboard.snapshot())?);
            } else {
                print_board(&dashboard);
                print_feed(&dashboard);
            }
        }
        Some(("simulate", args)) => {
            let config = load_config(args)?;
            let ticks = args
                .get_one::<u64>("ticks")
                .copied()
                .context("missing --ticks")?;
            let mut source = EventSource::new(random_source(args), &config.live)?;
            let mut dashboard = Dashboard::new(config);

            let report = simulate(&mut dashboard, &mut source, ticks);
            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.generate_text());
                println!("Activity");
                for entry in &report.entries {
                    println!("  {} ({})", entry.headline(), entry.time);
                }
            }
        }
        Some(("run", args)) => run_live(args).await?,
        _ => {}
    }

    Ok(())
}
