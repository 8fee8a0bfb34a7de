use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use formulab::catalog::{load_catalog, Catalog, Category, Item, Selection};
use formulab::estimate::{RankModel, Survey, SurveyConfig, SurveyReport};
use formulab::search::{LineupSearch, RankedLineup, SearchConfig};

#[derive(Debug, Parser)]
#[command(name = "formulab", version, about = "F1 fantasy lineup search")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct CatalogArgs {
    /// Driver CSV (driver,cost,points_2024)
    #[arg(long)]
    drivers: PathBuf,

    /// Team CSV (team,cost,points_2024)
    #[arg(long)]
    teams: PathBuf,

    /// Budget cap shared by all picks
    #[arg(long, default_value_t = 100.0)]
    budget: f64,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Survey every lineup with nothing pinned
    Survey {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Rank completions of a partial lineup
    Rank {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Pin a driver by display name (repeatable)
        #[arg(long = "pin-driver")]
        pin_drivers: Vec<String>,

        /// Pin a team by display name (repeatable)
        #[arg(long = "pin-team")]
        pin_teams: Vec<String>,

        /// Number of lineups to show
        #[arg(long, default_value_t = 5)]
        top: usize,

        /// Survey the loaded catalog for rank constants instead of using
        /// the built-in ones
        #[arg(long)]
        calibrate: bool,
    },
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("formulab=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("formulab=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Survey { catalog } => {
            let config = SearchConfig::default().with_budget_cap(catalog.budget);
            let catalog = load_catalog(&catalog.drivers, &catalog.teams)?;
            survey(&catalog, &config)
        }
        Command::Rank {
            catalog,
            pin_drivers,
            pin_teams,
            top,
            calibrate,
        } => {
            let config = SearchConfig::default()
                .with_budget_cap(catalog.budget)
                .with_top_n(top);
            let catalog = load_catalog(&catalog.drivers, &catalog.teams)?;
            let selection = Selection::from_picks(pin_drivers, pin_teams);
            let model = if calibrate {
                let report = Survey::run(&catalog, &config, &SurveyConfig::default())?;
                RankModel::from_report(&report)?
            } else {
                RankModel::default()
            };
            rank(&catalog, &config, &selection, &model)
        }
    }
}

fn survey(catalog: &Catalog, config: &SearchConfig) -> Result<(), Box<dyn std::error::Error>> {
    let report = Survey::run(catalog, config, &SurveyConfig::default())?;

    println!("Lineups examined: {}", report.examined);
    println!("Within budget:    {}", report.feasible);
    for (label, lineup) in extremes(&report) {
        match lineup {
            Some(lineup) => {
                println!();
                println!("{label} Points Combination:");
                println!("Total Points: {:.1}", lineup.total_score);
                println!("Total Cost: {:.1}M", lineup.total_cost);
                print_items("Drivers", &lineup.drivers);
                print_items("Teams", &lineup.teams);
            }
            None => println!("{label}: no lineup fits the budget"),
        }
    }
    Ok(())
}

/// Survey extremes in display order, lowest first.
fn extremes(report: &SurveyReport) -> [(&'static str, &Option<RankedLineup>); 2] {
    [("Lowest", &report.worst), ("Highest", &report.best)]
}

fn print_items(heading: &str, items: &[Item]) {
    println!("{heading}:");
    for item in items {
        println!("- {}: {:.1} points, {:.1}M", item.name, item.score, item.cost);
    }
}

fn rank(
    catalog: &Catalog,
    config: &SearchConfig,
    selection: &Selection,
    model: &RankModel,
) -> Result<(), Box<dyn std::error::Error>> {
    let search = LineupSearch::new(catalog, config.clone())?;

    let pinned = catalog.selection_totals(selection)?;
    let value = if pinned.cost > 0.0 {
        pinned.score / pinned.cost
    } else {
        0.0
    };
    println!(
        "Pinned: {:.0} points | {:.1}M/{:.0}M | value {:.2}",
        pinned.score,
        pinned.cost,
        search.config().budget_cap,
        value
    );

    let count = search.count(selection)?;
    println!("{count} valid combinations with the current selection.");

    let lineups = search.rank(selection)?;
    if lineups.is_empty() {
        println!("No valid combinations found with the current selection and budget.");
        return Ok(());
    }

    for (i, lineup) in lineups.iter().enumerate() {
        println!();
        println!(
            "Combination {} (~{}/{}) | Points: {:.0} | Cost: {:.1}M | Value: {:.2}",
            i + 1,
            model.estimate(lineup.total_score),
            model.total_count,
            lineup.total_score,
            lineup.total_cost,
            lineup.value_ratio()
        );
        for category in Category::ALL {
            let added = match category {
                Category::Driver => &lineup.drivers,
                Category::Team => &lineup.teams,
            };
            let labels: Vec<String> = selection
                .picks(category)
                .iter()
                .map(|name| format!("*{name}"))
                .chain(added.iter().map(|item| item.name.clone()))
                .collect();
            println!("  {}s: {}", category, labels.join(", "));
        }
        print_contributions(catalog, selection, lineup);
    }
    Ok(())
}

fn print_contributions(catalog: &Catalog, selection: &Selection, lineup: &RankedLineup) {
    let pinned = Category::ALL.into_iter().flat_map(move |category| {
        selection
            .picks(category)
            .iter()
            .filter_map(move |name| catalog.find(category, name))
    });
    for item in pinned.chain(lineup.drivers.iter()).chain(lineup.teams.iter()) {
        println!(
            "    {} (Points: {:.0}, Cost: {:.1}M, Value: {:.2}, Contribution: {:.1}%)",
            item.name,
            item.score,
            item.cost,
            item.value_ratio(),
            lineup.contribution(item)
        );
    }
}
