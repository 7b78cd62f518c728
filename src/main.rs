//! Dino Atlas - Command-line front end
//!
//! Browses the species catalog, finds fossil sites near a place, and runs
//! head-to-head battles between species.

use dino_atlas::battle::constants::ARENA_SUSPENSE_MS;
use dino_atlas::battle::{matchup, BattleOutcome, Outcome};
use dino_atlas::catalog::{self, Catalog, Diet, Period, Species, SpeciesProfile};
use dino_atlas::core::config::{config, set_config};
use dino_atlas::core::error::{AtlasError, Result};
use dino_atlas::core::{AtlasConfig, Coordinate};
use dino_atlas::explore::{explore, period_counts, ExploreQuery, SizeClass, SortKey};
use dino_atlas::geo::{nearby, CoordinateResolver, NearbyReport, RankedSite, StaticResolver};

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Runtime;

/// Dino Atlas - dinosaur catalog, fossil locator and battle arena
#[derive(Parser, Debug)]
#[command(name = "dino-atlas")]
#[command(about = "Explore dinosaur species, find fossil sites near you, and stage battles")]
struct Args {
    /// Config file (TOML); defaults are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding species.toml and sites.toml instead of the built-in data
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List species, optionally filtered and sorted
    Species {
        /// Case-insensitive match on common or scientific name
        #[arg(long)]
        search: Option<String>,

        #[arg(long, value_enum)]
        period: Option<PeriodArg>,

        #[arg(long, value_enum)]
        diet: Option<DietArg>,

        #[arg(long, value_enum)]
        size: Option<SizeArg>,

        #[arg(long, value_enum, default_value_t = SortArg::Name)]
        sort: SortArg,
    },

    /// Show the full record of one species and where it was found
    Show {
        /// Species id (e.g. tyrannosaurus-rex)
        id: String,
    },

    /// Find fossil sites near a city or coordinate
    #[command(group(ArgGroup::new("origin").required(true).args(["place", "lat"])))]
    Near {
        /// City name (e.g. "New York", "London", "Tokyo")
        #[arg(long, conflicts_with_all = ["lat", "lng"])]
        place: Option<String>,

        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,

        /// Search radius in km (overrides config)
        #[arg(long, allow_hyphen_values = true)]
        radius: Option<f64>,

        /// Number of closest alternatives (overrides config)
        #[arg(long)]
        count: Option<usize>,
    },

    /// Pit two species against each other
    Battle {
        /// First species id (e.g. tyrannosaurus-rex)
        first: String,

        /// Second species id (e.g. triceratops)
        second: String,

        /// Milliseconds of suspense before the result (overrides config)
        #[arg(long, conflicts_with = "dramatic")]
        suspense_ms: Option<u64>,

        /// Pause as long as the arena does before revealing the result
        #[arg(long)]
        dramatic: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PeriodArg {
    Triassic,
    Jurassic,
    Cretaceous,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Triassic => Period::Triassic,
            PeriodArg::Jurassic => Period::Jurassic,
            PeriodArg::Cretaceous => Period::Cretaceous,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DietArg {
    Carnivore,
    Herbivore,
    Piscivore,
    Omnivore,
}

impl From<DietArg> for Diet {
    fn from(arg: DietArg) -> Self {
        match arg {
            DietArg::Carnivore => Diet::Carnivore,
            DietArg::Herbivore => Diet::Herbivore,
            DietArg::Piscivore => Diet::Piscivore,
            DietArg::Omnivore => Diet::Omnivore,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SizeArg {
    Small,
    Medium,
    Large,
}

impl From<SizeArg> for SizeClass {
    fn from(arg: SizeArg) -> Self {
        match arg {
            SizeArg::Small => SizeClass::Small,
            SizeArg::Medium => SizeClass::Medium,
            SizeArg::Large => SizeClass::Large,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortArg {
    Name,
    Period,
    Size,
    Speed,
    Strength,
    Discovered,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortKey::Name,
            SortArg::Period => SortKey::Period,
            SortArg::Size => SortKey::Size,
            SortArg::Speed => SortKey::Speed,
            SortArg::Strength => SortKey::Strength,
            SortArg::Discovered => SortKey::Discovered,
        }
    }
}

/// JSON shape of a battle
#[derive(Serialize)]
struct BattleReport<'a> {
    first: &'a str,
    second: &'a str,
    #[serde(flatten)]
    result: &'a BattleOutcome,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dino_atlas=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Some(path) = &args.config {
        let loaded = AtlasConfig::load(path)?;
        tracing::info!("Loaded config from {}", path.display());
        if set_config(loaded).is_err() {
            tracing::warn!("Config already initialized; ignoring {}", path.display());
        }
    }

    let owned;
    let catalog: &Catalog = match &args.data_dir {
        Some(dir) => {
            owned = Catalog::from_dir(dir)?;
            &owned
        }
        None => catalog::shared()?,
    };

    match args.command {
        Command::Species {
            search,
            period,
            diet,
            size,
            sort,
        } => {
            let mut query = ExploreQuery::new().sorted_by(sort.into());
            query.search = search;
            query.period = period.map(Period::from);
            query.diet = diet.map(Diet::from);
            query.size = size.map(SizeClass::from);
            run_species(catalog, &query, args.format)
        }
        Command::Show { id } => run_show(catalog, &id, args.format),
        Command::Near {
            place,
            lat,
            lng,
            radius,
            count,
        } => {
            let query = match (place, lat, lng) {
                (Some(place), _, _) => {
                    let resolver = StaticResolver::builtin();
                    match resolver.resolve(&place) {
                        Some(coordinate) => coordinate,
                        None => {
                            tracing::warn!("Known places: {}", resolver.place_names().join(", "));
                            return Err(AtlasError::UnknownPlace(place));
                        }
                    }
                }
                (None, Some(lat), Some(lng)) => Coordinate::new(lat, lng)?,
                _ => {
                    return Err(AtlasError::UnknownPlace(
                        "no place or coordinate given".to_string(),
                    ))
                }
            };

            // Overrides skip validation; a radius of 0 just finds nothing
            let mut settings = config().clone();
            if let Some(radius) = radius {
                settings.search_radius_km = radius;
            }
            if let Some(count) = count {
                settings.fallback_count = count;
            }

            run_near(catalog, query, &settings, args.format)
        }
        Command::Battle {
            first,
            second,
            suspense_ms,
            dramatic,
        } => {
            let delay = match suspense_ms {
                Some(ms) => ms,
                None if dramatic => ARENA_SUSPENSE_MS,
                None => config().battle_suspense_ms,
            };
            run_battle(catalog, &first, &second, delay, args.format)
        }
    }
}

fn run_species(catalog: &Catalog, query: &ExploreQuery, format: Format) -> Result<()> {
    let found = explore(catalog.species_list(), query);

    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    println!(
        "Showing {} of {} dinosaurs",
        found.len(),
        catalog.species_list().len()
    );
    for species in &found {
        print_species_line(species);
    }

    if query.period.is_none() {
        println!();
        for (period, count) in period_counts(catalog.species_list()) {
            let (from, to) = period.span_mya();
            println!("  {:<10} {}-{} million years ago: {} species", period, from, to, count);
        }
    }
    Ok(())
}

fn print_species_line(species: &Species) {
    println!(
        "  {:<20} {:<28} {:<10} {:<9} {:>5.1}m  SPD {:>3} STR {:>3} INT {:>3} BITE {:>3}",
        species.name,
        species.scientific_name,
        species.period,
        species.diet,
        species.length_m,
        species.stats.speed,
        species.stats.strength,
        species.stats.intelligence,
        species.stats.bite_force,
    );
}

fn run_show(catalog: &Catalog, id: &str, format: Format) -> Result<()> {
    let profile = catalog.profile(id)?;

    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    print_profile(&profile);
    Ok(())
}

fn print_profile(profile: &SpeciesProfile) {
    let s = profile.species;
    println!("{} ({})", s.name, s.scientific_name);
    println!(
        "  {} {}  {:.1}m tall, {:.1}m long  first described {}",
        s.period, s.diet, s.height_m, s.length_m, s.first_discovered
    );
    println!(
        "  SPD {} STR {} INT {} BITE {}  (total {})",
        s.stats.speed,
        s.stats.strength,
        s.stats.intelligence,
        s.stats.bite_force,
        s.stats.total()
    );

    let sections = [
        ("Overview", &s.overview),
        ("Habitat", &s.habitat),
        ("Timeline", &s.timeline),
        ("Discovery", &s.discovery_story),
        ("Brain size", &s.brain_size),
        ("Fossils found", &s.fossils_found),
        ("Fun fact", &s.fun_fact),
        ("Trivia", &s.trivia),
    ];
    for (title, text) in sections {
        if !text.is_empty() {
            println!();
            println!("{}:", title);
            println!("  {}", text);
        }
    }

    println!();
    println!(
        "First found at {} {}",
        s.discovery_location.name, s.discovery_location.coordinate
    );

    if !s.museum_locations.is_empty() {
        println!("Museums:");
        for museum in &s.museum_locations {
            println!("  {}", museum);
        }
    }

    if !profile.sites.is_empty() {
        println!("Fossil sites:");
        for site in &profile.sites {
            println!("  {:<24} {}, {}  [{}]", site.name, site.region, site.country, site.age_range);
        }
    }
}

fn run_near(catalog: &Catalog, query: Coordinate, settings: &AtlasConfig, format: Format) -> Result<()> {
    let report = nearby(query, catalog.sites(), settings);

    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_nearby(catalog, &report);
    Ok(())
}

fn print_nearby(catalog: &Catalog, report: &NearbyReport) {
    if report.needs_fallback() {
        println!(
            "No fossil sites within {:.0} km of {}. Closest alternatives:",
            report.radius_km, report.query
        );
        for ranked in &report.closest {
            print_site_line(catalog, ranked);
        }
        return;
    }

    println!(
        "{} fossil site(s) within {:.0} km of {}:",
        report.within_radius.len(),
        report.radius_km,
        report.query
    );
    for ranked in &report.within_radius {
        print_site_line(catalog, ranked);
    }

    println!();
    println!("Closest overall:");
    for ranked in &report.closest {
        print_site_line(catalog, ranked);
    }
}

fn print_site_line(catalog: &Catalog, ranked: &RankedSite) {
    let site = ranked.site;
    let species: Vec<&str> = catalog.species_at(site).map(|s| s.name.as_str()).collect();
    println!(
        "  {:>6} km  {:<24} {}, {}  [{}]  {}",
        ranked.rounded_km(),
        site.name,
        site.region,
        site.country,
        site.age_range,
        species.join(", ")
    );
}

fn run_battle(catalog: &Catalog, first: &str, second: &str, delay_ms: u64, format: Format) -> Result<()> {
    let first = catalog.require_species(first)?;
    let second = catalog.require_species(second)?;

    let result = matchup(first, second, config().draw_margin)?;

    if delay_ms > 0 {
        // Presentation only; the comparison already finished
        let rt = Runtime::new()?;
        if format == Format::Text {
            println!("{} vs {}...", first.name, second.name);
        }
        rt.block_on(tokio::time::sleep(Duration::from_millis(delay_ms)));
    }

    if format == Format::Json {
        let report = BattleReport {
            first: first.id.as_str(),
            second: second.id.as_str(),
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let headline = match result.outcome {
        Outcome::Draw => "Epic Draw!".to_string(),
        Outcome::Win => format!("{} Wins!", first.name),
        Outcome::Lose => format!("{} Wins!", second.name),
    };
    println!("{}", headline);
    println!("{}", result.description);
    println!(
        "  {:<20} {:>3}\n  {:<20} {:>3}",
        first.name, result.first_score, second.name, result.second_score
    );
    Ok(())
}
