use bmi_core::config::HISTORY_FILE_NAME;
use bmi_core::*;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bmi")]
#[command(version = bmi_core::VERSION)]
#[command(about = "Body Mass Index calculator with saved history", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use a different config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate BMI from weight and height
    Calc {
        /// Weight (kg for metric, lbs for imperial)
        #[arg(long)]
        weight: f64,

        /// Height (cm for metric, feet for imperial)
        #[arg(long)]
        height: f64,

        /// Extra inches on top of the height in feet (imperial only)
        #[arg(long, default_value_t = 0.0)]
        inches: f64,

        /// Unit system (metric, imperial); defaults to the configured one
        #[arg(long, value_parser = parse_unit)]
        unit: Option<UnitSystem>,

        /// Save the result to history
        #[arg(long)]
        save: bool,
    },

    /// Show recent calculations, newest first (default)
    History {
        /// Number of entries to show
        #[arg(long)]
        count: Option<usize>,
    },

    /// Delete all saved calculations
    Clear {
        /// Don't ask for confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Export the full history as CSV
    Export {
        /// Output file
        file: PathBuf,
    },

    /// Inspect or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print a value, e.g. `history.max_entries`
    Get { key: String },
    /// Set a value and save the config file
    Set { key: String, value: String },
    /// Restore defaults and save the config file
    Reset,
}

fn parse_unit(s: &str) -> std::result::Result<UnitSystem, String> {
    s.parse::<UnitSystem>().map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logging::init_with_level(if cli.verbose { "debug" } else { "warn" });

    let config_path = cli.config.unwrap_or_else(Config::default_config_path);
    let config = Config::load_or_default(&config_path)?;

    // Determine history file location
    let history_path = cli
        .data_dir
        .map(|dir| dir.join(HISTORY_FILE_NAME))
        .unwrap_or_else(|| config.history_path());

    match cli.command {
        Some(Commands::Calc {
            weight,
            height,
            inches,
            unit,
            save,
        }) => {
            let unit = unit.unwrap_or(config.units.default);
            cmd_calc(&history_path, &config, weight, height, inches, unit, save)
        }
        Some(Commands::History { count }) => cmd_history(&history_path, &config, count),
        Some(Commands::Clear { yes }) => cmd_clear(&history_path, &config, yes),
        Some(Commands::Export { file }) => cmd_export(&history_path, &config, &file),
        Some(Commands::Config { action }) => cmd_config(&config_path, config, action),
        None => {
            // Default to "history" command
            cmd_history(&history_path, &config, None)
        }
    }
}

fn cmd_calc(
    history_path: &Path,
    config: &Config,
    weight: f64,
    height: f64,
    inches: f64,
    unit: UnitSystem,
    save: bool,
) -> Result<()> {
    let measurement = match unit {
        UnitSystem::Metric => {
            if inches != 0.0 {
                tracing::warn!("--inches is ignored for metric input");
            }
            Measurement::metric(weight, height)
        }
        UnitSystem::Imperial => Measurement::imperial(weight, height, inches),
    };
    measurement.check_plausible()?;
    let result = BmiResult::from_measurement(&measurement)?;

    display_result(&measurement, &result);

    if save {
        let mut store = HistoryStore::open(history_path, &config.history);
        let entry = store.append(&measurement)?;
        println!();
        println!("✓ Saved to history: {}", entry.date_string());
    }

    Ok(())
}

fn cmd_history(history_path: &Path, config: &Config, count: Option<usize>) -> Result<()> {
    let store = HistoryStore::open(history_path, &config.history);

    if store.is_empty() {
        println!("No history yet. Calculate your first BMI with `bmi calc --save`.");
        return Ok(());
    }

    let count = count.unwrap_or(config.history.show_recent_count);
    let recent = store.recent(count);

    println!("BMI HISTORY (showing {} of {})", recent.len(), store.len());
    println!("{}", "=".repeat(40));
    for (i, entry) in recent.iter().enumerate() {
        println!(
            "{:2}. {}: BMI {} ({})",
            i + 1,
            entry.date_string(),
            entry.bmi,
            entry.category
        );
        println!(
            "    Weight: {}, Height: {}",
            format_weight(entry.weight, entry.unit),
            format_height(entry.height, entry.unit)
        );
    }

    Ok(())
}

fn cmd_clear(history_path: &Path, config: &Config, yes: bool) -> Result<()> {
    if !yes && !confirm("Are you sure you want to clear history? (y/n): ")? {
        println!("History kept.");
        return Ok(());
    }

    let mut store = HistoryStore::open(history_path, &config.history);
    let removed = store.len();
    store.clear();

    println!("✓ History cleared ({} entries removed)", removed);
    Ok(())
}

fn cmd_export(history_path: &Path, config: &Config, file: &Path) -> Result<()> {
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let target = file.with_file_name(util::sanitize_filename(&name));

    let store = HistoryStore::open(history_path, &config.history);
    let count = export::write_csv(store.entries(), &target)?;

    println!("✓ Exported {} entries", count);
    println!("  CSV: {}", target.display());
    Ok(())
}

fn cmd_config(config_path: &Path, mut config: Config, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
        ConfigAction::Get { key } => {
            let value = config
                .get(&key)
                .ok_or_else(|| Error::Config(format!("Unknown config key: {}", key)))?;
            println!("{}", value);
        }
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            config.save_to(config_path)?;
            println!("✓ Set {} = {}", key, value);
        }
        ConfigAction::Reset => {
            config.reset();
            config.save_to(config_path)?;
            println!("✓ Configuration reset to defaults");
        }
    }

    Ok(())
}

fn display_result(measurement: &Measurement, result: &BmiResult) {
    let primary = measurement.unit;
    let other = primary.toggled();

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  BMI CALCULATION RESULTS");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!(
        "  Height: {} ({})",
        format_height(measurement.height_cm, primary),
        format_height(measurement.height_cm, other)
    );
    println!(
        "  Weight: {} ({})",
        format_weight(measurement.weight_kg, primary),
        format_weight(measurement.weight_kg, other)
    );
    println!("  BMI: {}", result.bmi);
    println!("  Category: {}", result.category);
    println!("  Color Code: {}", result.color);
    println!();
    println!("  BMI Categories:");
    for category in Category::ALL {
        println!(
            "  • {}: {} ({})",
            category,
            category.range(),
            category.color_name()
        );
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}
