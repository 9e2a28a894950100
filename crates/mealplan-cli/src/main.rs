//! mealplan - weekly meal planner for the terminal
//!
//! Plan meals for each day of the week, then turn their ingredients into a
//! shopping list you can check off. State is kept in a local SQLite file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mealplan_core::{
    paths, Config, Database, KeyValueStore, MemoryStore, Planner, SqliteStore, Weekday,
};

mod tui;

/// mealplan - Weekly meal planner
#[derive(Parser)]
#[command(name = "mealplan")]
#[command(about = "Plan your meals for the week and shop smarter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Database file (defaults to ~/.mealplan/mealplan.db)
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Theme name
    #[arg(short, long)]
    theme: Option<String>,

    /// Keep everything in memory for this session; nothing is saved
    #[arg(long)]
    ephemeral: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the planner (default)
    Tui,

    /// Print the weekly plan
    Plan,

    /// Print the shopping list
    List,

    /// List available themes
    Themes,
}

/// Effective settings after merging flags, config file and defaults
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    theme: String,
    database_path: PathBuf,
}

impl Settings {
    /// Command line flags win over the config file, which wins over defaults
    fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            theme: cli
                .theme
                .clone()
                .unwrap_or_else(|| config.theme_or_default().to_string()),
            database_path: cli
                .db
                .clone()
                .unwrap_or_else(|| config.database_path_or_default()),
        }
    }
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableBracketedPaste,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
}

/// Log to a file, never to the terminal the TUI draws on
fn init_logging() {
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    let Ok(log_file) = std::fs::File::create(log_dir.join("mealplan.log")) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

/// Open the backing store: SQLite at `settings.database_path`, or memory
fn open_store(settings: &Settings, ephemeral: bool) -> Result<Box<dyn KeyValueStore>> {
    if ephemeral {
        tracing::info!("Using in-memory store");
        return Ok(Box::new(MemoryStore::new()));
    }

    let db = Database::new(&settings.database_path).with_context(|| {
        format!(
            "Failed to open database at {}",
            settings.database_path.display()
        )
    })?;
    tracing::info!(path = %settings.database_path.display(), "Opened database");
    Ok(Box::new(SqliteStore::new(db)))
}

/// Weekly plan as plain text, Monday to Sunday
fn format_plan(planner: &Planner) -> String {
    let mut out = String::new();
    for day in Weekday::ALL {
        out.push_str(day.as_str());
        out.push('\n');

        let meals = planner.meals_for_day(day);
        if meals.is_empty() {
            out.push_str("  No meals planned\n");
        }
        for meal in meals {
            out.push_str(&format!("  {} ({})\n", meal.name, meal.meal_type));
            if !meal.ingredients.is_empty() {
                out.push_str(&format!("    {}\n", meal.ingredients.join(", ")));
            }
        }
    }
    out
}

/// Shopping list as plain text checkboxes
fn format_shopping_list(planner: &Planner) -> String {
    let items = planner.shopping_list();
    if items.is_empty() {
        return "No items in your shopping list\nAdd meals to your planner and generate a list\n"
            .to_string();
    }

    let mut out = String::new();
    for item in items {
        let mark = if item.checked { "x" } else { " " };
        out.push_str(&format!("[{}] {}\n", mark, item.name));
    }
    let (checked, total) = planner.shopping_progress();
    out.push_str(&format!("\n{}/{} checked\n", checked, total));
    out
}

#[tokio::main]
async fn main() -> Result<()> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    init_logging();

    let cli = Cli::parse();
    let config = Config::load_default();
    let settings = Settings::resolve(&cli, &config);

    if tui::THEME_REGISTRY.get(&settings.theme).is_none() {
        tracing::warn!(theme = %settings.theme, "Unknown theme, using default");
    }

    match cli.command {
        Some(Commands::Themes) => {
            println!("Available themes ({}):", tui::THEME_REGISTRY.count());
            for (name, theme) in tui::THEME_REGISTRY.list() {
                println!("  {} - {}", name, theme.display_name);
            }
        }
        Some(Commands::Plan) => {
            let planner = Planner::load(open_store(&settings, cli.ephemeral)?);
            print!("{}", format_plan(&planner));
        }
        Some(Commands::List) => {
            let planner = Planner::load(open_store(&settings, cli.ephemeral)?);
            print!("{}", format_shopping_list(&planner));
        }
        Some(Commands::Tui) | None => {
            let planner = Planner::load(open_store(&settings, cli.ephemeral)?);
            let mut app = tui::App::new(planner, &settings.theme);
            app.run().await?;
        }
    }

    Ok(())
}
