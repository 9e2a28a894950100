//! Application constants and configuration defaults
//!
//! Centralized location for storage keys and default values

/// Storage keys for the persisted collections
pub mod storage {
    /// Key holding the JSON array of planned meals
    pub const MEALS_KEY: &str = "meals";

    /// Key holding the JSON array of shopping list items
    pub const SHOPPING_LIST_KEY: &str = "shoppingList";

    /// SQLite database file name inside the config directory
    pub const DATABASE_FILE_NAME: &str = "mealplan.db";
}

/// UI configuration
pub mod ui {
    /// Config directory name
    pub const CONFIG_DIR_NAME: &str = ".mealplan";

    /// Config file name inside the config directory
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Logs subdirectory name
    pub const LOGS_DIR_NAME: &str = "logs";

    /// Theme used when none is configured
    pub const DEFAULT_THEME: &str = "mealplan";
}
