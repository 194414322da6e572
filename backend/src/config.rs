//! Server configuration read from environment variables.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind.
    pub host: String,
    pub port: u16,
    /// SQLite file holding destinations and assignments.
    pub database_path: PathBuf,
    /// Open the planner in the default browser once the server is up.
    pub open_browser: bool,
    /// Fill an empty destinations table with the sample catalog.
    pub seed: bool,
}

impl Config {
    /// Loads the configuration.
    ///
    /// # Environment Variables
    /// - `PLANNER_HOST` (default: `127.0.0.1`)
    /// - `PLANNER_PORT` (default: `8080`)
    /// - `PLANNER_DB` (default: `planner.sqlite`)
    /// - `PLANNER_OPEN_BROWSER` (default: `true`)
    /// - `PLANNER_SEED` (default: `true`)
    ///
    /// # Errors
    /// Returns an error if a variable is set to something unparseable.
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("PLANNER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PLANNER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "PLANNER_PORT must be a valid port number".to_string())?;
        let database_path = env::var("PLANNER_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("planner.sqlite"));
        let open_browser = flag("PLANNER_OPEN_BROWSER", true)?;
        let seed = flag("PLANNER_SEED", true)?;

        Ok(Config {
            host,
            port,
            database_path,
            open_browser,
            seed,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn flag(name: &str, default: bool) -> Result<bool, String> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(format!("{} must be true or false, got '{}'", name, value)),
        },
    }
}
