use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    // HTTP server
    pub host: String,
    pub port: u16,

    // SQLite
    /// Database file, created on first start if missing
    pub database_path: PathBuf,
    pub db_pool_size: u32,

    // Frontend bundle
    /// Directory served for every path not claimed by the API
    pub static_root: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenv::dotenv().ok();

        let base_dir = executable_dir();

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()?,

            database_path: std::env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| base_dir.join("data.db")),
            db_pool_size: std::env::var("DB_POOL_SIZE")
                .unwrap_or_else(|_| "5".to_string())
                .parse()?,

            static_root: std::env::var("STATIC_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| base_dir.join("..")),
        })
    }

    /// Listen address in `host:port` form
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Directory holding the running binary; falls back to the working directory
/// when the executable path cannot be resolved.
fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_addr() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 5000,
            database_path: PathBuf::from("data.db"),
            db_pool_size: 5,
            static_root: PathBuf::from("."),
        };

        assert_eq!(config.listen_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_executable_dir_is_absolute() {
        // current_exe() always resolves for the test harness
        assert!(executable_dir().is_absolute());
    }
}
