use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the movies table (title, overview, release data, scores)
    #[serde(default = "default_movies_csv")]
    pub movies_csv: String,

    /// Path to the cast credits table
    #[serde(default = "default_cast_csv")]
    pub cast_csv: String,

    /// Path to the crew credits table
    #[serde(default = "default_crew_csv")]
    pub crew_csv: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_movies_csv() -> String {
    "./Dataset/df_movies.csv".to_string()
}

fn default_cast_csv() -> String {
    "./Dataset/df_movies_cast.csv".to_string()
}

fn default_crew_csv() -> String {
    "./Dataset/df_movies_crew.csv".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
