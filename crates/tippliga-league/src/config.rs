use serde::Deserialize;

/// League configuration, loaded from `tippliga.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Display name of the competition.
    pub name: String,
    /// Season label, e.g. "2025/26".
    pub season: String,
    /// Number of matchdays a full season has.
    pub matchday_count: u32,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            name: "Bundesliga".to_string(),
            season: "2025/26".to_string(),
            matchday_count: 34,
        }
    }
}

impl LeagueConfig {
    /// Validate configuration, logging what is wrong. Returns false when
    /// the config is unusable.
    pub fn validate(&self) -> bool {
        let mut ok = true;
        if self.name.is_empty() {
            tracing::warn!("league name is empty");
        }
        if self.matchday_count == 0 {
            tracing::error!("matchday_count must be > 0");
            ok = false;
        }
        ok
    }

    /// Load config from `tippliga.toml` if it exists, then apply env var
    /// overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string("tippliga.toml") {
            Ok(content) => match toml::from_str::<LeagueConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from tippliga.toml");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse tippliga.toml: {e}, using defaults");
                    LeagueConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No tippliga.toml found, using defaults");
                LeagueConfig::default()
            },
        };

        if let Ok(name) = std::env::var("TIPPLIGA_LEAGUE_NAME")
            && !name.is_empty()
        {
            config.name = name;
        }
        if let Ok(season) = std::env::var("TIPPLIGA_SEASON")
            && !season.is_empty()
        {
            config.season = season;
        }
        if let Ok(val) = std::env::var("TIPPLIGA_MATCHDAY_COUNT")
            && let Ok(n) = val.parse::<u32>()
        {
            config.matchday_count = n;
        }

        config
    }
}
