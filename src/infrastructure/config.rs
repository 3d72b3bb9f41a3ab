// Deployment configuration - optional TOML file over coded defaults
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub run_mode: RunMode,
    pub server: ServerSettings,
    pub export: ExportSettings,
}

/// How the run ends: `serve` keeps the process up behind the UI transport,
/// `export` stops after the static document is written. The static document
/// is written at startup either way.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Serve,
    Export,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportSettings {
    /// Fixed path of the static layout document, overwritten on every run.
    pub path: String,
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .set_default("run_mode", "serve")?
        .set_default("server.listen_addr", "0.0.0.0:8080")?
        .set_default("export.path", "dashboard.html")?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_uses_serve_defaults() {
        let config = load_dashboard_config().unwrap();

        assert_eq!(config.run_mode, RunMode::Serve);
        assert_eq!(config.server.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.export.path, "dashboard.html");
    }

    #[test]
    fn test_run_mode_names_are_lowercase() {
        let serve: RunMode = serde_json::from_str("\"serve\"").unwrap();
        let export: RunMode = serde_json::from_str("\"export\"").unwrap();

        assert_eq!(serve, RunMode::Serve);
        assert_eq!(export, RunMode::Export);
        assert!(serde_json::from_str::<RunMode>("\"daemon\"").is_err());
    }
}
