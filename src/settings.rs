use std::path::Path;

use figsum_lib::{Config, FigsumError};

/// Load config from a TOML file, central config, or return defaults.
/// Priority: explicit path > ~/.config/figsum/config.toml > defaults
pub fn load_config(path: Option<&Path>) -> Result<Config, FigsumError> {
    let cfg = Config::load(path)?;

    cfg.validate().map_err(|e| {
        let detail = match e {
            FigsumError::Config(message) => message,
            other => other.to_string(),
        };
        let message = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), detail))
            .unwrap_or_else(|| format!("Invalid config: {}", detail));
        FigsumError::Config(message)
    })?;
    Ok(cfg)
}

/// Format effective config as a single-line string.
pub fn format_effective_config(config: &Config, config_source: Option<&Path>) -> String {
    let source = config_source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    format!(
        "Effective config [{source}]: text_node_type={}, heading>={}, subhead>={}, cta_max_chars={}, parent_depth={}",
        config.walker.text_node_type,
        config.classifier.heading_min_size,
        config.classifier.subhead_min_size,
        config.classifier.cta_max_chars,
        config.render.parent_depth,
    )
}

/// Log effective config (visible with --verbose).
pub fn log_effective_config(config: &Config, config_source: Option<&Path>) {
    log::debug!("{}", format_effective_config(config, config_source));
}
