//! Combat configuration loader.

use std::path::Path;

use anyhow::Context;
use combat_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

const EMBEDDED: &str = include_str!("../../data/combat.toml");

/// Loader for combat configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing a CombatConfig
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse and validate a CombatConfig from TOML text.
    ///
    /// Missing sections fall back to their defaults.
    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate().context("Invalid combat config")?;

        Ok(config)
    }

    /// The configuration shipped with this crate.
    pub fn embedded() -> LoadResult<CombatConfig> {
        Self::parse(EMBEDDED).context("embedded combat.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{FormulaSpec, StatId};
    use std::io::Write;

    #[test]
    fn embedded_config_loads() {
        let config = ConfigLoader::embedded().expect("embedded config");

        assert_eq!(config.threat.max_distance, 12.0);
        assert!(config.threat.sight_gated);
        assert!(matches!(config.attack.hit_chance, FormulaSpec::Clamped { .. }));
        assert!(matches!(
            config.attack.damage_max,
            FormulaSpec::Sum { ref terms } if terms.len() == 2
        ));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = ConfigLoader::parse("[threat]\ntime_rate = 3.0\n").expect("partial config");

        assert_eq!(config.threat.time_rate, 3.0);
        assert_eq!(config.threat.max_distance, 10.0);
        assert_eq!(config.attack, combat_core::AttackProfile::default());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ConfigLoader::parse("[threat]\ntime_rate = -1.0\n").unwrap_err();
        assert!(format!("{err:#}").contains("time_rate"));

        assert!(ConfigLoader::parse("[threat\n").is_err());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "[attack]\nreach = 3.0\n\n\
             [attack.hit_chance.stat_linear]\nstat = 1\nbase = 0.5\nper_level = 0.01\n\n\
             [attack.damage_min.constant]\nvalue = 1.0\n\n\
             [attack.damage_max.constant]\nvalue = 2.0\n"
        )
        .expect("write config");

        let config = ConfigLoader::load(file.path()).expect("config from disk");
        assert_eq!(config.attack.reach, 3.0);
        assert_eq!(
            config.attack.hit_chance,
            FormulaSpec::StatLinear {
                stat: StatId(1),
                base: 0.5,
                per_level: 0.01,
            }
        );
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/combat.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/combat.toml"));
    }
}
