use std::fs;
use std::path::{Path, PathBuf};

use catapp_core::errors::{CatError, ErrorInfo};
use catapp_core::EnergyType;
use catapp_scaling::{ScalingOptions, DEFAULT_LINE_WRAP};
use serde::{Deserialize, Serialize};

/// YAML-configurable settings for the `catapp` binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Store queried by `search`.
    pub search_db: PathBuf,
    /// Store queried by `plot` and `reactions`.
    pub plot_db: PathBuf,
    /// Characters per tooltip reference line.
    pub tooltip_line_wrap: usize,
    /// Axes used when `plot` is run without selections.
    pub default_plot: PlotDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_db: PathBuf::from("database/catapp.db"),
            plot_db: PathBuf::from("database/catapp_index.db"),
            tooltip_line_wrap: DEFAULT_LINE_WRAP,
            default_plot: PlotDefaults::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotDefaults {
    pub x_reaction: String,
    pub y_reaction: String,
    pub out_type_x: EnergyType,
    pub out_type_y: EnergyType,
}

impl Default for PlotDefaults {
    fn default() -> Self {
        Self {
            x_reaction: "N2|N*|N*".into(),
            y_reaction: "N2|N*|N*".into(),
            out_type_x: EnergyType::ReactionEnergy,
            out_type_y: EnergyType::ActivationEnergy,
        }
    }
}

fn config_error(code: &str, path: &Path, err: impl ToString) -> CatError {
    CatError::Config(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

impl AppConfig {
    /// Reads the YAML file at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, CatError> {
        let config = match path {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .map_err(|err| config_error("config_read", path, err))?;
                Self::from_yaml(&contents).map_err(|err| match err {
                    CatError::Config(info) => {
                        CatError::Config(info.with_context("path", path.display().to_string()))
                    }
                    other => other,
                })?
            }
            None => Self::default(),
        };
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, CatError> {
        let config: Self = serde_yaml::from_str(contents)
            .map_err(|err| CatError::Config(ErrorInfo::new("config_parse", err.to_string())))?;
        config.scaling_options().validate()?;
        Ok(config)
    }

    pub fn scaling_options(&self) -> ScalingOptions {
        ScalingOptions {
            line_wrap: self.tooltip_line_wrap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_yaml("{}").expect("config");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.tooltip_line_wrap, 25);
        assert_eq!(config.default_plot.out_type_y, EnergyType::ActivationEnergy);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = AppConfig::from_yaml(
            "plot_db: /srv/catapp/index.db\ndefault_plot:\n  y_reaction: CO|C*|O*\n  out_type_y: Reaction_Energy\n",
        )
        .expect("config");
        assert_eq!(config.plot_db, PathBuf::from("/srv/catapp/index.db"));
        assert_eq!(config.default_plot.x_reaction, "N2|N*|N*");
        assert_eq!(config.default_plot.y_reaction, "CO|C*|O*");
        assert_eq!(config.default_plot.out_type_y, EnergyType::ReactionEnergy);
    }

    #[test]
    fn zero_wrap_and_unknown_energy_are_rejected() {
        assert!(matches!(
            AppConfig::from_yaml("tooltip_line_wrap: 0"),
            Err(CatError::Config(_))
        ));
        assert!(matches!(
            AppConfig::from_yaml("default_plot:\n  out_type_x: Binding_Energy\n"),
            Err(CatError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/catapp.yaml"))).unwrap_err();
        assert_eq!(err.info().code, "config_read");
    }
}
