//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the shift
//! template catalog from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::calculation::compute_duration_hours;
use crate::error::{EngineError, EngineResult};
use crate::models::{ShiftKind, ShiftTemplate};

use super::types::{CatalogConfig, CatalogMetadata, TemplatesConfig};

/// Loads and provides access to the shift template catalog.
///
/// # Directory Structure
///
/// ```text
/// config/ips_virtual/
/// ├── catalog.yaml    # Catalog metadata
/// └── templates.yaml  # Shift templates
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_engine::config::ConfigLoader;
/// use shift_engine::models::ShiftKind;
///
/// let loader = ConfigLoader::load("./config/ips_virtual").unwrap();
/// let night = loader.template(ShiftKind::TwelveHourNight).unwrap();
/// println!("{} starts at {}", night.label, night.start_time);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CatalogConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if a file is missing, contains invalid YAML, or a
    /// template is inconsistent (see [`ConfigLoader::from_parts`]).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CatalogMetadata>(&path.join("catalog.yaml"))?;
        let templates = Self::load_yaml::<TemplatesConfig>(&path.join("templates.yaml"))?;

        let loader = Self::from_parts(metadata, templates.templates)?;
        debug!(
            path = %path.display(),
            catalog = %loader.metadata().name,
            templates = loader.templates().len(),
            "Loaded shift template catalog"
        );
        Ok(loader)
    }

    /// Builds a loader from already-parsed parts, validating every template.
    ///
    /// A template is rejected when its `spans_midnight` flag disagrees with
    /// its clock times (equal times span midnight), its `duration_hours`
    /// differs from the duration of its clock times, its surcharge lies
    /// outside 0-100 or is set on a non-night template, or its key repeats.
    pub fn from_parts(
        metadata: CatalogMetadata,
        templates: Vec<ShiftTemplate>,
    ) -> EngineResult<Self> {
        let mut seen: Vec<ShiftKind> = Vec::with_capacity(templates.len());
        for template in &templates {
            if seen.contains(&template.key) {
                return Err(Self::invalid(template, "duplicate template key"));
            }
            seen.push(template.key);
            Self::validate_template(template)?;
        }

        Ok(Self {
            config: CatalogConfig::new(metadata, templates),
        })
    }

    fn validate_template(template: &ShiftTemplate) -> EngineResult<()> {
        let spans = template.end_time <= template.start_time;
        if spans != template.spans_midnight {
            return Err(Self::invalid(
                template,
                &format!(
                    "spans_midnight is {} but {}-{} {}",
                    template.spans_midnight,
                    template.start_time,
                    template.end_time,
                    if spans { "crosses midnight" } else { "ends the same day" }
                ),
            ));
        }

        let derived = compute_duration_hours(template.start_time, template.end_time);
        if derived != template.duration_hours {
            return Err(Self::invalid(
                template,
                &format!(
                    "duration_hours is {} but {}-{} lasts {} hours",
                    template.duration_hours, template.start_time, template.end_time, derived
                ),
            ));
        }

        let percent = template.night_surcharge_percent;
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(Self::invalid(
                template,
                &format!("night_surcharge_percent {} is outside 0-100", percent),
            ));
        }
        if !template.is_night && !percent.is_zero() {
            return Err(Self::invalid(
                template,
                "night_surcharge_percent is set on a non-night template",
            ));
        }

        Ok(())
    }

    fn invalid(template: &ShiftTemplate, message: &str) -> EngineError {
        EngineError::InvalidTemplate {
            key: template.key.to_string(),
            message: message.to_string(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the catalog metadata.
    pub fn metadata(&self) -> &CatalogMetadata {
        self.config.metadata()
    }

    /// Returns all templates in display order.
    pub fn templates(&self) -> &[ShiftTemplate] {
        self.config.templates()
    }

    /// Gets the template for a key.
    ///
    /// Returns `UnknownShiftTemplate` when the catalog has no such template.
    pub fn template(&self, kind: ShiftKind) -> EngineResult<&ShiftTemplate> {
        self.config
            .find(kind)
            .ok_or_else(|| EngineError::UnknownShiftTemplate {
                key: kind.to_string(),
            })
    }
}
