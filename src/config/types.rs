//! Configuration types for the shift template catalog.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::models::{ShiftKind, ShiftTemplate};

/// Metadata about the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMetadata {
    /// The human-readable name of the catalog.
    pub name: String,
    /// The version or effective date of the catalog.
    pub version: String,
    /// The institution the catalog belongs to.
    pub institution: String,
}

/// Templates configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesConfig {
    /// Templates in display order.
    pub templates: Vec<ShiftTemplate>,
}

/// The complete catalog configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog metadata.
    metadata: CatalogMetadata,
    /// Templates in display order.
    templates: Vec<ShiftTemplate>,
}

impl CatalogConfig {
    /// Creates a new CatalogConfig from its component parts.
    pub fn new(metadata: CatalogMetadata, templates: Vec<ShiftTemplate>) -> Self {
        Self {
            metadata,
            templates,
        }
    }

    /// Returns the catalog metadata.
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// Returns all templates in display order.
    pub fn templates(&self) -> &[ShiftTemplate] {
        &self.templates
    }

    /// Finds the template for `kind`.
    pub fn find(&self, kind: ShiftKind) -> Option<&ShiftTemplate> {
        self.templates.iter().find(|t| t.key == kind)
    }
}
