//! Configuration types for diagram generation.
//!
//! This module provides the configuration structure that controls how
//! diagrams are rendered. All types implement [`serde::Deserialize`] with
//! defaults at every level, so an override document only needs to spell
//! out the parts it changes; a supplied section replaces the compiled-in
//! one as a whole.
//!
//! # Overview
//!
//! - [`DiagramConfig`] - Top-level configuration combining settings,
//!   template selection, and styles.
//! - [`Settings`] - Graph-wide settings: default layout direction, node
//!   attribute defaults, and table rendering parameters.
//! - [`Templates`] - Named template resources for the render paths.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::style::Styles;

/// Top-level configuration for a conversion run.
///
/// Groups [`Settings`], [`Templates`], and [`Styles`] into a single
/// configuration root. The root key of an override document is `diagram`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiagramConfig {
    /// Graph-wide settings section.
    #[serde(default)]
    settings: Settings,

    /// Template selection section.
    #[serde(default)]
    templates: Templates,

    /// Style cascade section.
    #[serde(default)]
    styles: Styles,
}

impl DiagramConfig {
    /// Creates a new [`DiagramConfig`] from its three sections.
    pub fn new(settings: Settings, templates: Templates, styles: Styles) -> Self {
        Self {
            settings,
            templates,
            styles,
        }
    }

    /// Returns the graph-wide settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the template selection.
    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// Returns the style configuration.
    pub fn styles(&self) -> &Styles {
        &self.styles
    }
}

/// Graph-wide settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Layout direction applied when the input document does not specify
    /// one.
    rankdir: String,

    /// Attributes emitted in the graph-wide `node [...]` defaults
    /// statement. Insertion order is preserved in the output.
    node_defaults: IndexMap<String, String>,

    /// Parameters for HTML-table node labels.
    table_settings: TableSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rankdir: "TB".to_string(),
            node_defaults: IndexMap::from([
                ("fontname".to_string(), "Arial".to_string()),
                ("shape".to_string(), "none".to_string()),
            ]),
            table_settings: TableSettings::default(),
        }
    }
}

impl Settings {
    /// Returns the default layout direction.
    pub fn rankdir(&self) -> &str {
        &self.rankdir
    }

    /// Returns the node attribute defaults.
    pub fn node_defaults(&self) -> &IndexMap<String, String> {
        &self.node_defaults
    }

    /// Returns the table rendering parameters.
    pub fn table_settings(&self) -> &TableSettings {
        &self.table_settings
    }
}

/// Parameters for HTML-table node labels.
///
/// Values are kept as strings because they are substituted verbatim into
/// HTML-like label attributes.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TableSettings {
    border: String,
    cell_border: String,
    cell_spacing: String,
    cell_padding: String,
    separator_height: String,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            border: "2".to_string(),
            cell_border: "1".to_string(),
            cell_spacing: "0".to_string(),
            cell_padding: "2".to_string(),
            separator_height: "2".to_string(),
        }
    }
}

impl TableSettings {
    pub fn border(&self) -> &str {
        &self.border
    }

    pub fn cell_border(&self) -> &str {
        &self.cell_border
    }

    pub fn cell_spacing(&self) -> &str {
        &self.cell_spacing
    }

    pub fn cell_padding(&self) -> &str {
        &self.cell_padding
    }

    pub fn separator_height(&self) -> &str {
        &self.separator_height
    }
}

/// Named template resources for the render paths.
///
/// Names refer to templates registered with the render environment. When
/// `base_path` is set, a file of the same name under that directory
/// overrides the embedded default; a name that resolves to no registered
/// template makes the renderer fall back per element.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Templates {
    /// Optional directory holding template files that override the
    /// embedded defaults.
    base_path: Option<PathBuf>,

    /// Template for the whole-diagram wrapper.
    main: String,

    /// Template for a single entity node.
    entity: String,

    /// Template for a single relationship edge.
    relationship: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            base_path: None,
            main: "diagram.dot".to_string(),
            entity: "entity.dot".to_string(),
            relationship: "relationship.dot".to_string(),
        }
    }
}

impl Templates {
    /// Returns the override directory, if configured.
    pub fn base_path(&self) -> Option<&Path> {
        self.base_path.as_deref()
    }

    /// Returns the name of the whole-diagram template.
    pub fn main(&self) -> &str {
        &self.main
    }

    /// Returns the name of the entity template.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Returns the name of the relationship template.
    pub fn relationship(&self) -> &str {
        &self.relationship
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_compiled_in_values() {
        let config = DiagramConfig::default();

        assert_eq!(config.settings().rankdir(), "TB");
        assert_eq!(
            config.settings().node_defaults().get("fontname"),
            Some(&"Arial".to_string())
        );
        assert_eq!(
            config.settings().node_defaults().get("shape"),
            Some(&"none".to_string())
        );
        assert_eq!(config.settings().table_settings().border(), "2");
        assert_eq!(config.settings().table_settings().cell_padding(), "2");
        assert_eq!(config.templates().main(), "diagram.dot");
        assert_eq!(config.templates().entity(), "entity.dot");
        assert_eq!(config.templates().relationship(), "relationship.dot");
        assert!(config.templates().base_path().is_none());
    }

    #[test]
    fn partial_settings_keep_remaining_defaults() {
        let config: DiagramConfig = serde_yaml::from_str("settings:\n  rankdir: LR\n").unwrap();

        assert_eq!(config.settings().rankdir(), "LR");
        // Untouched fields come from the compiled-in defaults.
        assert_eq!(config.settings().node_defaults().len(), 2);
        assert_eq!(config.settings().table_settings().cell_border(), "1");
    }

    #[test]
    fn supplied_node_defaults_replace_the_whole_map() {
        let config: DiagramConfig =
            serde_yaml::from_str("settings:\n  node_defaults:\n    fontname: Helvetica\n").unwrap();

        let defaults = config.settings().node_defaults();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults.get("fontname"), Some(&"Helvetica".to_string()));
        assert!(defaults.get("shape").is_none());
    }
}
