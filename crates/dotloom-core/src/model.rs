//! The diagram model: entities, relationships, and layout hints.
//!
//! These types are the strongly-typed form of the hierarchical input
//! document. The model parser builds them once per conversion run; the
//! rest of the pipeline only reads them. Everything serializes with
//! [`serde`] so values can be handed to the template renderer as context.

use serde::Serialize;

/// A complete data-model diagram.
#[derive(Debug, Clone, Serialize)]
pub struct Diagram {
    /// Diagram title, also the source of the DOT graph identifier.
    pub title: String,
    /// Model version string.
    pub version: String,
    /// Free-text description.
    pub description: String,
    /// Graphviz layout direction (`TB`, `LR`, ...).
    pub rankdir: String,
    /// Entities in input order.
    pub entities: Vec<Entity>,
    /// Relationships in input order.
    pub relationships: Vec<Relationship>,
    /// Groups of entity ids constrained to the same layout rank.
    pub same_rank_groups: Vec<Vec<String>>,
}

impl Diagram {
    /// The DOT graph identifier derived from the title: lower-cased, with
    /// whitespace and hyphens replaced by underscores.
    pub fn graph_name(&self) -> String {
        self.title
            .to_lowercase()
            .chars()
            .map(|c| if c.is_whitespace() || c == '-' { '_' } else { c })
            .collect()
    }
}

/// A single entity (table, document, node) in the data model.
#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    /// Unique identifier, used verbatim as the DOT node identifier.
    pub id: String,
    /// Human-readable name shown in the node header.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Fields in input order.
    pub fields: Vec<Field>,
    /// Special sections rendered after the fields.
    pub special_sections: Vec<SpecialSection>,
    /// Free-text constraint lines rendered last.
    pub constraints: Vec<String>,
}

/// A field of an entity.
#[derive(Debug, Clone, Serialize)]
pub struct Field {
    pub name: String,
    /// Free-text type label; not type-checked.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Mandatory fields render with the `mandatory` style section.
    pub required: bool,
    /// Primary-identifier fields render underlined.
    pub key: bool,
    pub description: String,
}

/// A named extra section of an entity, e.g. a group of audit fields.
#[derive(Debug, Clone, Serialize)]
pub struct SpecialSection {
    pub name: String,
    #[serde(rename = "type")]
    pub section_type: String,
    /// Free-text style selector, e.g. `bold_red`.
    pub style: String,
}

/// A directed relationship between two entities.
///
/// Endpoints are not validated against the entity list; a relationship
/// referencing an unknown id still produces an edge statement.
#[derive(Debug, Clone, Serialize)]
pub struct Relationship {
    /// Optional identifier, empty when the input omits it.
    pub id: String,
    pub from_entity: String,
    pub to_entity: String,
    /// Edge label.
    pub label: String,
    /// Free-text relationship type, e.g. `one_to_many`.
    #[serde(rename = "type")]
    pub relationship_type: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagram_titled(title: &str) -> Diagram {
        Diagram {
            title: title.to_string(),
            version: "1.0".to_string(),
            description: String::new(),
            rankdir: "TB".to_string(),
            entities: Vec::new(),
            relationships: Vec::new(),
            same_rank_groups: Vec::new(),
        }
    }

    #[test]
    fn graph_name_lowercases_and_replaces_separators() {
        let diagram = diagram_titled("Sample Data-Model");
        assert_eq!(diagram.graph_name(), "sample_data_model");
    }

    #[test]
    fn graph_name_keeps_plain_identifiers() {
        let diagram = diagram_titled("inventory");
        assert_eq!(diagram.graph_name(), "inventory");
    }
}
