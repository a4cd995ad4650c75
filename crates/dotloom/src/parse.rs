//! Model parser: hierarchical JSON input to a typed [`Diagram`].
//!
//! The parser walks the decoded [`serde_json::Value`] tree directly so it
//! can apply the documented defaults for optional keys and report missing
//! required keys with the offending element context. It is a pure
//! transformation with no side effects.

use serde_json::Value;
use thiserror::Error;

use dotloom_core::model::{Diagram, Entity, Field, Relationship, SpecialSection};

/// Errors produced while turning an input document into a [`Diagram`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{context}: missing required field `{field}`")]
    MissingField {
        context: String,
        field: &'static str,
    },

    #[error("{context}: field `{field}` must be a string")]
    NotAString {
        context: String,
        field: &'static str,
    },
}

/// Parses an input document into a [`Diagram`].
///
/// Optional keys take their documented defaults; `default_rankdir` is the
/// layout direction applied when the document carries no
/// `diagram_settings.rankdir` (the configured default, `TB` out of the
/// box). Arrays absent from the input become empty sequences. Malformed
/// same-rank-group entries are skipped without error.
///
/// # Errors
///
/// Returns [`ParseError`] when the document is not valid JSON or when a
/// required field (entity id/name, field name/type, relationship
/// endpoints/label, special-section name/type) is absent or not a string.
pub fn parse_diagram(source: &str, default_rankdir: &str) -> Result<Diagram, ParseError> {
    let root: Value = serde_json::from_str(source)?;

    let metadata = root.get("metadata");
    let title = optional_text(metadata, "title", "Data Model");
    let version = optional_text(metadata, "version", "1.0");
    let description = optional_text(metadata, "description", "");

    let rankdir = optional_text(root.get("diagram_settings"), "rankdir", default_rankdir);

    let mut entities = Vec::new();
    if let Some(nodes) = root.get("entities").and_then(Value::as_array) {
        for (index, node) in nodes.iter().enumerate() {
            entities.push(parse_entity(node, index)?);
        }
    }

    let mut relationships = Vec::new();
    if let Some(nodes) = root.get("relationships").and_then(Value::as_array) {
        for (index, node) in nodes.iter().enumerate() {
            relationships.push(parse_relationship(node, index)?);
        }
    }

    let same_rank_groups = parse_rank_groups(&root);

    Ok(Diagram {
        title,
        version,
        description,
        rankdir,
        entities,
        relationships,
        same_rank_groups,
    })
}

fn parse_entity(node: &Value, index: usize) -> Result<Entity, ParseError> {
    let context = format!("entities[{index}]");

    let id = required_text(node, &context, "id")?;
    let name = required_text(node, &context, "name")?;
    let description = optional_text(Some(node), "description", "");

    let mut fields = Vec::new();
    if let Some(field_nodes) = node.get("fields").and_then(Value::as_array) {
        for (field_index, field_node) in field_nodes.iter().enumerate() {
            let field_context = format!("{context}.fields[{field_index}]");
            fields.push(Field {
                name: required_text(field_node, &field_context, "name")?,
                field_type: required_text(field_node, &field_context, "type")?,
                required: optional_flag(field_node, "is_required"),
                key: optional_flag(field_node, "is_key"),
                description: optional_text(Some(field_node), "description", ""),
            });
        }
    }

    let mut special_sections = Vec::new();
    if let Some(section_nodes) = node.get("special_sections").and_then(Value::as_array) {
        for (section_index, section_node) in section_nodes.iter().enumerate() {
            let section_context = format!("{context}.special_sections[{section_index}]");
            special_sections.push(SpecialSection {
                name: required_text(section_node, &section_context, "name")?,
                section_type: required_text(section_node, &section_context, "type")?,
                style: optional_text(Some(section_node), "style", "bold_red"),
            });
        }
    }

    let mut constraints = Vec::new();
    if let Some(constraint_nodes) = node.get("constraints").and_then(Value::as_array) {
        for constraint_node in constraint_nodes {
            if let Some(text) = scalar_text(constraint_node) {
                constraints.push(text);
            }
        }
    }

    Ok(Entity {
        id,
        name,
        description,
        fields,
        special_sections,
        constraints,
    })
}

fn parse_relationship(node: &Value, index: usize) -> Result<Relationship, ParseError> {
    let context = format!("relationships[{index}]");

    Ok(Relationship {
        id: optional_text(Some(node), "id", ""),
        from_entity: required_text(node, &context, "from_entity")?,
        to_entity: required_text(node, &context, "to_entity")?,
        label: required_text(node, &context, "label")?,
        relationship_type: optional_text(Some(node), "relationship_type", "one_to_many"),
        description: optional_text(Some(node), "description", ""),
    })
}

/// Reads `layout_hints.same_rank_groups`, skipping entries that are not
/// arrays and members that are not scalars.
fn parse_rank_groups(root: &Value) -> Vec<Vec<String>> {
    let Some(groups) = root
        .get("layout_hints")
        .and_then(|hints| hints.get("same_rank_groups"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    groups
        .iter()
        .filter_map(Value::as_array)
        .map(|group| group.iter().filter_map(scalar_text).collect())
        .collect()
}

fn required_text(node: &Value, context: &str, field: &'static str) -> Result<String, ParseError> {
    match node.get(field) {
        None | Some(Value::Null) => Err(ParseError::MissingField {
            context: context.to_string(),
            field,
        }),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(ParseError::NotAString {
            context: context.to_string(),
            field,
        }),
    }
}

/// Scalar lookup with a default, coercing numbers and booleans to text
/// the way lenient document readers do.
fn optional_text(node: Option<&Value>, field: &str, default: &str) -> String {
    node.and_then(|node| node.get(field))
        .and_then(scalar_text)
        .unwrap_or_else(|| default.to_string())
}

fn optional_flag(node: &Value, field: &str) -> bool {
    node.get(field).and_then(Value::as_bool).unwrap_or(false)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
