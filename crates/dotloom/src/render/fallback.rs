//! The fallback generator: template-free DOT emission.
//!
//! This path builds the document with plain string assembly and must
//! complete for every well-formed model. Entity nodes use a plain `box`
//! shape with a text label; the rich table formatting is a template-only
//! enhancement.

use dotloom_core::{
    config::DiagramConfig,
    model::{Diagram, Entity, Relationship},
};

/// Renders a whole document without any template engine.
///
/// The output is a pure function of the model and configuration: two
/// calls with identical inputs produce byte-identical text.
pub fn document(diagram: &Diagram, config: &DiagramConfig) -> String {
    let entity_blocks: Vec<String> = diagram.entities.iter().map(entity).collect();
    let relationship_blocks: Vec<String> = diagram.relationships.iter().map(relationship).collect();
    document_with_blocks(diagram, config, &entity_blocks, &relationship_blocks)
}

/// Wraps pre-rendered element blocks in the document shell: comment
/// header, `digraph` block, rankdir, node defaults, elements, rank
/// groups.
pub(crate) fn document_with_blocks(
    diagram: &Diagram,
    config: &DiagramConfig,
    entity_blocks: &[String],
    relationship_blocks: &[String],
) -> String {
    let mut dot = String::new();

    dot.push_str(&format!("// {}\n", diagram.title));
    if !diagram.version.is_empty() {
        dot.push_str(&format!("// Version: {}\n", diagram.version));
    }
    dot.push('\n');

    dot.push_str(&format!("digraph {} {{\n", diagram.graph_name()));
    dot.push_str(&format!("    rankdir={};\n", diagram.rankdir));

    let node_defaults = config.settings().node_defaults();
    if !node_defaults.is_empty() {
        let attributes: Vec<String> = node_defaults
            .iter()
            .map(|(key, value)| format!("{key}=\"{value}\""))
            .collect();
        dot.push_str(&format!("    node [{}];\n", attributes.join(", ")));
    }
    dot.push('\n');

    for block in entity_blocks {
        dot.push_str(block);
    }

    if !relationship_blocks.is_empty() {
        dot.push_str("    // Relationships\n");
        for block in relationship_blocks {
            dot.push_str(block);
        }
        dot.push('\n');
    }

    if !diagram.same_rank_groups.is_empty() {
        dot.push_str("    // Layout hints\n");
        for group in &diagram.same_rank_groups {
            dot.push_str(&format!("    {{rank=same; {};}}\n", group.join("; ")));
        }
    }

    dot.push_str("}\n");
    dot
}

/// Renders one entity as a plain `box` node. Field lines are prefixed
/// with `+ ` for required fields and `- ` otherwise.
pub fn entity(entity: &Entity) -> String {
    let mut label = escape_label(&entity.name);

    if !entity.fields.is_empty() {
        label.push_str("\\n");
        for field in &entity.fields {
            label.push_str(if field.required { "+ " } else { "- " });
            label.push_str(&escape_label(&field.name));
            label.push_str(": ");
            label.push_str(&escape_label(&field.field_type));
            label.push_str("\\n");
        }
    }

    format!(
        "    // {}\n    {} [label=\"{}\", shape=box];\n",
        entity.name, entity.id, label
    )
}

/// Renders one relationship as a directed edge.
pub fn relationship(relationship: &Relationship) -> String {
    format!(
        "    {} -> {} [label=\"{}\"];\n",
        relationship.from_entity,
        relationship.to_entity,
        escape_label(&relationship.label)
    )
}

/// Escapes text placed inside a double-quoted DOT label.
fn escape_label(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
