//! Integration tests for the DotGenerator API
//!
//! These exercise the public pipeline end to end: parsing, the style
//! cascade, template rendering, and the per-element fallback path.

use dotloom::{DotGenerator, config::DiagramConfig};

const USER_ONLY: &str = r#"
{
  "entities": [
    {
      "id": "user",
      "name": "User",
      "fields": [
        {"name": "id", "type": "UUID", "is_required": true, "is_key": true}
      ]
    }
  ]
}
"#;

const USER_PROFILE: &str = r#"
{
  "entities": [
    {"id": "user", "name": "User"},
    {"id": "profile", "name": "User Profile"}
  ],
  "relationships": [
    {"from_entity": "user", "to_entity": "profile", "label": "HAS_PROFILE", "relationship_type": "one_to_one"}
  ]
}
"#;

fn config_from_yaml(yaml: &str) -> DiagramConfig {
    serde_yaml::from_str(yaml).expect("test config should deserialize")
}

fn assert_brace_balanced(dot: &str) {
    assert!(!dot.is_empty(), "output should not be empty");
    assert_eq!(
        dot.matches('{').count(),
        dot.matches('}').count(),
        "output should be brace-balanced:\n{dot}"
    );
}

#[test]
fn single_entity_yields_a_node_with_its_key_field() {
    let generator = DotGenerator::default();
    let dot = generator.convert(USER_ONLY).expect("valid model");

    assert!(dot.contains("digraph data_model {"));
    assert!(dot.contains("    user [label="));
    assert!(dot.contains("+ id: UUID"));
    assert_brace_balanced(&dot);
}

#[test]
fn relationship_yields_a_directed_edge() {
    let generator = DotGenerator::default();
    let dot = generator.convert(USER_PROFILE).expect("valid model");

    assert!(dot.contains("user -> profile [label=\"HAS_PROFILE\""));
    assert_brace_balanced(&dot);
}

#[test]
fn omitted_diagram_settings_default_to_tb() {
    let generator = DotGenerator::default();
    let dot = generator.convert(USER_ONLY).expect("valid model");

    assert!(dot.contains("rankdir=TB;"));
}

#[test]
fn configured_rankdir_applies_when_input_omits_it() {
    let config = config_from_yaml("settings:\n  rankdir: LR\n");
    let generator = DotGenerator::new(config);
    let dot = generator.convert(USER_ONLY).expect("valid model");

    assert!(dot.contains("rankdir=LR;"));
}

#[test]
fn entity_count_is_preserved() {
    let source = r#"
    {
      "entities": [
        {"id": "user", "name": "User"},
        {"id": "profile", "name": "Profile"},
        {"id": "account", "name": "Account"}
      ]
    }
    "#;

    let generator = DotGenerator::default();
    let dot = generator.convert(source).expect("valid model");

    for id in ["user", "profile", "account"] {
        let needle = format!("    {id} [label=");
        assert_eq!(
            dot.matches(&needle).count(),
            1,
            "expected exactly one node statement for `{id}`"
        );
    }
}

#[test]
fn dangling_relationship_endpoints_still_emit_an_edge() {
    let source = r#"
    {
      "entities": [{"id": "user", "name": "User"}],
      "relationships": [
        {"from_entity": "user", "to_entity": "ghost", "label": "HAUNTS"}
      ]
    }
    "#;

    let generator = DotGenerator::default();
    let dot = generator.convert(source).expect("valid model");

    assert!(dot.contains("user -> ghost [label=\"HAUNTS\""));
    assert_brace_balanced(&dot);
}

#[test]
fn missing_templates_fall_back_for_every_element() {
    let config = config_from_yaml(
        r#"
        templates:
          main: missing-main.dot
          entity: missing-entity.dot
          relationship: missing-relationship.dot
        "#,
    );
    let generator = DotGenerator::new(config);
    let dot = generator.convert(USER_PROFILE).expect("valid model");

    assert!(dot.contains("digraph data_model {"));
    assert!(dot.contains("user [label=\"User\", shape=box];"));
    assert!(dot.contains("user -> profile [label=\"HAS_PROFILE\"];"));
    assert_brace_balanced(&dot);
}

#[test]
fn broken_entity_template_does_not_affect_relationships() {
    let config = config_from_yaml("templates:\n  entity: missing-entity.dot\n");
    let generator = DotGenerator::new(config);
    let dot = generator.convert(USER_PROFILE).expect("valid model");

    // Entities took the plain-box fallback.
    assert!(dot.contains("user [label=\"User\", shape=box];"));
    // Relationships still rendered through their own template.
    assert!(dot.contains("user -> profile [label=\"HAS_PROFILE\", color="));
    assert_brace_balanced(&dot);
}

#[test]
fn entity_specific_style_overrides_reach_the_output() {
    let config = config_from_yaml(
        r##"
        styles:
          entities:
            user:
              header:
                bgcolor: "#2563EB"
        "##,
    );
    let generator = DotGenerator::new(config);
    let dot = generator.convert(USER_PROFILE).expect("valid model");

    // The overridden entity uses its own header color, the other keeps
    // the built-in one.
    assert!(dot.contains("BGCOLOR=\"#2563EB\""));
    assert!(dot.contains("BGCOLOR=\"#333333\""));
}

#[test]
fn same_rank_groups_are_emitted_in_order() {
    let source = r#"
    {
      "entities": [
        {"id": "user", "name": "User"},
        {"id": "profile", "name": "Profile"}
      ],
      "layout_hints": {"same_rank_groups": [["user", "profile"]]}
    }
    "#;

    let generator = DotGenerator::default();
    let dot = generator.convert(source).expect("valid model");

    assert!(dot.contains("{rank=same; user; profile;}"));
    assert_brace_balanced(&dot);
}

#[test]
fn rendering_is_deterministic() {
    let generator = DotGenerator::default();
    let diagram = generator.parse(USER_PROFILE).expect("valid model");

    assert_eq!(generator.render(&diagram), generator.render(&diagram));
}

#[test]
fn generator_is_reusable_across_documents() {
    let generator = DotGenerator::default();

    let first = generator.convert(USER_ONLY).expect("valid model");
    let second = generator.convert(USER_PROFILE).expect("valid model");

    assert!(first.contains("digraph"));
    assert!(second.contains("digraph"));
}

#[test]
fn invalid_model_returns_a_parse_error() {
    let generator = DotGenerator::default();

    let result = generator.convert(r#"{"entities": [{"name": "No Id"}]}"#);
    assert!(result.is_err(), "missing entity id should fail");
}
