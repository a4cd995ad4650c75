//! Sample-file scaffolding for `--create-sample`.

use std::fs;

use log::info;

use crate::error::CliError;

const SAMPLE_MODEL: &str = r#"{
  "metadata": {
    "title": "Sample Data Model",
    "version": "1.0",
    "description": "Sample data model for testing"
  },
  "diagram_settings": {
    "rankdir": "TB"
  },
  "entities": [
    {
      "id": "user",
      "name": "User",
      "fields": [
        {"name": "id", "type": "UUID", "is_required": true, "is_key": true},
        {"name": "username", "type": "string", "is_required": true},
        {"name": "email", "type": "string", "is_required": true},
        {"name": "created_at", "type": "timestamp", "is_required": false}
      ],
      "special_sections": [
        {"name": "Auditable fields", "type": "object", "style": "bold_red"}
      ],
      "description": "System user entity"
    },
    {
      "id": "profile",
      "name": "User Profile",
      "fields": [
        {"name": "id", "type": "UUID", "is_required": true, "is_key": true},
        {"name": "user_id", "type": "UUID", "is_required": true},
        {"name": "first_name", "type": "string", "is_required": false},
        {"name": "last_name", "type": "string", "is_required": false},
        {"name": "bio", "type": "string", "is_required": false}
      ],
      "constraints": [
        "FOREIGN KEY (user_id) REFERENCES user(id)"
      ],
      "description": "Extended user profile information"
    }
  ],
  "relationships": [
    {"from_entity": "user", "to_entity": "profile", "label": "HAS_PROFILE", "relationship_type": "one_to_one"}
  ]
}
"#;

const SAMPLE_CONFIG: &str = r##"# Custom diagram configuration
diagram:
  settings:
    rankdir: LR

  styles:
    entities:
      user:
        header:
          bgcolor: "#2563EB"
          forecolor: white
        body:
          bgcolor: "#EFF6FF"

      profile:
        header:
          bgcolor: "#059669"
          forecolor: white
        body:
          bgcolor: "#ECFDF5"
"##;

/// Writes `<prefix>_sample.json` and `<prefix>_config.yaml` and prints
/// usage hints for them.
pub fn create_sample_files(prefix: &str) -> Result<(), CliError> {
    let model_file = format!("{prefix}_sample.json");
    let config_file = format!("{prefix}_config.yaml");

    write_file(&model_file, SAMPLE_MODEL)?;
    write_file(&config_file, SAMPLE_CONFIG)?;

    info!(model = model_file.as_str(), config = config_file.as_str(); "Sample files created");

    println!("Sample files created:");
    println!("  JSON model: {model_file}");
    println!("  Config file: {config_file}");
    println!();
    println!("Usage examples:");
    println!("  dotloom {model_file} output.dot");
    println!("  dotloom {model_file} output.dot --config {config_file}");
    println!("  dotloom {model_file} output.dot --render --format png");

    Ok(())
}

fn write_file(path: &str, content: &str) -> Result<(), CliError> {
    fs::write(path, content).map_err(|source| CliError::Output {
        path: path.into(),
        source,
    })
}
