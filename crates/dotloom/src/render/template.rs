//! The template renderer: named DOT templates in a MiniJinja environment.
//!
//! The environment is populated with the embedded default templates and
//! then, when `templates.base_path` is configured, with same-named files
//! from that directory. Both failure classes of the engine — a named
//! resource that does not exist and an evaluation error inside a template
//! body — surface as [`minijinja::Error`] from the render methods and are
//! classified recoverable by the caller.

use std::fs;

use indexmap::IndexMap;
use log::{debug, warn};
use minijinja::{Environment, UndefinedBehavior, context};

use dotloom_core::{
    config::{DiagramConfig, Templates},
    model::{Diagram, Entity, Relationship},
};

const DIAGRAM_TEMPLATE: &str = include_str!("../../templates/diagram.dot");
const ENTITY_TEMPLATE: &str = include_str!("../../templates/entity.dot");
const RELATIONSHIP_TEMPLATE: &str = include_str!("../../templates/relationship.dot");

/// The templating collaborator bound to the configured resource names.
pub(crate) struct TemplateSet {
    env: Environment<'static>,
    main: String,
    entity: String,
    relationship: String,
}

impl TemplateSet {
    /// Builds the environment for a conversion run.
    ///
    /// Registration problems are not fatal here: a template that fails to
    /// register simply fails to resolve at render time, which the caller
    /// recovers per element.
    pub fn new(templates: &Templates) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        for (name, source) in [
            ("diagram.dot", DIAGRAM_TEMPLATE),
            ("entity.dot", ENTITY_TEMPLATE),
            ("relationship.dot", RELATIONSHIP_TEMPLATE),
        ] {
            if let Err(err) = env.add_template(name, source) {
                warn!(template = name, err:% = err; "Failed to register built-in template");
            }
        }

        if let Some(base_path) = templates.base_path() {
            for name in [templates.main(), templates.entity(), templates.relationship()] {
                let path = base_path.join(name);
                match fs::read_to_string(&path) {
                    Ok(source) => {
                        if let Err(err) = env.add_template_owned(name.to_string(), source) {
                            warn!(
                                template = name.to_string(),
                                err:% = err;
                                "Template file is malformed, rendering will fall back"
                            );
                        }
                    }
                    Err(err) => {
                        debug!(
                            path = path.display().to_string(),
                            err:% = err;
                            "No template override on disk"
                        );
                    }
                }
            }
        }

        Self {
            env,
            main: templates.main().to_string(),
            entity: templates.entity().to_string(),
            relationship: templates.relationship().to_string(),
        }
    }

    /// Renders the whole-diagram wrapper around pre-rendered element
    /// blocks.
    pub fn render_main(
        &self,
        diagram: &Diagram,
        config: &DiagramConfig,
        entity_blocks: &[String],
        relationship_blocks: &[String],
    ) -> Result<String, minijinja::Error> {
        let template = self.env.get_template(&self.main)?;
        template.render(context! {
            diagram => diagram,
            graph_name => diagram.graph_name(),
            node_defaults => config.settings().node_defaults(),
            entities => entity_blocks.concat(),
            relationships => relationship_blocks.concat(),
        })
    }

    /// Renders one entity node block.
    pub fn render_entity(
        &self,
        entity: &Entity,
        config: &DiagramConfig,
        styles: &IndexMap<&'static str, String>,
    ) -> Result<String, minijinja::Error> {
        let template = self.env.get_template(&self.entity)?;
        template.render(context! {
            entity => entity,
            table => config.settings().table_settings(),
            styles => styles,
        })
    }

    /// Renders one relationship edge block.
    pub fn render_relationship(
        &self,
        relationship: &Relationship,
        styles: &IndexMap<&'static str, String>,
    ) -> Result<String, minijinja::Error> {
        let template = self.env.get_template(&self.relationship)?;
        template.render(context! {
            relationship => relationship,
            styles => styles,
        })
    }
}
