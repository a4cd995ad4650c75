//! DOT rendering: the template path with a per-element fallback.
//!
//! Rendering happens at three granularities: the whole-diagram wrapper,
//! one block per entity, and one block per relationship. Each granularity
//! tries its configured template first; any lookup or evaluation failure
//! is recoverable and switches that element to the template-free
//! [`fallback`] path, so a broken entity template never prevents
//! relationships from rendering through their own template. Blocks are
//! assembled in model order.

pub mod fallback;
mod template;

use log::warn;

use dotloom_core::{
    config::DiagramConfig,
    model::{Diagram, Entity, Relationship},
    style::StyleResolver,
};

pub(crate) use template::TemplateSet;

/// Renders a [`Diagram`] to DOT text.
///
/// Never fails for a well-formed model: every template failure is
/// recovered locally and logged as a warning.
pub(crate) struct DotRenderer<'a> {
    config: &'a DiagramConfig,
    templates: &'a TemplateSet,
    resolver: StyleResolver<'a>,
}

impl<'a> DotRenderer<'a> {
    pub fn new(config: &'a DiagramConfig, templates: &'a TemplateSet) -> Self {
        Self {
            config,
            templates,
            resolver: StyleResolver::new(config.styles()),
        }
    }

    /// Renders the whole document.
    pub fn render(&self, diagram: &Diagram) -> String {
        let entity_blocks: Vec<String> = diagram
            .entities
            .iter()
            .map(|entity| self.entity_block(entity))
            .collect();
        let relationship_blocks: Vec<String> = diagram
            .relationships
            .iter()
            .map(|relationship| self.relationship_block(relationship))
            .collect();

        match self
            .templates
            .render_main(diagram, self.config, &entity_blocks, &relationship_blocks)
        {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    template = self.config.templates().main().to_string(),
                    err:% = err;
                    "Main template failed, assembling with the fallback wrapper"
                );
                fallback::document_with_blocks(
                    diagram,
                    self.config,
                    &entity_blocks,
                    &relationship_blocks,
                )
            }
        }
    }

    fn entity_block(&self, entity: &Entity) -> String {
        let styles = self.resolver.entity_styles(&entity.id);
        match self.templates.render_entity(entity, self.config, &styles) {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    entity = entity.id.to_string(),
                    err:% = err;
                    "Entity template failed, using the simple fallback"
                );
                fallback::entity(entity)
            }
        }
    }

    fn relationship_block(&self, relationship: &Relationship) -> String {
        let styles = self.resolver.relationship_styles();
        match self.templates.render_relationship(relationship, &styles) {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    from = relationship.from_entity.to_string(),
                    to = relationship.to_entity.to_string(),
                    err:% = err;
                    "Relationship template failed, using the simple fallback"
                );
                fallback::relationship(relationship)
            }
        }
    }
}
