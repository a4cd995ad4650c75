//! Visual styling and the style cascade.
//!
//! A [`StyleDefinition`] groups seven [`StyleSection`]s, one per visual
//! region of a rendered entity or edge. Every section property is
//! optional; `None` means "unset, continue the cascade" and is never
//! interchangeable with an empty string or a zero value.
//!
//! The [`StyleResolver`] computes effective values with an ordered
//! three-level lookup: entity-specific definition, then the default
//! definition, then a fixed table of built-in constants.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Style configuration: one default definition plus per-entity overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Styles {
    /// Definition consulted when an entity has no specific override.
    #[serde(rename = "default")]
    default_style: StyleDefinition,

    /// Entity-specific definitions, keyed by entity id.
    entities: IndexMap<String, StyleDefinition>,
}

impl Styles {
    /// Creates a new [`Styles`] from a default definition and per-entity
    /// overrides.
    pub fn new(default_style: StyleDefinition, entities: IndexMap<String, StyleDefinition>) -> Self {
        Self {
            default_style,
            entities,
        }
    }

    /// Returns the default style definition.
    pub fn default_style(&self) -> &StyleDefinition {
        &self.default_style
    }

    /// Returns the entity-specific definition for `entity_id`, if any.
    pub fn entity(&self, entity_id: &str) -> Option<&StyleDefinition> {
        self.entities.get(entity_id)
    }
}

/// A full set of style sections for one entity (or the defaults).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StyleDefinition {
    header: StyleSection,
    body: StyleSection,
    separator: StyleSection,
    #[serde(alias = "specialSection")]
    special_section: StyleSection,
    mandatory: StyleSection,
    constraint: StyleSection,
    relationship: StyleSection,
}

impl StyleDefinition {
    /// Returns the [`StyleSection`] for `section`.
    pub fn section(&self, section: Section) -> &StyleSection {
        match section {
            Section::Header => &self.header,
            Section::Body => &self.body,
            Section::Separator => &self.separator,
            Section::Mandatory => &self.mandatory,
            Section::SpecialSection => &self.special_section,
            Section::Constraint => &self.constraint,
            Section::Relationship => &self.relationship,
        }
    }
}

/// A group of optional visual attributes.
///
/// Unset attributes are a first-class state: they make the resolver fall
/// through to the next cascade level, while any present value, including
/// `false` or `0`, is returned as-is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StyleSection {
    bgcolor: Option<String>,
    forecolor: Option<String>,
    color: Option<String>,
    font: Option<String>,
    #[serde(alias = "fontSize")]
    font_size: Option<u32>,
    bold: Option<bool>,
    style: Option<String>,
}

impl StyleSection {
    /// Returns the value of `property`, or `None` when it is unset.
    fn get(&self, property: Property) -> Option<StyleValue> {
        match property {
            Property::Bgcolor => self.bgcolor.clone().map(StyleValue::Text),
            Property::Forecolor => self.forecolor.clone().map(StyleValue::Text),
            Property::Color => self.color.clone().map(StyleValue::Text),
            Property::Font => self.font.clone().map(StyleValue::Text),
            Property::FontSize => self.font_size.map(StyleValue::Number),
            Property::Bold => self.bold.map(StyleValue::Flag),
            Property::Style => self.style.clone().map(StyleValue::Text),
        }
    }
}

/// The named visual regions of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Body,
    Separator,
    Mandatory,
    SpecialSection,
    Constraint,
    Relationship,
}

/// The attributes a [`StyleSection`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Bgcolor,
    Forecolor,
    Color,
    Font,
    FontSize,
    Bold,
    Style,
}

/// An effective style value produced by the cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Text(String),
    Number(u32),
    Flag(bool),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(text) => f.write_str(text),
            StyleValue::Number(number) => write!(f, "{number}"),
            StyleValue::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

impl StyleValue {
    fn text(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

/// Built-in constants, the last cascade level.
///
/// Keyed by (section, property); pairs outside this table have no
/// built-in value.
fn builtin(section: Section, property: Property) -> Option<StyleValue> {
    use Property::*;
    use Section::*;

    let value = match (section, property) {
        (Header, Bgcolor) => StyleValue::text("#333333"),
        (Header, Forecolor) => StyleValue::text("white"),
        (Header, Font) => StyleValue::text("Arial"),
        (Header, FontSize) => StyleValue::Number(12),
        (Body, Bgcolor) => StyleValue::text("#FFFFFF"),
        (Body, Forecolor) => StyleValue::text("#000000"),
        (Separator, Color) => StyleValue::text("#333333"),
        (Mandatory, Bgcolor) => StyleValue::text("#FFFFFF"),
        (Mandatory, Forecolor) => StyleValue::text("#DC2626"),
        (SpecialSection, Bgcolor) => StyleValue::text("#FFFFFF"),
        (SpecialSection, Forecolor) => StyleValue::text("#DC2626"),
        (Constraint, Bgcolor) => StyleValue::text("#F5F5F5"),
        (Constraint, Forecolor) => StyleValue::text("#666666"),
        (Relationship, Color) => StyleValue::text("#666666"),
        (Relationship, FontSize) => StyleValue::Number(9),
        (Relationship, Style) => StyleValue::text("solid"),
        _ => return None,
    };

    Some(value)
}

/// Resolves effective style values through the cascade.
///
/// The resolver borrows the [`Styles`] configuration and never mutates
/// it. Each call performs the full ordered lookup; callers that need a
/// value repeatedly may cache the result themselves.
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'a> {
    styles: &'a Styles,
}

impl<'a> StyleResolver<'a> {
    /// Creates a resolver over `styles`.
    pub fn new(styles: &'a Styles) -> Self {
        Self { styles }
    }

    /// Computes the effective value for `(entity_id, section, property)`.
    ///
    /// Lookup order, first present value wins:
    ///
    /// 1. The entity-specific definition, when `entity_id` is given and
    ///    one exists for it.
    /// 2. The default definition.
    /// 3. The built-in constant table.
    ///
    /// Returns `None` only for pairs outside the built-in table that no
    /// configuration level sets.
    pub fn resolve(
        &self,
        entity_id: Option<&str>,
        section: Section,
        property: Property,
    ) -> Option<StyleValue> {
        if let Some(definition) = entity_id.and_then(|id| self.styles.entity(id)) {
            if let Some(value) = definition.section(section).get(property) {
                return Some(value);
            }
        }

        if let Some(value) = self.styles.default_style().section(section).get(property) {
            return Some(value);
        }

        builtin(section, property)
    }

    /// Builds the flat style map handed to entity templates.
    ///
    /// Keys follow the `<section>_<attribute>` naming the templates use.
    pub fn entity_styles(&self, entity_id: &str) -> IndexMap<&'static str, String> {
        use Property::*;
        use Section::*;

        let lookups: [(&'static str, Section, Property); 13] = [
            ("header_bg", Header, Bgcolor),
            ("header_text", Header, Forecolor),
            ("header_font", Header, Font),
            ("header_font_size", Header, FontSize),
            ("body_bg", Body, Bgcolor),
            ("body_text", Body, Forecolor),
            ("separator_color", Separator, Color),
            ("mandatory_bg", Mandatory, Bgcolor),
            ("mandatory_text", Mandatory, Forecolor),
            ("special_section_bg", SpecialSection, Bgcolor),
            ("special_section_text", SpecialSection, Forecolor),
            ("constraint_bg", Constraint, Bgcolor),
            ("constraint_text", Constraint, Forecolor),
        ];

        let mut styles = IndexMap::with_capacity(lookups.len());
        for (key, section, property) in lookups {
            if let Some(value) = self.resolve(Some(entity_id), section, property) {
                styles.insert(key, value.to_string());
            }
        }
        styles
    }

    /// Builds the flat style map handed to relationship templates.
    pub fn relationship_styles(&self) -> IndexMap<&'static str, String> {
        use Property::*;

        let lookups: [(&'static str, Property); 3] =
            [("color", Color), ("font_size", FontSize), ("style", Style)];

        let mut styles = IndexMap::with_capacity(lookups.len());
        for (key, property) in lookups {
            if let Some(value) = self.resolve(None, Section::Relationship, property) {
                styles.insert(key, value.to_string());
            }
        }
        styles
    }
}
