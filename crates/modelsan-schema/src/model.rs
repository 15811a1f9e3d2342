//! In-memory representation of a parsed model document

use std::collections::HashMap;

/// One schema-declared property of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    declared_type: String,
    custom_type: Option<String>,
    optional: bool,
}

impl Attribute {
    /// Create an attribute with no custom type override.
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>, optional: bool) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            custom_type: None,
            optional,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The schema's own type name (e.g. "Integer 32"). Informational only;
    /// rewriting never consults it.
    pub fn declared_type(&self) -> &str {
        &self.declared_type
    }

    /// The custom type override, if the schema declared one.
    pub fn custom_type(&self) -> Option<&str> {
        self.custom_type.as_deref()
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Attach the custom type override. The user-info entry always follows its
    /// owning attribute in document order, so this runs after construction.
    pub fn set_custom_type(&mut self, custom_type: impl Into<String>) {
        self.custom_type = Some(custom_type.into());
    }
}

/// A named collection of attributes, keyed by attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entity {
    attributes: HashMap<String, Attribute>,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn attribute_mut(&mut self, name: &str) -> Option<&mut Attribute> {
        self.attributes.get_mut(name)
    }

    /// Insert an attribute under its name. A duplicate name replaces the
    /// earlier record (last occurrence wins).
    pub fn insert(&mut self, attribute: Attribute) {
        self.attributes.insert(attribute.name().to_string(), attribute);
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Mapping from entity name to [`Entity`], built once per run by the reader
/// and read-only thereafter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeTable {
    entities: HashMap<String, Entity>,
}

impl AttributeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    /// Insert an empty entity under `name`, replacing any prior entity of the
    /// same name (last occurrence wins).
    pub fn insert_entity(&mut self, name: impl Into<String>) -> &mut Entity {
        let entity = self.entities.entry(name.into()).or_default();
        *entity = Entity::new();
        entity
    }

    pub fn entity_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.entities.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
