//! Streaming walk of a model `contents` document.
//!
//! The document is flat in practice: `entity` elements never nest inside each
//! other, nor do `attribute` elements, so a single forward pass with two
//! "last seen" pointers is enough. No tree is built.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::model::{Attribute, AttributeTable};
use crate::version::resolve_document;
use crate::{Error, Result};

/// User-info entry key carrying an attribute's custom type override.
const CUSTOM_TYPE_KEY: &str = "customAttributeType";

/// Marker value of the `optional` attribute; anything else means required.
const OPTIONAL_LITERAL: &str = "YES";

/// Read the active schema document inside `model_dir` into an attribute table.
///
/// Resolution of the active version is described in [`crate::version`]. Any
/// markup error or missing `attributeType` aborts the read; no partial table
/// is ever returned.
pub fn read_model(model_dir: &Path) -> Result<AttributeTable> {
    let document = resolve_document(model_dir)?;
    let xml = fs::read_to_string(&document).map_err(|e| Error::io(&document, e))?;
    let table = parse_contents(&xml, &document)?;
    tracing::debug!(entities = table.len(), "model document parsed");
    Ok(table)
}

/// Parse a `contents` document into an attribute table.
///
/// `path` is only used for error context.
pub fn parse_contents(xml: &str, path: &Path) -> Result<AttributeTable> {
    let mut reader = Reader::from_str(xml);
    let mut table = AttributeTable::new();
    let mut current_entity: Option<String> = None;
    let mut current_attribute: Option<String> = None;

    loop {
        let position = reader.buffer_position() as usize;
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"entity" => {
                    // An unnamed entity is skipped, not an error.
                    if let Some(name) = element_attr(&e, b"name", path, position)? {
                        table.insert_entity(name.clone());
                        current_entity = Some(name);
                    }
                }
                b"attribute" => {
                    let name = element_attr(&e, b"name", path, position)?;
                    if let (Some(name), Some(entity_name)) = (name, current_entity.as_deref()) {
                        let declared_type = element_attr(&e, b"attributeType", path, position)?
                            .ok_or_else(|| Error::MissingAttributeType {
                                entity: entity_name.to_string(),
                                attribute: name.clone(),
                                position,
                            })?;
                        let optional = element_attr(&e, b"optional", path, position)?
                            .as_deref()
                            == Some(OPTIONAL_LITERAL);
                        if let Some(entity) = table.entity_mut(entity_name) {
                            entity.insert(Attribute::new(name.clone(), declared_type, optional));
                        }
                        current_attribute = Some(name);
                    }
                }
                b"entry" => {
                    let key = element_attr(&e, b"key", path, position)?;
                    if key.as_deref() == Some(CUSTOM_TYPE_KEY) {
                        attach_custom_type(
                            &mut table,
                            current_entity.as_deref(),
                            current_attribute.as_deref(),
                            element_attr(&e, b"value", path, position)?,
                        );
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(source) => {
                return Err(Error::xml(path, reader.buffer_position() as usize, source));
            }
        }
    }

    Ok(table)
}

/// Attach a custom type to the current attribute's record in the table.
///
/// The attribute was already inserted when its element was walked, so the
/// lookup goes through the table by entity and attribute name; a miss on
/// either pointer leaves the table untouched.
fn attach_custom_type(
    table: &mut AttributeTable,
    entity_name: Option<&str>,
    attribute_name: Option<&str>,
    value: Option<String>,
) {
    let (Some(entity_name), Some(attribute_name), Some(value)) =
        (entity_name, attribute_name, value)
    else {
        return;
    };
    if let Some(attribute) = table
        .entity_mut(entity_name)
        .and_then(|entity| entity.attribute_mut(attribute_name))
    {
        attribute.set_custom_type(value);
    }
}

/// Fetch a named attribute of an element, unescaped.
fn element_attr(
    element: &BytesStart<'_>,
    name: &[u8],
    path: &Path,
    position: usize,
) -> Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| Error::xml(path, position, quick_xml::Error::from(e)))?;
        if attr.key.as_ref() == name {
            let value = attr
                .unescape_value()
                .map_err(|e| Error::xml(path, position, e))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
