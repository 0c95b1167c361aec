//! Pretty-printed XML serialization of descriptor documents.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::domain::{AppError, Document, Element};

const INDENT_SIZE: usize = 2;

/// Serialize a document with an XML declaration and two-space indentation.
pub fn write_document<W: Write>(document: &Document, out: W) -> Result<(), AppError> {
    let mut writer = Writer::new_with_indent(out, b' ', INDENT_SIZE);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, document.root())?;
    writer.get_mut().write_all(b"\n")?;
    Ok(())
}

/// Serialize a document into an in-memory buffer.
pub fn to_pretty_xml(document: &Document) -> Result<Vec<u8>, AppError> {
    let mut buf = Vec::new();
    write_document(document, &mut buf)?;
    Ok(buf)
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<(), AppError> {
    let name = element.name();
    if element.text().is_none() && element.children().is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(name)))?;
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new(name)))?;
    if let Some(text) = element.text() {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in element.children() {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
