//! XML helpers for the Canada Post web services.
//!
//! The writer side produces namespace-qualified request documents with an
//! XML declaration, optionally indented for development logging. The reader
//! side scans response documents by element local name, which keeps lookups
//! working whether or not the response declares its default namespace.

use std::io::{self, Write};

use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Error, Result};

/// Build a complete request document under a namespaced root element.
///
/// The closure writes the root's children. `pretty` switches on two-space
/// indentation for log-friendly development payloads.
pub(crate) fn document<F>(root: &str, xmlns: &str, pretty: bool, build: F) -> Result<String>
where
    F: FnOnce(&mut Writer<&mut Vec<u8>>) -> io::Result<()>,
{
    let mut buf: Vec<u8> = Vec::with_capacity(512);
    let mut writer = if pretty {
        Writer::new_with_indent(&mut buf, b' ', 2)
    } else {
        Writer::new(&mut buf)
    };

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer
        .create_element(root)
        .with_attribute(("xmlns", xmlns))
        .write_inner_content(build)?;

    String::from_utf8(buf).map_err(|e| Error::ParseValue(e.to_string()))
}

/// Write a simple `<tag>text</tag>` element.
pub(crate) fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

/// Write `<tag>text</tag>` only when the value is present.
pub(crate) fn write_optional_text<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&str>,
) -> io::Result<()> {
    if let Some(text) = value {
        write_text_element(writer, tag, text)?;
    }
    Ok(())
}

/// Write `<tag>true</tag>` or `<tag>false</tag>`.
pub(crate) fn write_bool_element<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: bool,
) -> io::Result<()> {
    write_text_element(writer, tag, if value { "true" } else { "false" })
}

/// Create a reader over a response body with whitespace trimming enabled.
pub(crate) fn response_reader(body: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_reader(body.as_bytes());
    reader.config_mut().trim_text(true);
    reader
}

/// Read the text content of the current element and consume its end tag.
///
/// Expects the reader to be positioned right after a `Start` event.
pub(crate) fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e.decode().map_err(|err| Error::ParseValue(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| Error::ParseValue(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::End(_) => return Ok(text),
            Event::Eof => {
                return Err(Error::ParseValue(
                    "unexpected EOF while reading text content".to_string(),
                ));
            }
            _ => {}
        }
    }
}
