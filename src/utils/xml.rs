//! Markup writing helpers on top of `quick-xml`.

use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Cursor;

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Create an in-memory writer.
#[inline]
pub fn writer() -> XmlWriter {
    Writer::new(Cursor::new(Vec::new()))
}

/// Consume the writer and return its output.
pub fn into_string(writer: XmlWriter) -> Result<String> {
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// Write a text element: `<tag>text</tag>`.
#[inline]
pub fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write an empty element with attributes: `<tag attr1="val1" ... />`.
#[inline]
pub fn write_empty_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Write an inline `<script>` whose body is emitted without entity escaping.
///
/// Script content is raw text in HTML, so `&quot;` would not be decoded.
/// The caller must make sure `body` cannot contain `</script`.
pub fn write_raw_script(writer: &mut XmlWriter, attrs: &[(&str, &str)], body: &str) -> Result<()> {
    let mut elem = BytesStart::new("script");
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Text(BytesText::from_escaped(body)))?;
    writer.write_event(Event::End(BytesEnd::new("script")))?;
    Ok(())
}
