//! maven-metadata.xml parsing
//!
//! Collects the text of every `<version>` element in the document, in the
//! order encountered. In a typical file that is the `<versioning><versions>`
//! list, plus the top-level `<version>` when a repository includes one.

use quick_xml::events::Event;
use quick_xml::Reader;

const VERSION_TAG: &[u8] = b"version";

/// Extract all `<version>` values from a metadata document
pub fn parse_versions(xml: &str) -> Result<Vec<String>, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut versions = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();
    let mut saw_element = false;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(e) => {
                saw_element = true;
                if e.local_name().as_ref() == VERSION_TAG {
                    depth += 1;
                    current.clear();
                }
            }
            Event::Empty(_) => saw_element = true,
            Event::Text(t) if depth > 0 => {
                current.push_str(&t.unescape().map_err(|e| e.to_string())?);
            }
            Event::CData(c) if depth > 0 => {
                current.push_str(&String::from_utf8_lossy(&c));
            }
            Event::End(e) if depth > 0 && e.local_name().as_ref() == VERSION_TAG => {
                depth -= 1;
                let value = current.trim();
                if !value.is_empty() {
                    versions.push(value.to_string());
                }
                current.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_element {
        return Err("document has no root element".to_string());
    }

    Ok(versions)
}
