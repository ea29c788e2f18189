use encoding_rs::{Encoding, UTF_8};
use roxmltree::{Document, ParsingOptions};
use std::borrow::Cow;
use thiserror::Error;

/// Why a part failed to parse. The display text is the diagnostic reported
/// to the user, so it carries the parser's position where one exists.
#[derive(Error, Debug)]
pub enum XmlError {
    #[error("{0}")]
    Encoding(String),

    #[error("{0}")]
    Syntax(#[from] roxmltree::Error),
}

/// Turn raw part bytes into text.
///
/// A byte order mark wins; otherwise the `encoding` named in the XML
/// declaration is used, and UTF-8 when there is none. Bytes that are not
/// valid in the chosen encoding are an error, never replaced.
pub fn decode(bytes: &[u8]) -> Result<Cow<'_, str>, XmlError> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => match declared_encoding(bytes) {
            Some(label) => {
                let encoding = Encoding::for_label(label.as_bytes())
                    .ok_or_else(|| XmlError::Encoding(format!("unknown encoding: {}", label)))?;
                (encoding, bytes)
            }
            None => (UTF_8, bytes),
        },
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| malformed(encoding, body))
}

fn malformed(encoding: &'static Encoding, body: &[u8]) -> XmlError {
    if encoding == UTF_8 {
        XmlError::Encoding(format!("invalid UTF-8 at byte {}", Encoding::utf8_valid_up_to(body)))
    } else {
        XmlError::Encoding(format!("invalid {} input", encoding.name()))
    }
}

/// The `encoding` pseudo-attribute of a leading `<?xml ...?>` declaration.
fn declared_encoding(bytes: &[u8]) -> Option<&str> {
    let rest = bytes.strip_prefix(b"<?xml")?;
    let end = rest.windows(2).position(|pair| pair == b"?>")?;
    let decl = std::str::from_utf8(&rest[..end]).ok()?;

    let value = decl[decl.find("encoding")? + "encoding".len()..]
        .trim_start()
        .strip_prefix('=')?
        .trim_start();
    let quote = value.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &value[1..];
    value.find(quote).map(|close| &value[..close])
}

/// Parse already-decoded text. DTDs are accepted; well-formedness is all
/// that is checked.
pub fn parse(text: &str) -> Result<Document<'_>, XmlError> {
    let doc = Document::parse_with_options(
        text,
        ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        },
    )?;
    Ok(doc)
}

/// Check that `bytes` hold a well-formed XML document.
pub fn check_well_formed(bytes: &[u8]) -> Result<(), XmlError> {
    let text = decode(bytes)?;
    parse(&text)?;
    Ok(())
}
