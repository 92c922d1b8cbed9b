//! JUnit XML report parser.
//!
//! Turns raw report bytes into an [`Element`] tree rooted at `<testsuites>`.
//! Every child slot is a sequence, so an element that appears once has the
//! same shape as one that repeats. Attribute values are kept as raw text
//! under keys carrying [`ATTRIBUTE_PREFIX`]; integer conversion belongs to
//! the evaluator.

use std::collections::BTreeMap;
use std::fmt::Display;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::GateError;

/// Prefix distinguishing attribute keys from child element names.
pub const ATTRIBUTE_PREFIX: &str = "@_";

/// Root element every report must have.
pub const TESTSUITES: &str = "testsuites";
/// Suite element nested directly under [`TESTSUITES`].
pub const TESTSUITE: &str = "testsuite";
/// Case element nested directly under [`TESTSUITE`].
pub const TESTCASE: &str = "testcase";
/// Marker child whose presence means the case failed.
pub const FAILURE: &str = "failure";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One XML element with its attributes, children and text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: BTreeMap<String, String>,
    children: BTreeMap<String, Vec<Element>>,
    text: String,
}

impl Element {
    /// Element tag name as written in the report.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw text of attribute `name` (given without the prefix).
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&format!("{ATTRIBUTE_PREFIX}{name}"))
            .map(String::as_str)
    }

    /// All attributes keyed by their prefixed names.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Children named `name` in document order; empty when there are none.
    pub fn children(&self, name: &str) -> &[Element] {
        self.children.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if at least one child named `name` is present.
    pub fn has_child(&self, name: &str) -> bool {
        !self.children(name).is_empty()
    }

    /// Concatenated text and CDATA content, whitespace-trimmed.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn is_bare(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty() && self.text.is_empty()
    }

    fn open(start: &BytesStart<'_>) -> Result<Self, GateError> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = BTreeMap::new();
        for attribute in start.attributes() {
            let attribute = attribute
                .map_err(|e| GateError::malformed(format!("bad attribute on <{name}>: {e}")))?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute.unescape_value().map_err(malformed)?;
            attributes.insert(format!("{ATTRIBUTE_PREFIX}{key}"), value.into_owned());
        }
        Ok(Self {
            name,
            attributes,
            ..Self::default()
        })
    }

    fn push_child(&mut self, child: Element) {
        self.children
            .entry(child.name.clone())
            .or_default()
            .push(child);
    }
}

/// A report that is known to contain `testsuites > testsuite`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReport {
    root: Element,
}

impl ParsedReport {
    /// The `<testsuites>` element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// All `<testsuite>` elements under the root; never empty.
    pub fn test_suites(&self) -> &[Element] {
        self.root.children(TESTSUITE)
    }
}

/// Parses raw report bytes.
///
/// # Errors
///
/// - [`GateError::MissingReport`] if `raw` is empty.
/// - [`GateError::Malformed`] if `raw` is not UTF-8 or not well-formed XML.
/// - [`GateError::NoTestSuites`] if there is no `<testsuites>` root, it
///   holds no `<testsuite>` child, or its only `<testsuite>` is bare.
pub fn parse(raw: &[u8]) -> Result<ParsedReport, GateError> {
    if raw.is_empty() {
        return Err(GateError::missing_report("results file is empty"));
    }

    let raw = raw.strip_prefix(UTF8_BOM).unwrap_or(raw);
    let source = std::str::from_utf8(raw)
        .map_err(|e| GateError::malformed(format!("report is not valid UTF-8: {e}")))?;

    let mut document = read_document(source)?;

    let root = document
        .children
        .remove(TESTSUITES)
        .and_then(|roots| roots.into_iter().next())
        .ok_or_else(|| GateError::no_test_suites("report has no <testsuites> element"))?;

    match root.children(TESTSUITE) {
        [] => {
            return Err(GateError::no_test_suites(
                "<testsuites> contains no <testsuite> elements",
            ))
        }
        // A lone suite with no attributes, children or text carries no data.
        [only] if only.is_bare() => {
            return Err(GateError::no_test_suites(
                "the only <testsuite> element is empty",
            ))
        }
        _ => {}
    }

    Ok(ParsedReport { root })
}

/// Builds the element tree under an unnamed document node.
fn read_document(source: &str) -> Result<Element, GateError> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(true);

    let mut stack = vec![Element::default()];

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Start(start) => stack.push(Element::open(&start)?),
            Event::Empty(start) => {
                let element = Element::open(&start)?;
                attach(&mut stack, element)?;
            }
            Event::End(end) => {
                if stack.len() < 2 {
                    return Err(GateError::malformed(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(end.name().as_ref())
                    )));
                }
                if let Some(element) = stack.pop() {
                    attach(&mut stack, element)?;
                }
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(malformed)?;
                append_text(&mut stack, &text);
            }
            Event::CData(data) => {
                let bytes = data.into_inner();
                append_text(&mut stack, &String::from_utf8_lossy(&bytes));
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, DOCTYPE.
            _ => {}
        }
    }

    if stack.len() > 1 {
        let name = stack.last().map(|e| e.name.clone()).unwrap_or_default();
        return Err(GateError::malformed(format!("unclosed element <{name}>")));
    }

    stack
        .pop()
        .ok_or_else(|| GateError::malformed("empty document"))
}

fn attach(stack: &mut [Element], element: Element) -> Result<(), GateError> {
    let parent = stack
        .last_mut()
        .ok_or_else(|| GateError::malformed("element outside of document"))?;
    parent.push_child(element);
    Ok(())
}

fn append_text(stack: &mut [Element], text: &str) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return;
    }
    if let Some(current) = stack.last_mut() {
        current.text.push_str(trimmed);
    }
}

fn malformed(err: impl Display) -> GateError {
    GateError::malformed(err.to_string())
}
