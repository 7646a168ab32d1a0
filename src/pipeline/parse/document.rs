use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use crate::error::ParseError;
use crate::pipeline::parse::namespace::{Namespaces, Step};

/// In-memory XML element with its namespace already resolved to a URI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub namespace: Option<String>,
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All descendants reached by `path`, in document order.
    pub fn find_all<'a>(&'a self, path: &str, namespaces: &Namespaces) -> Vec<&'a Element> {
        let Some(steps) = namespaces.compile(path) else {
            return Vec::new();
        };

        let mut current = vec![self];
        for step in &steps {
            current = current
                .into_iter()
                .flat_map(move |el| el.children.iter().filter(move |child| child.matches(step)))
                .collect();
        }
        current
    }

    /// First descendant reached by `path`.
    pub fn find<'a>(&'a self, path: &str, namespaces: &Namespaces) -> Option<&'a Element> {
        let steps = namespaces.compile(path)?;
        first_match(self, &steps)
    }

    pub fn find_text<'a>(&'a self, path: &str, namespaces: &Namespaces) -> Option<&'a str> {
        self.find(path, namespaces).map(|el| el.text.as_str())
    }

    fn matches(&self, step: &Step<'_>) -> bool {
        self.name == step.local && self.namespace.as_deref() == step.namespace
    }
}

fn first_match<'a>(el: &'a Element, steps: &[Step<'_>]) -> Option<&'a Element> {
    match steps.split_first() {
        None => Some(el),
        Some((step, rest)) => el
            .children
            .iter()
            .filter(|child| child.matches(step))
            .find_map(|child| first_match(child, rest)),
    }
}

/// Decodes a whole document into its root element.
pub fn read_document(bytes: &[u8]) -> Result<Element, ParseError> {
    let mut reader = NsReader::from_reader(bytes);
    reader.trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_resolved_event_into(&mut buf)? {
            (ns, Event::Start(e)) => {
                stack.push(start_element(ns, &e)?);
            }
            (ns, Event::Empty(e)) => {
                let element = start_element(ns, &e)?;
                attach(&mut stack, &mut root, element)?;
            }
            (_, Event::Text(e)) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&e.unescape()?);
                }
            }
            (_, Event::CData(e)) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            (_, Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| ParseError::InvalidTcx("unexpected closing tag".to_string()))?;
                attach(&mut stack, &mut root, element)?;
            }
            (_, Event::Eof) => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(ParseError::InvalidTcx(format!("unclosed element <{}>", open.name)));
    }

    root.ok_or_else(|| ParseError::InvalidTcx("document has no root element".to_string()))
}

fn start_element(ns: ResolveResult<'_>, e: &BytesStart<'_>) -> Result<Element, ParseError> {
    let namespace = match ns {
        ResolveResult::Bound(Namespace(uri)) => Some(String::from_utf8_lossy(uri).into_owned()),
        ResolveResult::Unbound => None,
        ResolveResult::Unknown(prefix) => {
            return Err(ParseError::InvalidTcx(format!(
                "undeclared namespace prefix '{}'",
                String::from_utf8_lossy(&prefix)
            )))
        }
    };

    let name = std::str::from_utf8(e.local_name().as_ref())
        .map_err(|e| ParseError::InvalidTcx(e.to_string()))?
        .to_string();

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| ParseError::InvalidTcx(e.to_string()))?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let key = std::str::from_utf8(attr.key.local_name().as_ref())
            .map_err(|e| ParseError::InvalidTcx(e.to_string()))?
            .to_string();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        namespace,
        name,
        attributes,
        text: String::new(),
        children: Vec::new(),
    })
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), ParseError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(ParseError::InvalidTcx(
                "document has more than one root element".to_string(),
            ))
        }
    }
    Ok(())
}
