use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;
use spdlog::debug;

use crate::error::{ImportError, Result};

/// Element of a parsed export. Names are local names, the namespace is kept
/// apart so prefixed elements (`app:draft`) can be matched by namespace URI.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlNode {
    pub namespace: Option<String>,
    pub name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlChild>,
}

#[derive(Debug, Clone, PartialEq)]
enum XmlChild {
    Element(XmlNode),
    Text(String),
}

#[derive(Debug)]
pub struct XmlDocument {
    pub root: XmlNode,
}

impl XmlNode {
    fn new(namespace: Option<String>, name: String) -> XmlNode {
        XmlNode {
            namespace,
            name,
            attributes: vec![],
            children: vec![],
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn elements(&self) -> impl Iterator<Item=&XmlNode> {
        self.children.iter().filter_map(|c| match c {
            XmlChild::Element(e) => Some(e),
            XmlChild::Text(_) => None,
        })
    }

    /// First direct child with the given local name
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.elements().find(|e| e.name == name)
    }

    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item=&'a XmlNode> + 'a {
        self.elements().filter(move |e| e.name == name)
    }

    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.name == name && self.namespace.as_deref() == Some(namespace)
    }

    /// All descendants (self included) with the given local name, in document order
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a XmlNode> {
        let mut found = vec![];
        self.collect(&|n: &XmlNode| n.name == name, &mut found);
        found
    }

    pub fn find_where<'a, F>(&'a self, pred: F) -> Vec<&'a XmlNode>
        where F: Fn(&XmlNode) -> bool
    {
        let mut found = vec![];
        self.collect(&pred, &mut found);
        found
    }

    fn collect<'a, F>(&'a self, pred: &F, found: &mut Vec<&'a XmlNode>)
        where F: Fn(&XmlNode) -> bool
    {
        if pred(self) {
            found.push(self);
        }
        for e in self.elements() {
            e.collect(pred, found);
        }
    }

    /// Concatenated text of this element and all of its descendants
    pub fn text(&self) -> String {
        let mut buf = String::new();
        self.push_text(&mut buf);
        buf
    }

    fn push_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                XmlChild::Text(t) => buf.push_str(t),
                XmlChild::Element(e) => e.push_text(buf),
            }
        }
    }
}

impl XmlDocument {
    pub fn entries(&self) -> Vec<&XmlNode> {
        self.root.find_all("entry")
    }
}

pub fn load_document(path: &Path) -> Result<XmlDocument> {
    let content = fs::read_to_string(path).map_err(|e| ImportError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!("Read {} bytes from {}", content.len(), path.display());

    parse_document(&content).map_err(|reason| ImportError::Parse {
        path: path.to_path_buf(),
        reason,
    })
}

pub fn parse_document(xml: &str) -> std::result::Result<XmlDocument, String> {
    let mut reader = NsReader::from_str(xml);
    let mut stack: Vec<XmlNode> = vec![];
    let mut root: Option<XmlNode> = None;

    loop {
        let (ns, event) = reader.read_resolved_event()
            .map_err(|e| e.to_string())?;
        let namespace = match ns {
            ResolveResult::Bound(ns) => Some(String::from_utf8_lossy(ns.as_ref()).into_owned()),
            _ => None,
        };

        match event {
            Event::Start(e) => {
                stack.push(new_node(namespace, &e)?);
            }
            Event::Empty(e) => {
                let node = new_node(namespace, &e)?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::End(_) => {
                let node = stack.pop().ok_or("Unexpected closing tag".to_string())?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::Text(t) => {
                let text = t.unescape().map_err(|e| e.to_string())?;
                push_text(&mut stack, &text)?;
            }
            Event::CData(c) => {
                let text = std::str::from_utf8(&c).map_err(|e| e.to_string())?;
                push_text(&mut stack, text)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(format!("Element {} is not closed", open.name));
    }

    match root {
        Some(root) => Ok(XmlDocument { root }),
        None => Err("Document has no root element".to_string()),
    }
}

fn new_node(namespace: Option<String>, start: &BytesStart) -> std::result::Result<XmlNode, String> {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let mut node = XmlNode::new(namespace, name);
    for attr in start.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value().map_err(|e| e.to_string())?;
        node.attributes.push((key, value.into_owned()));
    }
    Ok(node)
}

fn attach(stack: &mut Vec<XmlNode>, root: &mut Option<XmlNode>, node: XmlNode) -> std::result::Result<(), String> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(XmlChild::Element(node)),
        None if root.is_none() => *root = Some(node),
        None => return Err(format!("Unexpected second root element {}", node.name)),
    }
    Ok(())
}

fn push_text(stack: &mut Vec<XmlNode>, text: &str) -> std::result::Result<(), String> {
    match stack.last_mut() {
        Some(parent) => {
            // Adjacent text and CDATA blocks are merged
            if let Some(XmlChild::Text(prev)) = parent.children.last_mut() {
                prev.push_str(text);
            } else {
                parent.children.push(XmlChild::Text(text.to_string()));
            }
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err("Text outside of the root element".to_string()),
    }
}
