use crate::error::{ImportError, Result};
use crate::post::PostId;
use crate::xml_doc::XmlNode;

/// Namespaces in which `control/draft` marks an unpublished post
pub const APP_NAMESPACES: [&str; 2] = [
    "http://purl.org/atom/app#",
    "http://www.w3.org/2007/app",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Publication {
    Published,
    Draft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Post(Publication),
    /// Comment replying to the given post
    Comment(PostId),
    Template,
    Settings,
    Unknown(String),
}

pub fn entry_id(node: &XmlNode) -> Result<PostId> {
    node.child("id")
        .map(|n| PostId(n.text().trim().to_string()))
        .ok_or_else(|| ImportError::MissingField { entry: "<unknown>".to_string(), field: "id" })
}

/// Reads the kind from the term of the first category, e.g.
/// `http://schemas.google.com/blogger/2008/kind#post` is a post
pub fn classify(id: &PostId, node: &XmlNode) -> Result<EntryKind> {
    let term = node.child("category")
        .and_then(|c| c.attr("term"))
        .ok_or_else(|| missing(id, "category term"))?;
    let kind = term.rsplit('#').next().unwrap_or(term);

    let kind = match kind {
        "post" => EntryKind::Post(publication(node)),
        "comment" => EntryKind::Comment(reply_to(id, node)?),
        "template" => EntryKind::Template,
        "settings" => EntryKind::Settings,
        other => EntryKind::Unknown(other.to_string()),
    };
    Ok(kind)
}

pub fn publication(node: &XmlNode) -> Publication {
    let is_app = |n: &XmlNode, name: &str| APP_NAMESPACES.iter().any(|ns| n.is(ns, name));

    let is_draft = node.find_where(|n| is_app(n, "control"))
        .iter()
        .any(|control| !control.find_where(|n| is_app(n, "draft")).is_empty());

    if is_draft {
        Publication::Draft
    } else {
        Publication::Published
    }
}

fn reply_to(id: &PostId, node: &XmlNode) -> Result<PostId> {
    node.child("in-reply-to")
        .and_then(|r| r.attr("ref"))
        .map(|r| PostId(r.to_string()))
        .ok_or_else(|| missing(id, "in-reply-to ref"))
}

fn missing(id: &PostId, field: &'static str) -> ImportError {
    ImportError::MissingField { entry: id.0.clone(), field }
}
