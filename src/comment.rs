use spdlog::debug;

use crate::xml_doc::XmlNode;

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub author: String,
    pub content: String,
}

impl Comment {
    /// Missing author or content are left empty, comments are only read
    /// back when they are rendered
    pub fn from_entry(id: &str, node: &XmlNode) -> Comment {
        let author = node.child("author")
            .and_then(|a| a.child("name"))
            .map(|n| n.text());
        let content = node.child("content").map(|c| c.text());

        if author.is_none() || content.is_none() {
            debug!("Comment {} has no author or content", id);
        }

        Comment {
            author: author.unwrap_or_default(),
            content: content.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::xml_doc::parse_document;

    use super::*;

    #[test]
    fn test_from_entry() {
        let doc = parse_document(r#"<entry>
            <author><name>Anonymous</name><email>noreply@blogger.com</email></author>
            <content type="html">Nice &lt;b&gt;post&lt;/b&gt;</content>
        </entry>"#).unwrap();
        let comment = Comment::from_entry("c1", &doc.root);
        assert_eq!(comment.author, "Anonymous");
        assert_eq!(comment.content, "Nice <b>post</b>");
    }

    #[test]
    fn test_missing_author() {
        let doc = parse_document("<entry><content>text</content></entry>").unwrap();
        let comment = Comment::from_entry("c1", &doc.root);
        assert_eq!(comment.author, "");
        assert_eq!(comment.content, "text");
    }

    #[test]
    fn test_missing_content() {
        let doc = parse_document("<entry><author><name>Bob</name></author></entry>").unwrap();
        let comment = Comment::from_entry("c1", &doc.root);
        assert_eq!(comment.author, "Bob");
        assert_eq!(comment.content, "");
    }
}
