use std::fmt;
use std::fmt::{Display, Formatter, Write};

use chrono::{DateTime, FixedOffset};

use crate::comment::Comment;
use crate::error::{ImportError, Result};
use crate::text_utils::{format_date_time, parse_date_time, slug_from_permalink, slug_from_title};
use crate::xml_doc::XmlNode;

pub const BLOGGER_CATEGORY_SCHEME: &str = "http://www.blogger.com/atom/ns#";

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct PostId(pub String);

impl Display for PostId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub render_comments: bool,
    pub extension: &'static str,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            render_comments: false,
            extension: "html",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub date: DateTime<FixedOffset>,
    pub permalink: Option<String>,
    pub categories: Vec<String>,
    /// Newest attached comment first
    pub comments: Vec<Comment>,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "id={}, date={}, title={}, comments={}",
               self.id,
               self.date,
               self.title,
               self.comments.len()
        )
    }
}

/// Example of an exported post
/// <entry>
///   <id>tag:blogger.com,1999:blog-1.post-2</id>
///   <published>2011-03-05T10:00:00.000-08:00</published>
///   <category scheme="http://schemas.google.com/g/2005#kind" term="http://schemas.google.com/blogger/2008/kind#post"/>
///   <category scheme="http://www.blogger.com/atom/ns#" term="rust"/>
///   <title type="text">My post title</title>
///   <content type="html">&lt;p&gt;Hello&lt;/p&gt;</content>
///   <link rel="alternate" type="text/html" href="https://example.com/2011/03/my-post-title.html"/>
/// </entry>
impl Post {
    pub fn from_entry(id: PostId, node: &XmlNode) -> Result<Post> {
        let field = |name: &'static str| {
            node.child(name)
                .map(|n| n.text())
                .ok_or_else(|| ImportError::MissingField { entry: id.0.clone(), field: name })
        };

        let title = field("title")?;
        let content = field("content")?;
        let published = field("published")?;
        let date = parse_date_time(&published)
            .map_err(|reason| ImportError::InvalidDate { value: published.clone(), reason })?;

        let permalink = node.children("link")
            .find(|l| l.attr("rel") == Some("alternate"))
            .and_then(|l| l.attr("href"))
            .map(|href| href.to_string());

        let categories = node.children("category")
            .filter(|c| c.attr("scheme") == Some(BLOGGER_CATEGORY_SCHEME))
            .filter_map(|c| c.attr("term"))
            .map(|t| t.to_string())
            .collect();

        Ok(Post {
            id,
            title,
            content,
            date,
            permalink,
            categories,
            comments: vec![],
        })
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    pub fn creation_date(&self) -> String {
        let (date, _) = format_date_time(&self.date);
        date
    }

    pub fn slug(&self) -> String {
        self.permalink.as_deref()
            .and_then(slug_from_permalink)
            .unwrap_or_else(|| slug_from_title(&self.title))
    }

    pub fn file_name(&self, options: &RenderOptions) -> String {
        format!("{}-{}.{}", self.creation_date(), self.slug(), options.extension)
    }

    fn categories_block(&self) -> Option<String> {
        if self.categories.is_empty() {
            return None;
        }

        let mut buf = String::from("categories:");
        for term in &self.categories {
            let _ = write!(&mut buf, "\n - {}", term);
        }
        Some(buf)
    }

    pub fn header(&self) -> String {
        let (_, date_time) = format_date_time(&self.date);
        let mut buf = String::new();

        let _ = writeln!(&mut buf, "---");
        let _ = writeln!(&mut buf, "layout: post");
        let _ = writeln!(&mut buf, "title: \"{}\"", self.title);
        let _ = writeln!(&mut buf, "date: {}", date_time);
        let _ = writeln!(&mut buf, "comments: false");
        if let Some(categories) = self.categories_block() {
            let _ = writeln!(&mut buf, "{}", categories);
        }
        let _ = write!(&mut buf, "---");
        buf
    }

    pub fn body(&self, options: &RenderOptions) -> String {
        let mut buf = String::new();

        let _ = writeln!(&mut buf, "<div class='post'>");
        buf.push_str(&self.content);
        let _ = writeln!(&mut buf, "</div>");

        if options.render_comments {
            buf.push_str(&self.render_comments());
        }
        buf
    }

    fn render_comments(&self) -> String {
        let mut buf = String::new();

        let _ = writeln!(&mut buf, "<h2>Comments</h2>");
        let _ = writeln!(&mut buf, "<div class='comments'>");
        for comment in &self.comments {
            let _ = writeln!(&mut buf, "<div class='comment'>");
            let _ = writeln!(&mut buf, "<div class='author'>{}</div>", comment.author);
            let _ = writeln!(&mut buf, "<div class='content'>");
            buf.push_str(&comment.content);
            let _ = writeln!(&mut buf, "</div>");
            let _ = writeln!(&mut buf, "</div>");
        }
        let _ = writeln!(&mut buf, "</div>");
        buf
    }

    /// Full file content: header, blank line and body
    pub fn render(&self, options: &RenderOptions) -> String {
        format!("{}\n\n{}", self.header(), self.body(options))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_data::{POST_ENTRY, POST_HEADER};
    use crate::xml_doc::parse_document;

    use super::*;

    fn post_from(xml: &str) -> Post {
        let doc = parse_document(xml).unwrap();
        Post::from_entry(PostId("p1".to_string()), &doc.root).unwrap()
    }

    fn comment(author: &str) -> Comment {
        Comment { author: author.to_string(), content: format!("said by {}", author) }
    }

    #[test]
    fn test_from_entry() {
        let post = post_from(POST_ENTRY);
        assert_eq!(post.title, "My post title");
        assert_eq!(post.content, "<p>Hello</p>");
        assert_eq!(post.permalink.as_deref(), Some("https://example.com/2011/03/my-post-title.html"));
        assert_eq!(post.categories, ["rust", "blogging"]);
        assert!(post.comments.is_empty());
    }

    #[test]
    fn test_file_name() {
        let post = post_from(POST_ENTRY);
        assert_eq!(post.slug(), "my-post-title");
        assert_eq!(post.file_name(&RenderOptions::default()), "2011-03-05-my-post-title.html");
    }

    #[test]
    fn test_slug_from_title_without_permalink() {
        let post = post_from(r#"<entry>
            <title>Hello, World! 2021</title><content/>
            <published>2021-06-01T08:30:00.000+02:00</published>
            <link rel="replies" href="https://example.com/feeds/1/comments/default"/>
        </entry>"#);
        assert_eq!(post.permalink, None);
        assert_eq!(post.file_name(&RenderOptions::default()), "2021-06-01-hello-world-2021.html");
    }

    #[test]
    fn test_header() {
        let post = post_from(POST_ENTRY);
        assert_eq!(post.header(), POST_HEADER);
    }

    #[test]
    fn test_header_without_categories() {
        let mut post = post_from(POST_ENTRY);
        post.categories.clear();
        let header = post.header();
        assert!(!header.contains("categories"));
        assert_eq!(header, "---\nlayout: post\ntitle: \"My post title\"\ndate: 2011-03-05T10:00:00+00:00\ncomments: false\n---");
    }

    #[test]
    fn test_category_without_term_is_skipped() {
        let post = post_from(r#"<entry>
            <category scheme="http://www.blogger.com/atom/ns#"/>
            <category scheme="http://www.blogger.com/atom/ns#" term="kept"/>
            <title>t</title><content/><published>2020-01-01T00:00:00Z</published>
        </entry>"#);
        assert_eq!(post.categories, ["kept"]);
    }

    #[test]
    fn test_missing_published() {
        let doc = parse_document("<entry><title>t</title><content/></entry>").unwrap();
        let res = Post::from_entry(PostId("p1".to_string()), &doc.root);
        assert!(matches!(res, Err(ImportError::MissingField { field: "published", .. })));
    }

    #[test]
    fn test_comments_newest_first() {
        let mut post = post_from(POST_ENTRY);
        post.add_comment(comment("first"));
        post.add_comment(comment("second"));
        post.add_comment(comment("third"));
        let authors: Vec<&str> = post.comments.iter().map(|c| c.author.as_str()).collect();
        assert_eq!(authors, ["third", "second", "first"]);
    }

    #[test]
    fn test_body_never_renders_comments_by_default() {
        let mut post = post_from(POST_ENTRY);
        post.add_comment(comment("reader"));
        let body = post.body(&RenderOptions::default());
        assert_eq!(body, "<div class='post'>\n<p>Hello</p></div>\n");
        assert!(!post.render(&RenderOptions::default()).contains("said by reader"));
    }

    #[test]
    fn test_body_with_comments() {
        let mut post = post_from(POST_ENTRY);
        post.add_comment(comment("reader"));
        let options = RenderOptions { render_comments: true, ..Default::default() };
        let body = post.body(&options);
        assert_eq!(body, "<div class='post'>\n<p>Hello</p></div>\n\
<h2>Comments</h2>\n\
<div class='comments'>\n\
<div class='comment'>\n\
<div class='author'>reader</div>\n\
<div class='content'>\n\
said by reader</div>\n\
</div>\n\
</div>\n");
    }
}
