use spdlog::{debug, warn};

use crate::comment::Comment;
use crate::entry::{classify, entry_id, EntryKind, Publication};
use crate::error::{ImportError, Result};
use crate::post::Post;
use crate::post_map::PostMap;
use crate::xml_doc::{XmlDocument, XmlNode};

#[derive(Debug, Default)]
pub struct Collection {
    pub published: PostMap,
    pub drafts: PostMap,
    pub comment_count: usize,
    pub ignored_count: usize,
}

impl Collection {
    pub fn new() -> Collection {
        Default::default()
    }

    pub fn add(&mut self, node: &XmlNode) -> Result<()> {
        let id = entry_id(node)?;

        match classify(&id, node)? {
            EntryKind::Post(publication) => {
                let post = Post::from_entry(id, node)?;
                let target = match publication {
                    Publication::Published => &mut self.published,
                    Publication::Draft => &mut self.drafts,
                };
                if let Some(old) = target.insert(post) {
                    warn!("Post {} appears more than once, keeping the last one", old.id);
                }
            }
            EntryKind::Comment(parent) => {
                let comment = Comment::from_entry(&id.0, node);
                // Drafts never receive comments
                let post = self.published.get_mut(&parent)
                    .ok_or_else(|| ImportError::UnresolvedCommentParent(parent.0.clone()))?;
                post.add_comment(comment);
                self.comment_count += 1;
            }
            EntryKind::Template | EntryKind::Settings => {
                debug!("Ignoring entry {}", id);
                self.ignored_count += 1;
            }
            EntryKind::Unknown(kind) => return Err(ImportError::UnrecognizedEntryKind(kind)),
        }

        Ok(())
    }
}

/// Walks the entries in document order
pub fn build_collection(doc: &XmlDocument) -> Result<Collection> {
    let mut collection = Collection::new();
    for entry in doc.entries() {
        collection.add(entry)?;
    }
    Ok(collection)
}
