use std::collections::HashMap;

use crate::post::{Post, PostId};

/// Posts keyed by entry id. Iteration follows the order in which ids were
/// first inserted, so repeated runs write files in the same order.
#[derive(Debug, Default)]
pub struct PostMap {
    posts: Vec<Post>,
    index: HashMap<PostId, usize>,
}

impl PostMap {
    pub fn new() -> PostMap {
        Default::default()
    }

    /// Inserts the post, returning the one it replaced under the same id
    pub fn insert(&mut self, post: Post) -> Option<Post> {
        match self.index.get(&post.id) {
            Some(&pos) => Some(std::mem::replace(&mut self.posts[pos], post)),
            None => {
                self.index.insert(post.id.clone(), self.posts.len());
                self.posts.push(post);
                None
            }
        }
    }

    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.index.get(id).map(|&pos| &self.posts[pos])
    }

    pub fn get_mut(&mut self, id: &PostId) -> Option<&mut Post> {
        match self.index.get(id) {
            Some(&pos) => self.posts.get_mut(pos),
            None => None,
        }
    }

    pub fn contains(&self, id: &PostId) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item=&Post> {
        self.posts.iter()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
