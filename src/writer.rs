use std::collections::HashSet;
use std::fs;
use std::path::Path;

use spdlog::{info, warn};

use crate::error::{ImportError, Result};
use crate::post::{Post, RenderOptions};
use crate::post_map::PostMap;

/// Removes `dir` with everything inside and creates it again, empty.
/// A plain file in its place is removed as well.
pub fn reset_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        fs::remove_dir_all(dir).map_err(|e| ImportError::fs(dir, e))?;
    } else if dir.exists() {
        fs::remove_file(dir).map_err(|e| ImportError::fs(dir, e))?;
    }
    fs::create_dir_all(dir).map_err(|e| ImportError::fs(dir, e))
}

pub fn write_post(post: &Post, dir: &Path, options: &RenderOptions) -> Result<String> {
    info!("Post [{}] has {} comments", post.title, post.comments.len());

    let file_name = post.file_name(options);
    info!("writing {}", file_name);

    let path = dir.join(&file_name);
    fs::write(&path, post.render(options)).map_err(|e| ImportError::fs(&path, e))?;
    Ok(file_name)
}

/// Writes every post of the map into a freshly created `dir`, returning how
/// many files were written. Posts sharing a file name overwrite each other.
pub fn write_posts(posts: &PostMap, dir: &Path, options: &RenderOptions) -> Result<usize> {
    reset_dir(dir)?;

    let mut written = HashSet::new();
    for post in posts.iter() {
        let file_name = write_post(post, dir, options)?;
        if !written.insert(file_name.clone()) {
            warn!("{} was overwritten by post {}", file_name, post.id);
        }
    }

    Ok(posts.len())
}
