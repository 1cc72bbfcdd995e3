use std::path::Path;

use spdlog::info;

use crate::collection::build_collection;
use crate::config::Config;
use crate::error::Result;
use crate::writer::write_posts;
use crate::xml_doc::load_document;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub published: usize,
    pub drafts: usize,
    pub comments: usize,
    pub ignored: usize,
}

/// Reads the export, collects every entry and only then touches the output
/// directories, so a parse or classification error leaves them untouched.
pub fn run_import(export_file: &Path, config: &Config) -> Result<ImportSummary> {
    let doc = load_document(export_file)?;
    let collection = build_collection(&doc)?;
    let options = config.render_options();

    info!("** Writing PUBLISHED posts");
    let published = write_posts(&collection.published, &config.paths.posts_dir, &options)?;

    info!("");
    info!("** Writing DRAFT posts");
    let drafts = write_posts(&collection.drafts, &config.paths.drafts_dir, &options)?;

    Ok(ImportSummary {
        published,
        drafts,
        comments: collection.comment_count,
        ignored: collection.ignored_count,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use crate::config::Paths;
    use crate::error::ImportError;
    use crate::test_data::EXPORT_FEED;

    use super::*;

    fn config_in(dir: &Path) -> Config {
        Config {
            paths: Paths {
                posts_dir: dir.join("_posts"),
                drafts_dir: dir.join("_drafts"),
            },
            ..Default::default()
        }
    }

    fn export_in(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("blog.xml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_run_import() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());
        let export = export_in(tmp.path(), EXPORT_FEED);

        let summary = run_import(&export, &config).unwrap();
        assert_eq!(summary, ImportSummary { published: 1, drafts: 1, comments: 2, ignored: 2 });

        let post = fs::read_to_string(config.paths.posts_dir.join("2020-01-01-hi-there.html")).unwrap();
        assert!(post.starts_with("---\nlayout: post\ntitle: \"Hi\"\ndate: 2020-01-01T00:00:00+00:00\ncomments: false\ncategories:\n - news\n---\n\n"));
        assert!(!post.contains("Alice"));

        let draft = fs::read_to_string(config.paths.drafts_dir.join("2020-02-10-work-in-progress.html")).unwrap();
        assert!(draft.contains("date: 2020-02-10T12:30:00-03:00"));
    }

    #[test]
    fn test_parse_error_leaves_dirs_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());
        fs::create_dir_all(&config.paths.posts_dir).unwrap();
        fs::write(config.paths.posts_dir.join("keep.html"), "keep").unwrap();
        let export = export_in(tmp.path(), "<feed><entry></feed>");

        let res = run_import(&export, &config);
        assert!(matches!(res, Err(ImportError::Parse { .. })));
        assert!(config.paths.posts_dir.join("keep.html").exists());
        assert!(!config.paths.drafts_dir.exists());
    }
}
