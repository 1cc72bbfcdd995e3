pub mod config;
pub mod logger;
pub mod error;
pub mod xml_doc;
pub mod entry;
pub mod post;
pub mod comment;
pub mod post_map;
pub mod collection;
pub mod writer;
pub mod importer;
mod text_utils;
mod test_data;
