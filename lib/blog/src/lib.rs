//! Blog articles for the Lichtpunt website.
//!
//! [`BlogSource`] is the read-only content client used by the blog pages.
//! Two implementations exist: [`ContentfulClient`] for the hosted CMS and
//! [`InMemoryBlog`] for tests and local development.

pub mod config;
#[cfg(feature = "http")]
pub mod contentful;
pub mod error;
pub mod memory;
pub mod model;
pub mod source;

pub use config::{CmsConfig, CmsCredentials, SourceKind};
#[cfg(feature = "http")]
pub use contentful::ContentfulClient;
pub use error::BlogError;
pub use memory::InMemoryBlog;
pub use model::{Article, Author, Image, Paged, Pagination, format_published};
pub use source::BlogSource;
