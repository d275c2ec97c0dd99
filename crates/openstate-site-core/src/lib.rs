//! OpenState Site Core Library
//!
//! Configuration, page metadata, content model and error handling shared by
//! the renderer and the generator.

pub mod config;
pub mod content;
pub mod descriptor;
pub mod error;

pub use config::Config;
pub use content::{ContentItem, ContentList, Field, IconTag};
pub use descriptor::PageDescriptor;
pub use error::{CoreError, Result};
