//! OpenState Site UI
//!
//! Builds the structural tree of every page from inlined content.
//!
//! # Layers
//!
//! - [`primitives`] - [`container`], [`heading`], [`button`], [`arrow`]
//! - [`sections`] - intro, why, features, community, footer and foot
//! - [`page`] - route assembly into a [`Page`]
//!
//! Supporting types: [`Node`] (the output tree), [`RichText`] (restricted
//! inline formatting) and [`UrlResolver`] (asset and link resolution).
//!
//! # Example
//!
//! ```
//! use openstate_site_core::Config;
//! use openstate_site_ui::{RenderContext, Route, UrlResolver, assemble};
//!
//! let config = Config::from_toml_str(
//!     "[site]\ntitle = \"OpenState\"\nurl = \"https://example.com\"\n",
//! )
//! .unwrap();
//! let resolver = UrlResolver::new(&config);
//! let page = assemble(Route::Community, &RenderContext::new(&config, &resolver));
//! assert!(page.body.to_html().contains("Community Resources"));
//! ```

pub mod error;
pub mod node;
pub mod page;
pub mod primitives;
pub mod resolver;
pub mod rich_text;
pub mod sections;

pub use error::UiError;
pub use node::{Element, Node};
pub use page::{Page, Route, assemble, validate_route};
pub use primitives::{
    Align, ArrowConfig, ButtonConfig, Direction, LayoutConfig, Size, arrow, button, container,
    heading,
};
pub use resolver::{Resolved, UrlResolver};
pub use rich_text::{RichText, Span};
pub use sections::{CardSection, IconTreatment, RenderContext, Section, SectionId};
