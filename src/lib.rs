//! Bootstrap control-group form rows
//!
//! Renders a label, an input, its validation errors and help text as one
//! `control-group` block:
//!
//! ```
//! use formrow::{Element, FormRow};
//!
//! let mut row = FormRow::default();
//! let mut element = Element::new("email").with_label("Email");
//!
//! let html = row.render(&mut element);
//! assert!(html.starts_with(r#"<div class="control-group " id="control-group-email">"#));
//! ```

pub mod config;
pub mod element;
pub mod error;
pub mod escape;
pub mod helpers;
pub mod i18n;
pub mod row;
pub mod status;

pub use config::RowConfig;
pub use element::{Attributes, Element, ValueOption};
pub use error::{FormRowError, Result};
pub use helpers::{Helpers, Plugin, PluginRegistry, PluginResolver};
pub use i18n::{Catalog, SharedTranslator, Translator};
pub use row::FormRow;
pub use status::{LabelPosition, RowStatus};
