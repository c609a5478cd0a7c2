//! Collaborator helpers used by `FormRow`
//!
//! Each capability is a trait with a default implementation in this module
//! tree. `Helpers` binds one implementation per capability up front, either
//! the defaults or whatever a `PluginResolver` hands out by name.

pub mod element;
pub mod errors;
pub mod help;
pub mod label;

use std::collections::HashMap;

use crate::element::{Attributes, Element};
use crate::i18n::SharedTranslator;

pub use element::FormElement;
pub use errors::FormElementErrors;
pub use help::{FormElementHelpBlock, FormElementHelpInline};
pub use label::FormLabel;

pub const PLUGIN_ELEMENT: &str = "form_element";
pub const PLUGIN_ERRORS: &str = "form_element_errors";
pub const PLUGIN_LABEL: &str = "form_label";
pub const PLUGIN_HELP_BLOCK: &str = "form_element_help_block";
pub const PLUGIN_HELP_INLINE: &str = "form_element_help_inline";

/// Renders the input markup of an element
pub trait ElementRenderer {
    fn render(&self, element: &Element) -> String;
}

/// Renders validation messages; empty string when there are none
pub trait ErrorsRenderer {
    fn render(&self, element: &Element, attributes: &Attributes) -> String;
}

pub trait LabelRenderer {
    /// Complete `<label>` tag for the element
    fn render(&self, element: &Element) -> String;
    fn open_tag(&self, attributes: &Attributes) -> String;
    fn close_tag(&self) -> String;

    fn set_translator(&mut self, _translator: Option<SharedTranslator>, _text_domain: &str) {}
}

/// Renders help text attached to an element; empty string when there is none
pub trait HelpRenderer {
    fn render(&self, element: &Element) -> String;
}

/// A helper handed out by a resolver
pub enum Plugin {
    Element(Box<dyn ElementRenderer>),
    Errors(Box<dyn ErrorsRenderer>),
    Label(Box<dyn LabelRenderer>),
    Help(Box<dyn HelpRenderer>),
}

impl Plugin {
    fn kind(&self) -> &'static str {
        match self {
            Plugin::Element(_) => "element",
            Plugin::Errors(_) => "errors",
            Plugin::Label(_) => "label",
            Plugin::Help(_) => "help",
        }
    }
}

/// Named helper lookup, e.g. a view's plugin manager
pub trait PluginResolver {
    fn plugin(&self, name: &str) -> Option<Plugin>;
}

type PluginFactory = Box<dyn Fn() -> Plugin>;

/// Name to factory map
#[derive(Default)]
pub struct PluginRegistry {
    factories: HashMap<String, PluginFactory>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Plugin + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
        self
    }
}

impl PluginResolver for PluginRegistry {
    fn plugin(&self, name: &str) -> Option<Plugin> {
        self.factories.get(name).map(|factory| factory())
    }
}

/// One bound implementation per capability
pub struct Helpers {
    pub element: Box<dyn ElementRenderer>,
    pub errors: Box<dyn ErrorsRenderer>,
    pub label: Box<dyn LabelRenderer>,
    pub help_block: Box<dyn HelpRenderer>,
    pub help_inline: Box<dyn HelpRenderer>,
}

impl Default for Helpers {
    fn default() -> Self {
        Self {
            element: Box::new(FormElement),
            errors: Box::new(FormElementErrors),
            label: Box::new(FormLabel::default()),
            help_block: Box::new(FormElementHelpBlock),
            help_inline: Box::new(FormElementHelpInline),
        }
    }
}

impl Helpers {
    /// Ask the resolver for every helper, keeping the default for any it
    /// doesn't provide (or provides with the wrong kind)
    pub fn resolve(resolver: &dyn PluginResolver) -> Self {
        let mut helpers = Self::default();

        if let Some(plugin) = resolver.plugin(PLUGIN_ELEMENT) {
            match plugin {
                Plugin::Element(h) => helpers.element = h,
                other => mismatch(PLUGIN_ELEMENT, &other),
            }
        }
        if let Some(plugin) = resolver.plugin(PLUGIN_ERRORS) {
            match plugin {
                Plugin::Errors(h) => helpers.errors = h,
                other => mismatch(PLUGIN_ERRORS, &other),
            }
        }
        if let Some(plugin) = resolver.plugin(PLUGIN_LABEL) {
            match plugin {
                Plugin::Label(h) => helpers.label = h,
                other => mismatch(PLUGIN_LABEL, &other),
            }
        }
        if let Some(plugin) = resolver.plugin(PLUGIN_HELP_BLOCK) {
            match plugin {
                Plugin::Help(h) => helpers.help_block = h,
                other => mismatch(PLUGIN_HELP_BLOCK, &other),
            }
        }
        if let Some(plugin) = resolver.plugin(PLUGIN_HELP_INLINE) {
            match plugin {
                Plugin::Help(h) => helpers.help_inline = h,
                other => mismatch(PLUGIN_HELP_INLINE, &other),
            }
        }

        helpers
    }
}

fn mismatch(name: &str, plugin: &Plugin) {
    tracing::warn!(
        "Plugin '{}' resolved to a {} helper, using the default instead",
        name,
        plugin.kind()
    );
}
