//! Form element value object
//!
//! An `Element` carries everything a row needs to render one input: its name,
//! label, HTML attributes, render options and validation messages. It can be
//! built in code or deserialized from JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Option key holding block help text (also receives rendered errors)
pub const OPTION_HELP_BLOCK: &str = "help-block";
/// Option key holding inline help text
pub const OPTION_HELP_INLINE: &str = "help-inline";

/// HTML attributes, unique keys, iterated in sorted key order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

/// One `<option>` of a select element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub label_attributes: Attributes,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    /// Validation error messages
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub value_options: Vec<ValueOption>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    pub fn with_label_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.label_attributes.set(key, value);
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_value_option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.value_options.push(ValueOption {
            value: value.into(),
            label: label.into(),
        });
        self
    }

    /// Label text, if present and non-empty
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.has(key)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.set(key, value);
    }

    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.options.insert(key.into(), value.into());
    }

    /// Identifier used for `for=` and the control-group id: the `id`
    /// attribute when set, otherwise the element name
    pub fn identifier(&self) -> &str {
        self.attribute("id").unwrap_or(&self.name)
    }

    /// Input type from the `type` attribute, `text` when unset
    pub fn input_type(&self) -> &str {
        self.attribute("type").unwrap_or("text")
    }
}
