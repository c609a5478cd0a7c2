//! Bootstrap control-group row
//!
//! `FormRow` renders one element as
//!
//! ```html
//! <div class="control-group {status}" id="control-group-{id}">
//!   <label for="{id}">{label}</label>
//!   <div class="controls">{element}{help-inline}{help-block}</div>
//! </div>
//! ```
//!
//! (without the whitespace). Validation errors mark the input with the
//! configured error class, flip the row status to `error` and, when error
//! rendering is on, replace the element's block help.

use crate::config::{RowConfig, DEFAULT_INPUT_ERROR_CLASS};
use crate::element::{Attributes, Element, OPTION_HELP_BLOCK};
use crate::error::Result;
use crate::escape::escape_html;
use crate::helpers::Helpers;
use crate::i18n::{Catalog, SharedTranslator, DEFAULT_TEXT_DOMAIN};
use crate::status::{LabelPosition, RowStatus};

use std::sync::Arc;

pub struct FormRow {
    helpers: Helpers,
    label_position: LabelPosition,
    label_attributes: Attributes,
    render_errors: bool,
    input_error_class: Option<String>,
    translator: Option<SharedTranslator>,
    text_domain: String,
    status: Option<RowStatus>,
}

impl Default for FormRow {
    fn default() -> Self {
        Self::new(Helpers::default())
    }
}

impl FormRow {
    pub fn new(helpers: Helpers) -> Self {
        Self {
            helpers,
            label_position: LabelPosition::Default,
            label_attributes: Attributes::new(),
            render_errors: true,
            input_error_class: Some(DEFAULT_INPUT_ERROR_CLASS.to_string()),
            translator: None,
            text_domain: DEFAULT_TEXT_DOMAIN.to_string(),
            status: None,
        }
    }

    /// Build a row from config, loading the translation catalog if one is set
    pub fn from_config(config: &RowConfig, helpers: Helpers) -> Result<Self> {
        let mut row = Self::new(helpers);
        row.set_label_position(config.label_position)
            .set_label_attributes(config.label_attributes.clone())
            .set_render_errors(config.render_errors)
            .set_input_error_class(Some(config.input_error_class.as_str()));

        let translator = match &config.translations {
            Some(path) => Some(Arc::new(Catalog::load(path)?) as SharedTranslator),
            None => None,
        };
        row.set_translator(translator, Some(config.text_domain.as_str()));

        Ok(row)
    }

    /// Render the row for `element`
    ///
    /// Mutates the element's `class` attribute and `help-block` option when
    /// it has validation errors, and may set the row status.
    pub fn render(&mut self, element: &mut Element) -> String {
        tracing::debug!("Rendering form row for element: {}", element.name);

        let error_attributes = Attributes::new().with("class", "errors");
        let element_errors = self.helpers.errors.render(element, &error_attributes);

        if !element_errors.is_empty() {
            if let Some(error_class) = self.input_error_class.as_deref() {
                let class = match element.attribute("class") {
                    Some(existing) => format!("{} {}", existing, error_class),
                    None => error_class.to_string(),
                };
                element.set_attribute("class", class);
                self.status = Some(RowStatus::Error);
            }

            if self.render_errors {
                // Overwrites any help text the element had
                element.set_option(OPTION_HELP_BLOCK, element_errors.as_str());
            }
        }

        let mut markup = self.helpers.element.render(element);
        markup.push_str(&self.helpers.help_inline.render(element));
        markup.push_str(&self.helpers.help_block.render(element));

        let mut markup = format!(r#"<div class="controls">{}</div>"#, markup);

        if let Some(label) = element.label() {
            let label = match &self.translator {
                Some(translator) => translator.translate(label, &self.text_domain),
                None => label.to_string(),
            };
            let mut label = escape_html(&label);

            let (open, close) = if element.has_attribute("id") {
                label = self.helpers.label.render(element);
                (String::new(), String::new())
            } else {
                let mut label_attributes = if element.label_attributes.is_empty() {
                    self.label_attributes.clone()
                } else {
                    element.label_attributes.clone()
                };
                if !label_attributes.has("for") {
                    label_attributes.set("for", element.identifier());
                }
                (
                    self.helpers.label.open_tag(&label_attributes),
                    self.helpers.label.close_tag(),
                )
            };

            markup = match self.label_position {
                LabelPosition::Prepend => format!("{}{}{}{}", open, label, markup, close),
                LabelPosition::Append => format!("{}{}{}{}", open, markup, label, close),
                LabelPosition::Default => format!("{}{}{}{}", open, label, close, markup),
            };
        }

        format!(
            r#"<div class="control-group {}" id="control-group-{}">{}</div>"#,
            self.status.map(|s| s.as_str()).unwrap_or_default(),
            element.identifier(),
            markup
        )
    }

    /// Set the label position, then render; the position sticks
    pub fn render_with_position(&mut self, element: &mut Element, position: LabelPosition) -> String {
        self.set_label_position(position);
        self.render(element)
    }

    /// `None` leaves the current status untouched
    pub fn set_status(&mut self, status: Option<&str>) -> Result<&mut Self> {
        if let Some(status) = status {
            self.status = Some(status.parse()?);
        }
        Ok(self)
    }

    pub fn status(&self) -> Option<RowStatus> {
        self.status
    }

    pub fn reset_status(&mut self) -> &mut Self {
        self.status = None;
        self
    }

    pub fn set_label_position(&mut self, position: LabelPosition) -> &mut Self {
        self.label_position = position;
        self
    }

    pub fn label_position(&self) -> LabelPosition {
        self.label_position
    }

    pub fn set_label_attributes(&mut self, attributes: Attributes) -> &mut Self {
        self.label_attributes = attributes;
        self
    }

    pub fn label_attributes(&self) -> &Attributes {
        &self.label_attributes
    }

    pub fn set_render_errors(&mut self, render_errors: bool) -> &mut Self {
        self.render_errors = render_errors;
        self
    }

    pub fn render_errors(&self) -> bool {
        self.render_errors
    }

    /// `None` or an empty class disables error class marking
    pub fn set_input_error_class(&mut self, class: Option<&str>) -> &mut Self {
        self.input_error_class = class
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        self
    }

    pub fn input_error_class(&self) -> Option<&str> {
        self.input_error_class.as_deref()
    }

    /// Also hands the translator to the label helper
    pub fn set_translator(
        &mut self,
        translator: Option<SharedTranslator>,
        text_domain: Option<&str>,
    ) -> &mut Self {
        if let Some(domain) = text_domain {
            self.text_domain = domain.to_string();
        }
        if let Some(translator) = &translator {
            self.helpers
                .label
                .set_translator(Some(translator.clone()), &self.text_domain);
        }
        self.translator = translator;
        self
    }

    pub fn set_text_domain(&mut self, text_domain: &str) -> &mut Self {
        self.text_domain = text_domain.to_string();
        if let Some(translator) = &self.translator {
            self.helpers
                .label
                .set_translator(Some(translator.clone()), &self.text_domain);
        }
        self
    }

    pub fn has_translator(&self) -> bool {
        self.translator.is_some()
    }

    pub fn text_domain(&self) -> &str {
        &self.text_domain
    }
}
