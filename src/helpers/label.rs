use super::LabelRenderer;
use crate::element::{Attributes, Element};
use crate::escape::{attributes_suffix, escape_html};
use crate::i18n::{SharedTranslator, DEFAULT_TEXT_DOMAIN};

/// Default label helper; translates the label text when given a translator
pub struct FormLabel {
    translator: Option<SharedTranslator>,
    text_domain: String,
}

impl Default for FormLabel {
    fn default() -> Self {
        Self {
            translator: None,
            text_domain: DEFAULT_TEXT_DOMAIN.to_string(),
        }
    }
}

impl LabelRenderer for FormLabel {
    fn render(&self, element: &Element) -> String {
        let Some(label) = element.label() else {
            return String::new();
        };

        let label = match &self.translator {
            Some(translator) => translator.translate(label, &self.text_domain),
            None => label.to_string(),
        };

        let mut attributes = element.label_attributes.clone();
        if !attributes.has("for") {
            attributes.set("for", element.identifier());
        }

        format!(
            "{}{}{}",
            self.open_tag(&attributes),
            escape_html(&label),
            self.close_tag()
        )
    }

    fn open_tag(&self, attributes: &Attributes) -> String {
        format!("<label{}>", attributes_suffix(attributes))
    }

    fn close_tag(&self) -> String {
        "</label>".to_string()
    }

    fn set_translator(&mut self, translator: Option<SharedTranslator>, text_domain: &str) {
        self.translator = translator;
        self.text_domain = text_domain.to_string();
    }
}
