use super::ErrorsRenderer;
use crate::element::{Attributes, Element};
use crate::escape::{attributes_suffix, escape_html};

/// Validation messages as an unordered list
#[derive(Debug, Clone, Copy, Default)]
pub struct FormElementErrors;

impl ErrorsRenderer for FormElementErrors {
    fn render(&self, element: &Element, attributes: &Attributes) -> String {
        if element.messages.is_empty() {
            return String::new();
        }

        let items = element
            .messages
            .iter()
            .map(|message| escape_html(message))
            .collect::<Vec<_>>()
            .join("</li><li>");

        format!("<ul{}><li>{}</li></ul>", attributes_suffix(attributes), items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_messages_renders_nothing() {
        let attrs = Attributes::new().with("class", "errors");
        assert_eq!(FormElementErrors.render(&Element::new("a"), &attrs), "");
    }

    #[test]
    fn test_messages_rendered_as_list() {
        let element = Element::new("a")
            .with_message("Value is required")
            .with_message("Must be < 10");
        let attrs = Attributes::new().with("class", "errors");

        assert_eq!(
            FormElementErrors.render(&element, &attrs),
            r#"<ul class="errors"><li>Value is required</li><li>Must be &lt; 10</li></ul>"#
        );
    }
}
