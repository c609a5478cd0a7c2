//! Default element helper: input, textarea and select markup

use super::ElementRenderer;
use crate::element::{Attributes, Element};
use crate::escape::{attributes_suffix, escape_html};

#[derive(Debug, Clone, Copy, Default)]
pub struct FormElement;

impl FormElement {
    /// Element attributes plus `name`, without `type` (textarea/select)
    fn container_attributes(element: &Element) -> Attributes {
        let mut attributes = element.attributes.clone();
        attributes.remove("type");
        attributes.set("name", element.name.as_str());
        attributes
    }

    fn render_input(element: &Element) -> String {
        let mut attributes = element.attributes.clone();
        attributes.set("name", element.name.as_str());
        attributes.set("type", element.input_type());
        if let Some(value) = &element.value {
            attributes.set("value", value.as_str());
        }
        format!("<input{}>", attributes_suffix(&attributes))
    }

    fn render_textarea(element: &Element) -> String {
        let attributes = Self::container_attributes(element);
        format!(
            "<textarea{}>{}</textarea>",
            attributes_suffix(&attributes),
            escape_html(element.value.as_deref().unwrap_or_default())
        )
    }

    fn render_select(element: &Element) -> String {
        let attributes = Self::container_attributes(element);
        let options: String = element
            .value_options
            .iter()
            .map(|option| {
                let selected = if element.value.as_deref() == Some(option.value.as_str()) {
                    r#" selected="selected""#
                } else {
                    ""
                };
                format!(
                    r#"<option value="{}"{}>{}</option>"#,
                    escape_html(&option.value),
                    selected,
                    escape_html(&option.label)
                )
            })
            .collect();

        format!("<select{}>{}</select>", attributes_suffix(&attributes), options)
    }
}

impl ElementRenderer for FormElement {
    fn render(&self, element: &Element) -> String {
        match element.input_type() {
            "textarea" => Self::render_textarea(element),
            "select" => Self::render_select(element),
            _ => Self::render_input(element),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_input() {
        let element = Element::new("email")
            .with_attribute("type", "email")
            .with_attribute("class", "span4")
            .with_value("a@b.cz");

        assert_eq!(
            FormElement.render(&element),
            r#"<input class="span4" name="email" type="email" value="a@b.cz">"#
        );
    }

    #[test]
    fn test_render_textarea_escapes_value() {
        let element = Element::new("bio")
            .with_attribute("type", "textarea")
            .with_value("<b>hi</b>");

        assert_eq!(
            FormElement.render(&element),
            r#"<textarea name="bio">&lt;b&gt;hi&lt;/b&gt;</textarea>"#
        );
    }

    #[test]
    fn test_render_select_marks_selected() {
        let element = Element::new("size")
            .with_attribute("type", "select")
            .with_value("m")
            .with_value_option("s", "Small")
            .with_value_option("m", "Medium");

        assert_eq!(
            FormElement.render(&element),
            r#"<select name="size"><option value="s">Small</option><option value="m" selected="selected">Medium</option></select>"#
        );
    }
}
