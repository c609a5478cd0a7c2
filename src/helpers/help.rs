//! Help text helpers
//!
//! Help text is emitted as-is, since the row injects rendered error markup
//! into the `help-block` option.

use super::HelpRenderer;
use crate::element::{Element, OPTION_HELP_BLOCK, OPTION_HELP_INLINE};

#[derive(Debug, Clone, Copy, Default)]
pub struct FormElementHelpBlock;

impl HelpRenderer for FormElementHelpBlock {
    fn render(&self, element: &Element) -> String {
        match element.option(OPTION_HELP_BLOCK) {
            Some(help) if !help.is_empty() => format!(r#"<p class="help-block">{}</p>"#, help),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormElementHelpInline;

impl HelpRenderer for FormElementHelpInline {
    fn render(&self, element: &Element) -> String {
        match element.option(OPTION_HELP_INLINE) {
            Some(help) if !help.is_empty() => format!(r#"<span class="help-inline">{}</span>"#, help),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_block() {
        let element = Element::new("a").with_option(OPTION_HELP_BLOCK, "Max 10 chars");
        assert_eq!(
            FormElementHelpBlock.render(&element),
            r#"<p class="help-block">Max 10 chars</p>"#
        );
        assert_eq!(FormElementHelpBlock.render(&Element::new("a")), "");
    }

    #[test]
    fn test_help_inline() {
        let element = Element::new("a").with_option(OPTION_HELP_INLINE, "optional");
        assert_eq!(
            FormElementHelpInline.render(&element),
            r#"<span class="help-inline">optional</span>"#
        );
        assert_eq!(
            FormElementHelpInline.render(&Element::new("a").with_option(OPTION_HELP_INLINE, "")),
            ""
        );
    }
}
