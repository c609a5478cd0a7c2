use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use formrow::{Element, FormRow, Helpers, LabelPosition, RowConfig};

#[derive(Parser, Debug)]
#[command(name = "formrow")]
#[command(author = "Sean Fournier")]
#[command(version = "0.1.0")]
#[command(about = "Render Bootstrap control-group form rows from JSON element descriptions")]
struct Args {
    /// Element JSON file (one element or an array), `-` for stdin
    input: Option<PathBuf>,

    /// Config file (defaults to ~/.config/formrow/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Label position: prepend, append or default
    #[arg(short, long)]
    label_position: Option<LabelPosition>,

    /// Row status applied to every element: error, info, success or warning
    #[arg(short, long)]
    status: Option<String>,

    /// JSON translation catalog
    #[arg(short, long)]
    translations: Option<PathBuf>,

    /// Text domain used for label translation
    #[arg(long)]
    text_domain: Option<String>,

    /// Don't surface errors through the help block
    #[arg(long)]
    no_render_errors: bool,

    /// Write the effective config (file + flags) back to the config file
    #[arg(long)]
    save_config: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Input {
    Many(Vec<Element>),
    One(Element),
}

fn main() -> Result<()> {
    // Logs go to stderr, markup to stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RowConfig::load_from(path)?,
        None => RowConfig::load(),
    };
    apply_args(&mut config, &args);

    if args.save_config {
        let path = match &args.config {
            Some(path) => path.clone(),
            None => RowConfig::config_path().context("Could not find config directory")?,
        };
        config.save_to(&path)?;
        tracing::info!("Saved config to {}", path.display());
    }

    let Some(input) = &args.input else {
        if args.save_config {
            return Ok(());
        }
        anyhow::bail!("No element file given (use `-` for stdin)");
    };

    let mut row = FormRow::from_config(&config, Helpers::default())?;

    let elements = parse_elements(&read_input(input)?)?;
    tracing::info!("Rendering {} element(s)", elements.len());

    for html in render_elements(&mut row, elements, args.status.as_deref())? {
        println!("{}", html);
    }

    Ok(())
}

/// Command-line flags override the config file
fn apply_args(config: &mut RowConfig, args: &Args) {
    if let Some(position) = args.label_position {
        config.label_position = position;
    }
    if args.no_render_errors {
        config.render_errors = false;
    }
    if let Some(path) = &args.translations {
        config.translations = Some(path.clone());
    }
    if let Some(domain) = &args.text_domain {
        config.text_domain = domain.clone();
        if config.translations.is_none() {
            tracing::warn!("Text domain given but no translations are configured");
        }
    }
}

/// Each element starts from a clean status, then gets the requested one
fn render_elements(
    row: &mut FormRow,
    elements: Vec<Element>,
    status: Option<&str>,
) -> Result<Vec<String>> {
    let mut rendered = Vec::with_capacity(elements.len());
    for mut element in elements {
        row.reset_status();
        row.set_status(status)?;
        rendered.push(row.render(&mut element));
    }
    Ok(rendered)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read elements from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

/// Accepts a single element object or an array of them
fn parse_elements(content: &str) -> Result<Vec<Element>> {
    let input: Input = serde_json::from_str(content).context("Invalid element JSON")?;
    Ok(match input {
        Input::Many(elements) => elements,
        Input::One(element) => vec![element],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_element() {
        let elements = parse_elements(r#"{"name": "email", "label": "Email"}"#).unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].name, "email");
        assert_eq!(elements[0].label(), Some("Email"));
    }

    #[test]
    fn test_parse_element_array() {
        let elements = parse_elements(r#"[{"name": "email"}, {"name": "password"}]"#).unwrap();
        let names: Vec<_> = elements.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["email", "password"]);
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse_elements(r#"{"label": "no name"}"#).is_err());
        assert!(parse_elements("not json").is_err());
    }

    #[test]
    fn test_render_elements_resets_status_per_element() {
        let mut row = FormRow::default();
        let elements = vec![
            Element::new("email").with_message("Value is required"),
            Element::new("name"),
        ];

        let rendered = render_elements(&mut row, elements, None).unwrap();
        assert!(rendered[0].starts_with(r#"<div class="control-group error" id="control-group-email">"#));
        // The error status of the first row doesn't leak into the second
        assert!(rendered[1].starts_with(r#"<div class="control-group " id="control-group-name">"#));
    }

    #[test]
    fn test_render_elements_applies_status() {
        let mut row = FormRow::default();
        let rendered =
            render_elements(&mut row, vec![Element::new("a"), Element::new("b")], Some("Info")).unwrap();

        assert!(rendered.iter().all(|html| html.starts_with(r#"<div class="control-group info""#)));
    }

    #[test]
    fn test_render_elements_invalid_status() {
        let mut row = FormRow::default();
        assert!(render_elements(&mut row, vec![Element::new("a")], Some("bogus")).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from([
            "formrow",
            "elements.json",
            "--label-position",
            "append",
            "--no-render-errors",
            "--text-domain",
            "admin",
            "--translations",
            "cs.json",
        ])
        .unwrap();

        let mut config = RowConfig::default();
        apply_args(&mut config, &args);

        assert_eq!(config.label_position, LabelPosition::Append);
        assert!(!config.render_errors);
        assert_eq!(config.text_domain, "admin");
        assert_eq!(config.translations, Some(PathBuf::from("cs.json")));
        assert_eq!(args.input, Some(PathBuf::from("elements.json")));
    }

    #[test]
    fn test_saved_config_keeps_flags() {
        let dir = std::env::temp_dir().join(format!("formrow-cli-{}", std::process::id()));
        let path = dir.join("config.toml");
        let args = Args::try_parse_from(["formrow", "--save-config", "-l", "prepend"]).unwrap();

        let mut config = RowConfig::default();
        apply_args(&mut config, &args);
        config.save_to(&path).unwrap();

        let loaded = RowConfig::load_from(&path).unwrap();
        assert_eq!(loaded.label_position, LabelPosition::Prepend);
        assert!(args.input.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
