//! Display Helpers
//!
//! Terminal output formatting and styling.

use console::style;
use socialmedia_core::{EditForm, FormElement, PlatformRegistry, Translator};

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Prints an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Prints an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Lists a registry's platforms in registry order.
pub fn display_platforms(registry: &PlatformRegistry, translator: &dyn Translator) {
    println!("Platforms ({}):", registry.kind());
    println!();
    for platform in registry.platforms() {
        println!(
            "  {:<12} {}",
            style(platform.id()).cyan(),
            translator.translate(platform.display_name(), &[])
        );
    }
}

/// Prints the configuration table in display order.
pub fn display_form(form: &EditForm) {
    let header = &form.header;
    println!(
        "  {:<12} {:>6}  {}",
        style(header.first().map(String::as_str).unwrap_or_default()).bold(),
        style(header.get(1).map(String::as_str).unwrap_or_default()).bold(),
        style(header.get(2).map(String::as_str).unwrap_or_default()).bold(),
    );

    for row in &form.rows {
        let value = match &row.element {
            FormElement::TextField { value, .. } if value.is_empty() => {
                style("-".to_string()).dim()
            }
            FormElement::TextField { value, .. } => style(value.clone()),
            FormElement::Checkbox { value: true } => style("✓".to_string()).green(),
            FormElement::Checkbox { value: false } => style("✗".to_string()).dim(),
        };
        println!("  {:<12} {:>6}  {}", row.label, row.weight, value);
    }
}
