//! Button row display formatting
//!
//! Formats a step's button row for terminal output as a compact row, an
//! aligned table, or a JSON/YAML document for other tools to consume.

use serde::Serialize;
use std::fmt::Display;

use crate::config::settings::{OutputFormat, Settings};
use crate::error::WizardResult;
use crate::models::{ButtonAction, ButtonDescriptor, ButtonSet, ButtonStyle, StepPosition};
use crate::services::format_step_label;

/// A button together with the presentation names it maps to
#[derive(Debug, Clone, Serialize)]
pub struct RenderedButton<'a, S> {
    #[serde(flatten)]
    pub button: &'a ButtonDescriptor<S>,
    /// Class string for the button's style
    pub class: &'a str,
    /// Form field the button posts under
    pub field: &'a str,
}

/// Everything a layout needs to draw one wizard step's footer
#[derive(Debug, Clone, Serialize)]
pub struct RenderedStep<'a, S> {
    /// "Step X of Y"
    pub progress: String,
    pub buttons: Vec<RenderedButton<'a, S>>,
}

impl<'a, S> RenderedStep<'a, S> {
    /// Pair each button with its configured class and field name
    pub fn new(position: &StepPosition<S>, set: &'a ButtonSet<S>, settings: &'a Settings) -> Self {
        let buttons = set
            .iter()
            .map(|button| RenderedButton {
                button,
                class: settings.style_classes.class_for(button.style),
                field: settings.field_names.field_for(button),
            })
            .collect();

        Self {
            progress: format_step_label(position),
            buttons,
        }
    }
}

/// Format a button row on one line, e.g. `[First] [Previous] [Next*]`
///
/// Primary buttons are marked with a trailing `*`.
pub fn format_button_row<S>(set: &ButtonSet<S>) -> String {
    set.iter()
        .map(|b| match b.style {
            ButtonStyle::Primary => format!("[{}*]", b.label),
            ButtonStyle::Plain => format!("[{}]", b.label),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a button row as an aligned table
pub fn format_button_table<S: Display>(set: &ButtonSet<S>, settings: &Settings) -> String {
    if set.is_empty() {
        return "No buttons.".to_string();
    }

    let rows: Vec<[String; 5]> = set
        .iter()
        .map(|b| {
            let (action, target) = match &b.action {
                ButtonAction::NavigateTo(target) => ("navigate", target.to_string()),
                ButtonAction::Submit => ("submit", "-".to_string()),
            };
            [
                b.kind.to_string(),
                action.to_string(),
                target,
                b.label.clone(),
                settings.style_classes.class_for(b.style).to_string(),
            ]
        })
        .collect();

    let headers = ["Kind", "Action", "Target", "Label", "Class"];
    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    output.push_str(&format_table_line(&headers.map(String::from), &widths));
    output.push_str(&format_table_line(
        &widths.map(|w| "-".repeat(w)),
        &widths,
    ));
    for row in &rows {
        output.push_str(&format_table_line(row, &widths));
    }

    output
}

fn format_table_line(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n", line.trim_end())
}

/// Render a step's label and buttons in the requested format
pub fn render_step<S>(
    position: &StepPosition<S>,
    set: &ButtonSet<S>,
    settings: &Settings,
    format: OutputFormat,
) -> WizardResult<String>
where
    S: Display + Serialize,
{
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str(&format_step_label(position));
            output.push_str("\n\n");
            output.push_str(&format_button_table(set, settings));
            output.push('\n');
            output.push_str(&format_button_row(set));
            output.push('\n');
            Ok(output)
        }
        OutputFormat::Json => {
            let rendered = RenderedStep::new(position, set, settings);
            let mut json = serde_json::to_string_pretty(&rendered)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => {
            let rendered = RenderedStep::new(position, set, settings);
            Ok(serde_yaml::to_string(&rendered)?)
        }
    }
}
