//! Button and label CLI commands

use serde::Serialize;
use std::fmt::Display;

use crate::config::settings::{OutputFormat, Settings};
use crate::display::render_step;
use crate::error::WizardResult;
use crate::models::StepPosition;
use crate::services::{format_step_label, ButtonSelector};

use super::step::{ResolvedPosition, StepArgs};

/// Print the button row for a step
pub fn handle_buttons_command(
    settings: &Settings,
    args: &StepArgs,
    format: Option<OutputFormat>,
) -> WizardResult<()> {
    let format = format.unwrap_or(settings.output_format);
    let output = match args.resolve()? {
        ResolvedPosition::Ordinal(position) => buttons_output(settings, &position, format)?,
        ResolvedPosition::Keyed(position) => buttons_output(settings, &position, format)?,
    };
    print!("{}", output);
    Ok(())
}

/// Print the progress label for a step
pub fn handle_label_command(args: &StepArgs) -> WizardResult<()> {
    let label = match args.resolve()? {
        ResolvedPosition::Ordinal(position) => format_step_label(&position),
        ResolvedPosition::Keyed(position) => format_step_label(&position),
    };
    println!("{}", label);
    Ok(())
}

fn buttons_output<S>(
    settings: &Settings,
    position: &StepPosition<S>,
    format: OutputFormat,
) -> WizardResult<String>
where
    S: Clone + PartialEq + Display + Serialize,
{
    let set = ButtonSelector::with_labels(&settings.labels).select(position);
    render_step(position, &set, settings, format)
}
