//! Step selection arguments shared by CLI commands

use clap::{ArgGroup, Args};

use crate::error::{WizardError, WizardResult};
use crate::models::StepPosition;

/// Which step of which wizard to work with
#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("shape").required(true).args(["count", "keys"])))]
pub struct StepArgs {
    /// Step to show: a 1-based number with --count, or one of --keys
    pub step: String,

    /// Number of steps in an ordinal wizard
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Ordered step keys, comma separated (e.g. account,profile,confirm)
    #[arg(short, long, value_delimiter = ',')]
    pub keys: Option<Vec<String>>,
}

/// A step position built from CLI input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedPosition {
    /// Steps numbered `1..=count`
    Ordinal(StepPosition<usize>),
    /// Steps identified by key
    Keyed(StepPosition<String>),
}

impl StepArgs {
    /// Build the step position these arguments describe
    pub fn resolve(&self) -> WizardResult<ResolvedPosition> {
        match (&self.keys, self.count) {
            (Some(keys), _) => {
                let keys: Vec<String> = keys
                    .iter()
                    .map(|k| k.trim().to_string())
                    .filter(|k| !k.is_empty())
                    .collect();
                let position = StepPosition::from_key(&keys, &self.step.trim().to_string())?;
                Ok(ResolvedPosition::Keyed(position))
            }
            (None, Some(count)) => {
                let number: usize = self.step.trim().parse().map_err(|_| {
                    WizardError::Validation(format!(
                        "Invalid step number: '{}'. Expected a number from 1 to {}",
                        self.step, count
                    ))
                })?;
                Ok(ResolvedPosition::Ordinal(StepPosition::ordinal(number, count)?))
            }
            (None, None) => Err(WizardError::Validation(
                "Either --count or --keys is required".into(),
            )),
        }
    }
}
