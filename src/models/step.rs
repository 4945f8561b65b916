//! Step position model
//!
//! A read-only snapshot of where a wizard currently is among its ordered
//! steps. The wizard controller owns the real state; this is what it hands
//! over when a button row needs rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{WizardError, WizardResult};

/// The wizard's current location among its steps
///
/// `S` is the step identifier: a 1-based ordinal (`usize`) or an opaque key
/// such as a `String`. `previous` is present exactly when `current` is not
/// the first step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepPosition<S> {
    /// The step being shown
    pub current: S,

    /// The step before `current`, absent on the first step
    pub previous: Option<S>,

    /// The first step of the wizard
    pub first: S,

    /// The last step of the wizard
    pub last: S,

    /// Total number of steps
    pub count: usize,

    /// 1-based human ordinal of `current`
    pub number: usize,
}

impl StepPosition<usize> {
    /// Build a position for a wizard whose steps are numbered `1..=count`
    pub fn ordinal(number: usize, count: usize) -> WizardResult<Self> {
        if count == 0 {
            return Err(WizardError::Validation(
                "A wizard needs at least one step".into(),
            ));
        }
        if number == 0 || number > count {
            return Err(WizardError::Validation(format!(
                "Step {} is out of range (1-{})",
                number, count
            )));
        }

        Ok(Self {
            current: number,
            previous: if number > 1 { Some(number - 1) } else { None },
            first: 1,
            last: count,
            count,
            number,
        })
    }
}

impl<S: Clone + PartialEq> StepPosition<S> {
    /// Build a position from an ordered list of step keys and a 0-based index
    ///
    /// Step keys must be unique; a repeated key would make an early step
    /// look like the last one.
    pub fn from_steps(steps: &[S], index: usize) -> WizardResult<Self> {
        let (first, last) = match (steps.first(), steps.last()) {
            (Some(first), Some(last)) => (first.clone(), last.clone()),
            _ => {
                return Err(WizardError::Validation(
                    "A wizard needs at least one step".into(),
                ))
            }
        };

        if let Some(duplicate) = (1..steps.len()).find(|&i| steps[..i].contains(&steps[i])) {
            return Err(WizardError::Validation(format!(
                "Duplicate step key at position {}",
                duplicate + 1
            )));
        }

        let current = steps.get(index).cloned().ok_or_else(|| {
            WizardError::Validation(format!(
                "Step index {} is out of range (0-{})",
                index,
                steps.len() - 1
            ))
        })?;

        let previous = index.checked_sub(1).and_then(|i| steps.get(i)).cloned();

        Ok(Self {
            current,
            previous,
            first,
            last,
            count: steps.len(),
            number: index + 1,
        })
    }
}

impl<S: Clone + PartialEq + fmt::Display> StepPosition<S> {
    /// Build a position by looking up `key` in an ordered list of step keys
    pub fn from_key(steps: &[S], key: &S) -> WizardResult<Self> {
        let index = steps
            .iter()
            .position(|s| s == key)
            .ok_or_else(|| WizardError::step_not_found(key.to_string()))?;
        Self::from_steps(steps, index)
    }
}

impl<S: PartialEq> StepPosition<S> {
    /// Whether the wizard is on its first step
    pub fn is_first(&self) -> bool {
        self.previous.is_none()
    }

    /// Whether the wizard is on its last step
    pub fn is_last(&self) -> bool {
        self.current == self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_first_step() {
        let pos = StepPosition::ordinal(1, 3).unwrap();
        assert_eq!(pos.current, 1);
        assert_eq!(pos.previous, None);
        assert_eq!(pos.first, 1);
        assert_eq!(pos.last, 3);
        assert_eq!(pos.count, 3);
        assert!(pos.is_first());
        assert!(!pos.is_last());
    }

    #[test]
    fn test_ordinal_last_step() {
        let pos = StepPosition::ordinal(4, 4).unwrap();
        assert_eq!(pos.previous, Some(3));
        assert!(pos.is_last());
        assert!(!pos.is_first());
    }

    #[test]
    fn test_ordinal_rejects_out_of_range() {
        assert!(StepPosition::ordinal(0, 3).unwrap_err().is_validation());
        assert!(StepPosition::ordinal(4, 3).unwrap_err().is_validation());
        assert!(StepPosition::ordinal(1, 0).unwrap_err().is_validation());
    }

    #[test]
    fn test_from_steps() {
        let steps = vec!["account", "profile", "confirm"];
        let pos = StepPosition::from_steps(&steps, 1).unwrap();
        assert_eq!(pos.current, "profile");
        assert_eq!(pos.previous, Some("account"));
        assert_eq!(pos.first, "account");
        assert_eq!(pos.last, "confirm");
        assert_eq!(pos.count, 3);
        assert_eq!(pos.number, 2);
    }

    #[test]
    fn test_from_steps_errors() {
        let empty: Vec<String> = Vec::new();
        assert!(StepPosition::from_steps(&empty, 0).is_err());

        let steps = vec!["a", "b"];
        assert!(StepPosition::from_steps(&steps, 2)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_from_steps_rejects_duplicate_keys() {
        let steps = vec!["a", "b", "a"];
        let err = StepPosition::from_steps(&steps, 0).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: Duplicate step key at position 3"
        );
        assert!(StepPosition::from_key(&steps, &"b").is_err());
    }

    #[test]
    fn test_from_key() {
        let steps: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let pos = StepPosition::from_key(&steps, &"c".to_string()).unwrap();
        assert_eq!(pos.number, 3);
        assert!(pos.is_last());

        let err = StepPosition::from_key(&steps, &"z".to_string()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_single_step_wizard() {
        let pos = StepPosition::ordinal(1, 1).unwrap();
        assert!(pos.is_first());
        assert!(pos.is_last());
    }
}
