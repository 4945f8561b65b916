//! Button descriptor model
//!
//! Describes the navigation controls shown beneath a wizard step. These are
//! plain values: the layout layer decides how to draw them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What pressing a button does
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "target", rename_all = "kebab-case")]
pub enum ButtonAction<S> {
    /// Jump to a specific step without submitting the current one
    #[serde(rename = "navigate-to-step")]
    NavigateTo(S),
    /// Submit the current step's data
    Submit,
}

/// Visual emphasis of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    /// The main call to action
    Primary,
    /// Secondary controls
    Plain,
}

impl fmt::Display for ButtonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

/// Semantic role of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonKind {
    /// Jump back to the first step
    GotoFirst,
    /// Jump back one step
    GotoPrevious,
    /// Submit and advance
    Next,
    /// Submit and complete the wizard
    Finish,
}

impl ButtonKind {
    /// Stable identifier used in serialized output and settings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GotoFirst => "goto-first",
            Self::GotoPrevious => "goto-previous",
            Self::Next => "next",
            Self::Finish => "finish",
        }
    }

    /// English label used when no localized text is configured
    pub fn default_label(&self) -> &'static str {
        match self {
            Self::GotoFirst => "First",
            Self::GotoPrevious => "Previous",
            Self::Next => "Next",
            Self::Finish => "Finish",
        }
    }

    /// Emphasis that goes with this kind
    pub fn style(&self) -> ButtonStyle {
        match self {
            Self::GotoFirst | Self::GotoPrevious => ButtonStyle::Plain,
            Self::Next | Self::Finish => ButtonStyle::Primary,
        }
    }
}

impl fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display text for each button kind
///
/// Localization swaps text by kind, never by matching on the English label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonLabels {
    #[serde(default = "default_first")]
    pub first: String,
    #[serde(default = "default_previous")]
    pub previous: String,
    #[serde(default = "default_next")]
    pub next: String,
    #[serde(default = "default_finish")]
    pub finish: String,
}

fn default_first() -> String {
    ButtonKind::GotoFirst.default_label().to_string()
}

fn default_previous() -> String {
    ButtonKind::GotoPrevious.default_label().to_string()
}

fn default_next() -> String {
    ButtonKind::Next.default_label().to_string()
}

fn default_finish() -> String {
    ButtonKind::Finish.default_label().to_string()
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            first: default_first(),
            previous: default_previous(),
            next: default_next(),
            finish: default_finish(),
        }
    }
}

impl ButtonLabels {
    /// Text for a given kind
    pub fn get(&self, kind: ButtonKind) -> &str {
        match kind {
            ButtonKind::GotoFirst => &self.first,
            ButtonKind::GotoPrevious => &self.previous,
            ButtonKind::Next => &self.next,
            ButtonKind::Finish => &self.finish,
        }
    }

    /// Replace the text for one kind
    pub fn set(&mut self, kind: ButtonKind, label: impl Into<String>) {
        let label = label.into();
        match kind {
            ButtonKind::GotoFirst => self.first = label,
            ButtonKind::GotoPrevious => self.previous = label,
            ButtonKind::Next => self.next = label,
            ButtonKind::Finish => self.finish = label,
        }
    }

    /// Builder-style variant of [`ButtonLabels::set`]
    pub fn with(mut self, kind: ButtonKind, label: impl Into<String>) -> Self {
        self.set(kind, label);
        self
    }
}

/// One actionable control in a wizard's button row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonDescriptor<S> {
    /// What the button does
    pub action: ButtonAction<S>,

    /// Display text
    pub label: String,

    /// Visual emphasis
    pub style: ButtonStyle,

    /// Semantic role
    pub kind: ButtonKind,
}

impl<S> ButtonDescriptor<S> {
    /// A button that jumps to `target` without submitting
    pub fn navigate(kind: ButtonKind, target: S, label: impl Into<String>) -> Self {
        Self {
            action: ButtonAction::NavigateTo(target),
            label: label.into(),
            style: kind.style(),
            kind,
        }
    }

    /// A button that submits the current step
    pub fn submit(kind: ButtonKind, label: impl Into<String>) -> Self {
        Self {
            action: ButtonAction::Submit,
            label: label.into(),
            style: kind.style(),
            kind,
        }
    }

    /// The step this button navigates to, if any
    pub fn target(&self) -> Option<&S> {
        match &self.action {
            ButtonAction::NavigateTo(target) => Some(target),
            ButtonAction::Submit => None,
        }
    }

    /// Whether this button submits the current step
    pub fn is_submit(&self) -> bool {
        matches!(self.action, ButtonAction::Submit)
    }
}

/// An ordered row of buttons, rendered left to right
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ButtonSet<S>(Vec<ButtonDescriptor<S>>);

impl<S> ButtonSet<S> {
    /// Wrap an ordered list of descriptors
    pub fn new(buttons: Vec<ButtonDescriptor<S>>) -> Self {
        Self(buttons)
    }

    /// Number of buttons
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Button at `index`, counting from the left
    pub fn get(&self, index: usize) -> Option<&ButtonDescriptor<S>> {
        self.0.get(index)
    }

    /// Iterate left to right
    pub fn iter(&self) -> std::slice::Iter<'_, ButtonDescriptor<S>> {
        self.0.iter()
    }

    /// Kinds in row order
    pub fn kinds(&self) -> Vec<ButtonKind> {
        self.0.iter().map(|b| b.kind).collect()
    }

    /// The trailing submit button
    pub fn primary(&self) -> Option<&ButtonDescriptor<S>> {
        self.0.iter().rev().find(|b| b.is_submit())
    }

    /// Find a button by kind
    pub fn find(&self, kind: ButtonKind) -> Option<&ButtonDescriptor<S>> {
        self.0.iter().find(|b| b.kind == kind)
    }
}

impl<S> IntoIterator for ButtonSet<S> {
    type Item = ButtonDescriptor<S>;
    type IntoIter = std::vec::IntoIter<ButtonDescriptor<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a ButtonSet<S> {
    type Item = &'a ButtonDescriptor<S>;
    type IntoIter = std::slice::Iter<'a, ButtonDescriptor<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_identifiers() {
        assert_eq!(ButtonKind::GotoFirst.as_str(), "goto-first");
        assert_eq!(ButtonKind::GotoPrevious.as_str(), "goto-previous");
        assert_eq!(ButtonKind::Next.to_string(), "next");
        assert_eq!(ButtonKind::Finish.to_string(), "finish");
    }

    #[test]
    fn test_kind_styles() {
        assert_eq!(ButtonKind::GotoFirst.style(), ButtonStyle::Plain);
        assert_eq!(ButtonKind::GotoPrevious.style(), ButtonStyle::Plain);
        assert_eq!(ButtonKind::Next.style(), ButtonStyle::Primary);
        assert_eq!(ButtonKind::Finish.style(), ButtonStyle::Primary);
    }

    #[test]
    fn test_descriptor_style_follows_kind() {
        for kind in [ButtonKind::GotoFirst, ButtonKind::GotoPrevious] {
            let button = ButtonDescriptor::navigate(kind, 1usize, kind.default_label());
            assert_eq!(button.style, kind.style());
        }
        for kind in [ButtonKind::Next, ButtonKind::Finish] {
            let button: ButtonDescriptor<usize> = ButtonDescriptor::submit(kind, kind.default_label());
            assert_eq!(button.style, kind.style());
        }
    }

    #[test]
    fn test_descriptor_constructors() {
        let back = ButtonDescriptor::navigate(ButtonKind::GotoPrevious, 2usize, "Previous");
        assert_eq!(back.target(), Some(&2));
        assert_eq!(back.style, ButtonStyle::Plain);
        assert!(!back.is_submit());

        let next: ButtonDescriptor<usize> = ButtonDescriptor::submit(ButtonKind::Next, "Next");
        assert_eq!(next.target(), None);
        assert_eq!(next.style, ButtonStyle::Primary);
        assert!(next.is_submit());
    }

    #[test]
    fn test_labels_by_kind() {
        let labels = ButtonLabels::default()
            .with(ButtonKind::Next, "Weiter")
            .with(ButtonKind::Finish, "Fertig");
        assert_eq!(labels.get(ButtonKind::GotoFirst), "First");
        assert_eq!(labels.get(ButtonKind::Next), "Weiter");
        assert_eq!(labels.get(ButtonKind::Finish), "Fertig");
    }

    #[test]
    fn test_labels_partial_json_uses_defaults() {
        let labels: ButtonLabels = serde_json::from_str(r#"{"next": "Suivant"}"#).unwrap();
        assert_eq!(labels.next, "Suivant");
        assert_eq!(labels.previous, "Previous");
    }

    #[test]
    fn test_descriptor_json_shape() {
        let back = ButtonDescriptor::navigate(ButtonKind::GotoFirst, 1usize, "First");
        let json = serde_json::to_value(&back).unwrap();
        assert_eq!(json["action"]["type"], "navigate-to-step");
        assert_eq!(json["action"]["target"], 1);
        assert_eq!(json["style"], "plain");
        assert_eq!(json["kind"], "goto-first");

        let finish: ButtonDescriptor<usize> = ButtonDescriptor::submit(ButtonKind::Finish, "Finish");
        let json = serde_json::to_value(&finish).unwrap();
        assert_eq!(json["action"]["type"], "submit");
        assert_eq!(json["style"], "primary");
    }

    #[test]
    fn test_set_accessors() {
        let set = ButtonSet::new(vec![
            ButtonDescriptor::navigate(ButtonKind::GotoPrevious, 1usize, "Previous"),
            ButtonDescriptor::submit(ButtonKind::Next, "Next"),
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.kinds(), vec![ButtonKind::GotoPrevious, ButtonKind::Next]);
        assert_eq!(set.primary().map(|b| b.kind), Some(ButtonKind::Next));
        assert!(set.find(ButtonKind::GotoFirst).is_none());
        assert_eq!(set.get(0).and_then(|b| b.target()), Some(&1));
    }
}
