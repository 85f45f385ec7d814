use serde::{Deserialize, Serialize};
use std::fmt;

pub mod presets;

/// A single form row: shared identity plus the kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Unique identifier, used as the control name and for label association
    pub name: String,
    /// Human-readable caption shown in the header cell
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// The field-kind variants a row can take
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line input
    Text {
        input_type: TextInputType,
        #[serde(default)]
        placeholder: String,
    },
    /// Radio or checkbox group, one control per choice
    Choice {
        input_type: ChoiceInputType,
        choices: Vec<Choice>,
    },
    /// Dropdown
    Select { options: Vec<SelectOption> },
    /// Multi-line input
    #[serde(rename = "textarea")]
    TextArea {
        #[serde(default)]
        placeholder: String,
    },
}

impl FieldKind {
    /// Short discriminant name, matching the serialized `kind` tag
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text { .. } => "text",
            FieldKind::Choice { .. } => "choice",
            FieldKind::Select { .. } => "select",
            FieldKind::TextArea { .. } => "textarea",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextInputType {
    Text,
    Email,
    Tel,
}

impl TextInputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextInputType::Text => "text",
            TextInputType::Email => "email",
            TextInputType::Tel => "tel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceInputType {
    Radio,
    Checkbox,
}

impl ChoiceInputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChoiceInputType::Radio => "radio",
            ChoiceInputType::Checkbox => "checkbox",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub text: String,
    pub value: i64,
}

impl FieldDescriptor {
    pub fn text(
        name: impl Into<String>,
        label: impl Into<String>,
        input_type: TextInputType,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::Text {
                input_type,
                placeholder: placeholder.into(),
            },
        }
    }

    pub fn choice(
        name: impl Into<String>,
        label: impl Into<String>,
        input_type: ChoiceInputType,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::Choice { input_type, choices },
        }
    }

    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::Select { options },
        }
    }

    pub fn textarea(
        name: impl Into<String>,
        label: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::TextArea {
                placeholder: placeholder.into(),
            },
        }
    }

    /// Every element id the renderer emits for this field, in order
    pub fn control_ids(&self) -> Vec<String> {
        match &self.kind {
            FieldKind::Choice { choices, .. } => choices
                .iter()
                .map(|c| choice_control_id(&self.name, c.value))
                .collect(),
            FieldKind::Text { .. } | FieldKind::Select { .. } | FieldKind::TextArea { .. } => {
                vec![self.name.clone()]
            }
        }
    }
}

impl Choice {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl SelectOption {
    pub fn new(text: impl Into<String>, value: i64) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

/// Identifier of one control inside a choice group.
///
/// Not injective on its own (`x` + `-1` and `x-` + `1` both give `x--1`);
/// document-wide uniqueness is checked at load time.
pub fn choice_control_id(name: &str, value: i64) -> String {
    format!("{}-{}", name, value)
}

/// Ordered, read-only collection of field descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSchema {
    fields: Vec<FieldDescriptor>,
}

impl FieldSchema {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a descriptor by its `name`
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl From<Vec<FieldDescriptor>> for FieldSchema {
    fn from(fields: Vec<FieldDescriptor>) -> Self {
        Self::new(fields)
    }
}

impl<'a> IntoIterator for &'a FieldSchema {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind.as_str())
    }
}
