//! Schema to markup rendering.
//!
//! `render_row` turns one descriptor into a header cell and a control cell;
//! `render_table` applies it to a whole schema in order. Both are pure and
//! total over the field kinds.

use std::fmt;

use crate::domain::{choice_control_id, FieldDescriptor, FieldKind, FieldSchema};

pub mod markup;

pub use markup::{Element, Node};

/// One rendered form row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMarkup {
    name: String,
    header: Element,
    cell: Element,
}

impl RowMarkup {
    /// Name of the field this row was rendered from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `<th>` caption cell
    pub fn header(&self) -> &Element {
        &self.header
    }

    /// The `<td>` cell holding the control(s)
    pub fn cell(&self) -> &Element {
        &self.cell
    }

    /// Controls in the cell: inputs, selects and textareas in document order
    pub fn controls(&self) -> Vec<&Element> {
        self.cell
            .child_elements()
            .filter(|e| matches!(e.tag(), "input" | "select" | "textarea"))
            .collect()
    }

    /// Captions attached to individual controls inside the cell
    pub fn captions(&self) -> Vec<&Element> {
        self.cell.descendants("label")
    }

    pub fn to_element(&self) -> Element {
        Element::new("tr")
            .child(self.header.clone())
            .child(self.cell.clone())
    }
}

impl fmt::Display for RowMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_element())
    }
}

/// A rendered form table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableMarkup {
    rows: Vec<RowMarkup>,
}

impl TableMarkup {
    pub fn rows(&self) -> &[RowMarkup] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_element(&self) -> Element {
        Element::new("table").children_from(self.rows.iter().map(RowMarkup::to_element))
    }
}

impl fmt::Display for TableMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_element())
    }
}

pub fn render_row(field: &FieldDescriptor) -> RowMarkup {
    let name = field.name.as_str();

    let (header, cell) = match &field.kind {
        FieldKind::Text {
            input_type,
            placeholder,
        } => (
            labelled_header(field),
            Element::new("td").child(
                Element::new("input")
                    .attr("type", input_type.as_str())
                    .attr("id", name)
                    .attr("name", name)
                    .attr("placeholder", placeholder.as_str()),
            ),
        ),
        FieldKind::Choice {
            input_type,
            choices,
        } => {
            let mut cell = Element::new("td");
            for choice in choices {
                let id = choice_control_id(name, choice.value);
                cell = cell
                    .child(
                        Element::new("input")
                            .attr("type", input_type.as_str())
                            .attr("id", id.as_str())
                            .attr("name", name)
                            .attr("value", choice.value.to_string()),
                    )
                    .child(Element::new("label").attr("for", id).text(choice.label.as_str()));
            }
            // A group has no single control to point the caption at
            (Element::new("th").text(field.label.as_str()), cell)
        }
        FieldKind::Select { options } => {
            let select = Element::new("select")
                .attr("id", name)
                .attr("name", name)
                .children_from(options.iter().map(|option| {
                    Element::new("option")
                        .attr("value", option.value.to_string())
                        .text(option.text.as_str())
                }));
            (labelled_header(field), Element::new("td").child(select))
        }
        FieldKind::TextArea { placeholder } => (
            labelled_header(field),
            Element::new("td").child(
                Element::new("textarea")
                    .attr("id", name)
                    .attr("name", name)
                    .attr("placeholder", placeholder.as_str()),
            ),
        ),
    };

    RowMarkup {
        name: field.name.clone(),
        header,
        cell,
    }
}

pub fn render_table(schema: &FieldSchema) -> TableMarkup {
    TableMarkup {
        rows: schema.iter().map(render_row).collect(),
    }
}

fn labelled_header(field: &FieldDescriptor) -> Element {
    Element::new("th").child(
        Element::new("label")
            .attr("for", field.name.as_str())
            .text(field.label.as_str()),
    )
}
