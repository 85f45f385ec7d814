use formtable::domain::presets::contact_form;
use formtable::domain::{
    Choice, ChoiceInputType, FieldDescriptor, FieldSchema, SelectOption, TextInputType,
};
use formtable::render::{render_row, render_table};
use std::collections::HashSet;

fn mixed_schema() -> FieldSchema {
    FieldSchema::new(vec![
        FieldDescriptor::text("name", "Name", TextInputType::Text, "Jane Doe"),
        FieldDescriptor::choice(
            "time",
            "Time",
            ChoiceInputType::Checkbox,
            vec![Choice::new("AM", 10), Choice::new("PM", 20)],
        ),
        FieldDescriptor::select(
            "kind",
            "Kind",
            vec![SelectOption::new("A", 7), SelectOption::new("B", -3)],
        ),
        FieldDescriptor::textarea("detail", "Detail", ""),
        FieldDescriptor::text("tel", "Tel", TextInputType::Tel, ""),
    ])
}

#[test]
fn test_table_has_one_row_per_field_in_order() {
    for schema in [mixed_schema(), contact_form(), FieldSchema::default()] {
        let table = render_table(&schema);
        assert_eq!(table.len(), schema.len());

        let row_names: Vec<_> = table.rows().iter().map(|r| r.name()).collect();
        let field_names: Vec<_> = schema.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(row_names, field_names);

        let element = table.to_element();
        assert_eq!(element.tag(), "table");
        assert_eq!(element.descendants("tr").len(), schema.len());
    }
}

#[test]
fn test_choice_captions_are_bound_to_distinct_controls() {
    let table = render_table(&contact_form());

    for (field, row) in contact_form().iter().zip(table.rows()) {
        let formtable::domain::FieldKind::Choice { choices, .. } = &field.kind else {
            continue;
        };

        let controls = row.controls();
        let captions = row.captions();
        assert_eq!(controls.len(), choices.len());
        assert_eq!(captions.len(), choices.len());

        let ids: HashSet<_> = controls.iter().filter_map(|c| c.get_attr("id")).collect();
        assert_eq!(ids.len(), choices.len());

        for ((control, caption), choice) in controls.iter().zip(&captions).zip(choices) {
            assert_eq!(control.get_attr("name"), Some(field.name.as_str()));
            assert_eq!(caption.get_attr("for"), control.get_attr("id"));
            assert_eq!(caption.text_content(), choice.label);
        }
    }
}

#[test]
fn test_control_ids_are_unique_across_document() {
    let table = render_table(&contact_form()).to_element();

    let mut ids = HashSet::new();
    for tag in ["input", "select", "textarea"] {
        for control in table.descendants(tag) {
            let id = control.get_attr("id").expect("every control carries an id");
            assert!(ids.insert(id.to_string()), "duplicate id {}", id);
        }
    }
    assert_eq!(ids.len(), 4 + 3 + 3 + 1 + 1);
}

#[test]
fn test_select_options_match_entries() {
    let schema = mixed_schema();
    let row = render_row(&schema.fields()[2]);

    let options = row.cell().descendants("option");
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].get_attr("value"), Some("7"));
    assert_eq!(options[0].text_content(), "A");
    assert_eq!(options[1].get_attr("value"), Some("-3"));
    assert_eq!(options[1].text_content(), "B");
}

#[test]
fn test_values_appear_verbatim() {
    let html = render_table(&mixed_schema()).to_string();
    assert!(html.contains(r#"value="10""#));
    assert!(html.contains(r#"value="20""#));
    assert!(html.contains(r#"<option value="7">A</option>"#));
    assert!(html.contains(r#"<option value="-3">B</option>"#));
}

#[test]
fn test_rendering_is_idempotent() {
    let schema = contact_form();
    let first = render_table(&schema);
    let second = render_table(&schema);
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_email_example() {
    let schema = FieldSchema::new(vec![FieldDescriptor::text(
        "email",
        "Email",
        TextInputType::Email,
        "you@example.com",
    )]);
    let table = render_table(&schema);

    assert_eq!(table.len(), 1);
    let controls = table.rows()[0].controls();
    assert_eq!(controls.len(), 1);
    assert_eq!(controls[0].tag(), "input");
    assert_eq!(controls[0].get_attr("type"), Some("email"));
    assert_eq!(controls[0].get_attr("placeholder"), Some("you@example.com"));
    assert_eq!(controls[0].get_attr("value"), None);
}

#[test]
fn test_radio_example() {
    let schema = FieldSchema::new(vec![FieldDescriptor::choice(
        "contact",
        "Contact",
        ChoiceInputType::Radio,
        vec![Choice::new("Mail", 0), Choice::new("Phone", 1)],
    )]);
    let table = render_table(&schema);

    assert_eq!(
        table.to_string(),
        concat!(
            "<table><tr><th>Contact</th><td>",
            r#"<input type="radio" id="contact-0" name="contact" value="0"><label for="contact-0">Mail</label>"#,
            r#"<input type="radio" id="contact-1" name="contact" value="1"><label for="contact-1">Phone</label>"#,
            "</td></tr></table>"
        )
    );
}

#[test]
fn test_empty_schema_example() {
    let table = render_table(&FieldSchema::default());
    assert_eq!(table.len(), 0);
    assert_eq!(table.to_string(), "<table></table>");
}
