//! Text rendering of the form view, error list and success view

use std::io::Write;

use crate::domain::{ErrorSet, FieldName, ReferenceData};
use crate::infrastructure::services::{FormStateStore, SuccessPayload};

/// Order in which fields appear on screen
const DISPLAY_ORDER: [FieldName; 11] = [
    FieldName::FirstName,
    FieldName::LastName,
    FieldName::Username,
    FieldName::Email,
    FieldName::PhoneNumber,
    FieldName::Pan,
    FieldName::Aadhar,
    FieldName::Password,
    FieldName::PhoneCode,
    FieldName::Country,
    FieldName::City,
];

const LABEL_WIDTH: usize = 16;

#[derive(Debug, Clone, Copy, Default)]
pub struct FormView {
    pub reveal_password: bool,
}

pub fn render_error_summary<W: Write>(out: &mut W, errors: &ErrorSet) -> anyhow::Result<()> {
    writeln!(out, "Please fix the following errors before submitting:")?;

    for line in errors.summary() {
        writeln!(out, "  - {}", line)?;
    }

    writeln!(out)?;
    Ok(())
}

pub fn render_form<W: Write>(
    out: &mut W,
    store: &FormStateStore,
    errors: Option<&ErrorSet>,
    view: FormView,
) -> anyhow::Result<()> {
    writeln!(out, "User Registration Form")?;
    writeln!(out)?;

    for field in DISPLAY_ORDER {
        let label = format!("{} *", field.label());
        let value = display_value(store, field, view);
        writeln!(out, "{:<width$} {}", label, value, width = LABEL_WIDTH)?;

        if let Some(message) = errors.and_then(|e| e.get(field)) {
            writeln!(out, "{:<width$} ! {}", "", message, width = LABEL_WIDTH)?;
        }
    }

    Ok(())
}

fn display_value(store: &FormStateStore, field: FieldName, view: FormView) -> String {
    let value = store.get(field);

    match field {
        FieldName::Password if !view.reveal_password => "*".repeat(value.chars().count()),
        FieldName::Country if value.is_empty() => "<Select Country>".to_string(),
        FieldName::City if value.is_empty() => {
            if store.get(FieldName::Country).is_empty() {
                "<Select City> (select a country first)".to_string()
            } else {
                format!("<Select City> ({})", store.available_cities().join(", "))
            }
        }
        _ => value.to_string(),
    }
}

pub fn render_success<W: Write>(out: &mut W, payload: &SuccessPayload) -> anyhow::Result<()> {
    writeln!(out, "Submission Successful!")?;
    writeln!(out)?;
    writeln!(out, "{}", payload.to_pretty_json()?)?;
    Ok(())
}

pub fn render_countries<W: Write>(out: &mut W, reference: &dyn ReferenceData) -> anyhow::Result<()> {
    for country in reference.countries() {
        writeln!(
            out,
            "{} ({}): {}",
            country.name,
            country.code,
            country.cities.join(", ")
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::infrastructure::reference::CountryTable;
    use crate::infrastructure::storage::InMemoryKeyValueStore;

    fn store() -> FormStateStore {
        FormStateStore::load(
            Arc::new(InMemoryKeyValueStore::new()),
            Arc::new(CountryTable::builtin()),
        )
    }

    fn render(store: &FormStateStore, errors: Option<&ErrorSet>, view: FormView) -> String {
        let mut out = Vec::new();
        render_form(&mut out, store, errors, view).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_password_is_masked_unless_revealed() {
        let mut store = store();
        store.set_field(FieldName::Password, "hunter2").unwrap();

        let masked = render(&store, None, FormView::default());
        assert!(masked.contains("Password *       *******\n"));
        assert!(!masked.contains("hunter2"));

        let revealed = render(&store, None, FormView { reveal_password: true });
        assert!(revealed.contains("Password *       hunter2\n"));
    }

    #[test]
    fn test_city_placeholder_depends_on_country() {
        let mut store = store();
        let output = render(&store, None, FormView::default());
        assert!(output.contains("<Select Country>"));
        assert!(output.contains("(select a country first)"));

        store.set_country("UK").unwrap();
        let output = render(&store, None, FormView::default());
        assert!(output.contains("Phone Code *     +44\n"));
        assert!(output.contains("<Select City> (London, Manchester, Birmingham)"));
    }

    #[test]
    fn test_inline_errors_follow_their_field() {
        let store = store();
        let mut errors = ErrorSet::new();
        errors.insert(FieldName::Email, "This field is required");

        let output = render(&store, Some(&errors), FormView::default());

        assert!(output.contains("Email *          \n                 ! This field is required\n"));
        assert_eq!(output.matches(" ! ").count(), 1);
    }

    #[test]
    fn test_error_summary() {
        let mut errors = ErrorSet::new();
        errors.insert(FieldName::Aadhar, "Aadhar must be 12 digits");
        errors.insert(FieldName::FirstName, "This field is required");

        let mut out = Vec::new();
        render_error_summary(&mut out, &errors).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Please fix the following errors before submitting:\n\
             \x20 - First Name: This field is required\n\
             \x20 - Aadhar: Aadhar must be 12 digits\n\n"
        );
    }

    #[test]
    fn test_render_countries() {
        let mut out = Vec::new();
        render_countries(&mut out, &CountryTable::builtin()).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().next(), Some("India (+91): Mumbai, Delhi, Bangalore"));
        assert_eq!(output.lines().count(), 3);
    }
}
