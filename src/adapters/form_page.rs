//! Full-page use case: render the configured schema and mount it into the
//! configured page template.

use thiserror::Error;

use crate::adapters::page::{Page, PageError};
use crate::adapters::sink::ContainerSink;
use crate::application::{MountError, RendererSink};
use crate::config::Settings;
use crate::render::render_table;

#[derive(Debug, Error)]
pub enum FormPageError {
    #[error(transparent)]
    Page(#[from] PageError),

    #[error(transparent)]
    Mount(#[from] MountError),
}

/// Render the configured schema and mount it into the configured page.
///
/// Returns the complete HTML document.
pub fn render_form_page(settings: &Settings) -> Result<String, FormPageError> {
    let table = render_table(&settings.schema());
    let mut page = Page::from_settings(&settings.page)?;

    ContainerSink::new(
        &mut page,
        settings.page.mount_target.clone(),
        settings.page.on_missing_target,
    )
    .mount(&table)?;

    Ok(page.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::MissingTargetPolicy;
    use crate::config::{PageSettings, ServerSettings};
    use crate::domain::presets::Preset;

    fn contact_settings(page: PageSettings) -> Settings {
        Settings {
            preset: Some(Preset::Contact),
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            page,
            fields: Preset::Contact.schema().fields().to_vec(),
        }
    }

    #[test]
    fn test_render_form_page_mounts_table() {
        let html = render_form_page(&contact_settings(PageSettings::default())).unwrap();
        assert!(html.contains(r#"<div id="form"><table><tr>"#));
        assert_eq!(html.matches("<tr>").count(), 8);
    }

    #[test]
    fn test_missing_target_fails_by_default() {
        let page = PageSettings {
            mount_target: "nowhere".to_string(),
            ..PageSettings::default()
        };
        let err = render_form_page(&contact_settings(page)).unwrap_err();
        assert!(matches!(
            err,
            FormPageError::Mount(MountError::TargetNotFound(ref id)) if id == "nowhere"
        ));
    }

    #[test]
    fn test_missing_target_ignored_when_configured() {
        let page = PageSettings {
            mount_target: "nowhere".to_string(),
            on_missing_target: MissingTargetPolicy::Ignore,
            ..PageSettings::default()
        };
        let html = render_form_page(&contact_settings(page)).unwrap();
        assert!(html.contains(r#"<div id="form"></div>"#));
        assert!(!html.contains("<table>"));
    }
}
