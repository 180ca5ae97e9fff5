use std::sync::Arc;

use crate::domain::request::Locale;
use crate::templates::{BuiltinTemplates, TemplateSource};

#[derive(Clone)]
pub struct AppState {
    pub default_locale: Locale,
    pub templates: Arc<dyn TemplateSource + Send + Sync>,
}

impl AppState {
    pub fn new(default_locale: Locale) -> Self {
        AppState {
            default_locale,
            templates: Arc::new(BuiltinTemplates),
        }
    }
}
