//! Server side html for both pages, rendered with handlebars

pub(crate) mod menu_management;
pub(crate) mod ordering;

use anyhow::Context;
use handlebars::{Handlebars, RenderError};
use serde::Serialize;
use crate::server::view::ViewError;

const MENU_MANAGEMENT_PAGE: &str = "menu_management";
const ORDERING_PAGE: &str = "ordering";

const PARTIALS: [(&str, &str); 5] = [
    ("layout_head", include_str!("templates/layout_head.hbs")),
    ("banner", include_str!("templates/banner.hbs")),
    ("card", include_str!("templates/card.hbs")),
    ("table", include_str!("templates/table.hbs")),
    ("submit_button", include_str!("templates/submit_button.hbs")),
];

const PAGES: [(&str, &str); 2] = [
    (MENU_MANAGEMENT_PAGE, include_str!("templates/menu_management.hbs")),
    (ORDERING_PAGE, include_str!("templates/ordering.hbs")),
];

/// Registered page templates; `{{...}}` output is html escaped.
pub(crate) struct Templates {
    handlebars: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> anyhow::Result<Self> {
        let mut handlebars = Handlebars::new();
        for (name, source) in PARTIALS {
            handlebars
                .register_partial(name, source)
                .with_context(|| format!("failed to register partial {name}"))?;
        }
        for (name, source) in PAGES {
            handlebars
                .register_template_string(name, source)
                .with_context(|| format!("failed to register template {name}"))?;
        }
        Ok(Self { handlebars })
    }

    fn render<T: Serialize>(&self, name: &str, ctx: &T) -> Result<String, RenderError> {
        self.handlebars.render(name, ctx)
    }
}

/// Page header and error banner.
#[derive(Debug, Serialize)]
struct Layout {
    title: &'static str,
    nav_href: &'static str,
    nav_label: &'static str,
    error: Option<String>,
}

impl Layout {
    fn new(title: &'static str, nav_href: &'static str, nav_label: &'static str, error: Option<ViewError>) -> Self {
        Self {
            title,
            nav_href,
            nav_label,
            error: error.map(|e| e.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct SubmitButton {
    submitting: bool,
    label: &'static str,
    busy_label: &'static str,
}

#[derive(Debug, Serialize)]
struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new<const N: usize>(headers: [&'static str; N], rows: impl Iterator<Item = [String; N]>) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: rows.map(Vec::from).collect(),
        }
    }
}
