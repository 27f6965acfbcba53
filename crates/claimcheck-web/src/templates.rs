//! Embedded minijinja templates. `.html` names get HTML auto-escaping.

use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

use crate::error::WebResult;

/// Page chrome (navigation + footer) shared by every page.
pub const BASE_HTML: &str = include_str!("../templates/base.html");
pub const HOME_HTML: &str = include_str!("../templates/home.html");
pub const RESULT_CARD_HTML: &str = include_str!("../templates/result_card.html");
pub const HISTORY_HTML: &str = include_str!("../templates/history.html");

pub const APP_CSS: &str = include_str!("../static/css/app.css");

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("base.html", BASE_HTML)?;
        env.add_template("home.html", HOME_HTML)?;
        env.add_template("result_card.html", RESULT_CARD_HTML)?;
        env.add_template("history.html", HISTORY_HTML)?;
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> WebResult<Html<String>> {
        let html = self.env.get_template(name)?.render(ctx)?;
        Ok(Html(html))
    }
}

/// Only http(s) URLs are rendered as links.
pub fn external_href(url: &str) -> Option<String> {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        None
    }
}
