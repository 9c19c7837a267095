use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::{collections::HashMap, convert::Infallible};

use crate::appearance::Appearance;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

pub(crate) mod filters {
    use time::{Date, macros::format_description};

    use crate::appearance::{Appearance, DEFAULT_APPEARANCE};

    fn appearance(values: &dyn askama::Values) -> &Appearance {
        askama::get_value::<Appearance>(values, "appearance").unwrap_or(&DEFAULT_APPEARANCE)
    }

    /// CSS font stack for the `brand` or `hero` role.
    #[askama::filter_fn]
    pub fn font(role: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let appearance = appearance(values);
        let font = match role {
            "hero" => appearance.hero_font,
            _ => appearance.brand_font,
        };

        Ok(font.stack.to_owned())
    }

    #[askama::filter_fn]
    pub fn font_name(role: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let appearance = appearance(values);
        let font = match role {
            "hero" => appearance.hero_font,
            _ => appearance.brand_font,
        };

        Ok(font.name.to_owned())
    }

    /// Google Fonts stylesheet URL, already escaped for an attribute. Use with `|safe`.
    #[askama::filter_fn]
    pub fn font_href(_value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        Ok(appearance(values).font_href().replace('&', "&amp;"))
    }

    /// "January 15, 2025"
    #[askama::filter_fn]
    pub fn long_date(value: &Date, _values: &dyn askama::Values) -> askama::Result<String> {
        value
            .format(format_description!("[month repr:long] [day padding:none], [year]"))
            .map_err(|e| askama::Error::Custom(Box::new(e)))
    }

    /// "Jan 15, 2025"
    #[askama::filter_fn]
    pub fn short_date(value: &Date, _values: &dyn askama::Values) -> askama::Result<String> {
        value
            .format(format_description!("[month repr:short] [day padding:none], [year]"))
            .map_err(|e| askama::Error::Custom(Box::new(e)))
    }

    /// Versioned asset path, so release builds can cache static files forever.
    #[askama::filter_fn]
    pub fn asset(path: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let is_dev = askama::get_value::<bool>(values, "is_dev")
            .copied()
            .unwrap_or(false);

        if is_dev {
            return Ok(path.to_owned());
        }

        Ok(format!("{path}?v={}", env!("CARGO_PKG_VERSION")))
    }

    /// "About | ARCALAB"
    #[askama::filter_fn]
    pub fn page_title(page: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let site = askama::get_value::<String>(values, "site_name")
            .map(String::as_str)
            .unwrap_or("ARCALAB");

        if page.is_empty() {
            return Ok(site.to_owned());
        }

        Ok(format!("{page} | {site}"))
    }

    /// Absolute URL of the current page on the configured site.
    #[askama::filter_fn]
    pub fn canonical(_value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let base_url = askama::get_value::<String>(values, "base_url")
            .map(String::as_str)
            .unwrap_or("");
        let path = askama::get_value::<String>(values, "current_path")
            .map(String::as_str)
            .unwrap_or("/");

        Ok(format!("{}{path}", base_url.trim_end_matches('/')))
    }

    /// "active" when the current page lives under `href`.
    #[askama::filter_fn]
    pub fn active(href: &str, values: &dyn askama::Values) -> askama::Result<&'static str> {
        let path = askama::get_value::<String>(values, "current_path")
            .map(String::as_str)
            .unwrap_or("/");

        let active = match href {
            "/" => path == "/",
            href => path == href || path.starts_with(&format!("{href}/")),
        };

        Ok(if active { "active" } else { "" })
    }
}

pub struct Template {
    appearance: Appearance,
    current_path: String,
    site_name: String,
    base_url: String,
}

impl Template {
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("appearance", Box::new(self.appearance));
        values.insert("current_path", Box::new(self.current_path.to_owned()));
        values.insert("site_name", Box::new(self.site_name.to_owned()));
        values.insert("base_url", Box::new(self.base_url.to_owned()));

        #[cfg(debug_assertions)]
        {
            values.insert("is_dev", Box::new(true));
        }
        #[cfg(not(debug_assertions))]
        {
            values.insert("is_dev", Box::new(false));
        }

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render template");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }

    pub fn render_status<T: askama::Template>(&self, status: StatusCode, template: T) -> Response {
        let mut response = self.render(template);
        if response.status().is_success() {
            *response.status_mut() = status;
        }
        response
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        Ok(Template {
            appearance: Appearance::from_jar(&jar),
            current_path: parts.uri.path().to_owned(),
            site_name: state.config.site.name.to_owned(),
            base_url: state.config.site.base_url.to_owned(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;

#[macro_export]
macro_rules! try_page_response {
    ($result:expr, $template:expr) => {
        match $result.await {
            Ok(r) => r,
            Err(err) => {
                tracing::error!("{err}");

                return $template
                    .render_status(
                        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                        $crate::template::ServerTemplate,
                    )
                    .into_response();
            }
        }
    };

    (sync: $result:expr, $template:expr) => {
        match $result {
            Ok(r) => r,
            Err(err) => {
                tracing::error!("{err}");

                return $template
                    .render_status(
                        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                        $crate::template::ServerTemplate,
                    )
                    .into_response();
            }
        }
    };

    (opt: $result:expr, $template:expr) => {
        match $result {
            Some(r) => r,
            None => {
                return $template
                    .render_status(
                        axum::http::StatusCode::NOT_FOUND,
                        $crate::template::NotFoundTemplate,
                    )
                    .into_response();
            }
        }
    };
}
