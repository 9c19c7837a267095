use axum::{
    extract::Form,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    appearance::{Appearance, FontCategory, FontOption, find_font, fonts_in},
    template::{Template, filters},
};

pub struct FontGroup {
    pub category: FontCategory,
    pub fonts: Vec<&'static FontOption>,
}

#[derive(askama::Template)]
#[template(path = "playground.html")]
pub struct PlaygroundTemplate {
    pub current: Appearance,
    pub groups: Vec<FontGroup>,
}

pub async fn page(template: Template) -> impl IntoResponse {
    let groups = FontCategory::ALL
        .into_iter()
        .map(|category| FontGroup {
            category,
            fonts: fonts_in(category).collect(),
        })
        .collect();

    template.render(PlaygroundTemplate {
        current: template.appearance(),
        groups,
    })
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ActionInput {
    pub brand_font: String,
    pub hero_font: String,
}

#[tracing::instrument(skip_all, fields(brand = %input.brand_font, hero = %input.hero_font))]
pub async fn action(
    template: Template,
    jar: CookieJar,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let current = template.appearance();

    let appearance = Appearance {
        brand_font: find_font(&input.brand_font).unwrap_or(current.brand_font),
        hero_font: find_font(&input.hero_font).unwrap_or(current.hero_font),
    };

    (appearance.save(jar), Redirect::to("/playground"))
}

pub async fn reset(jar: CookieJar) -> impl IntoResponse {
    (Appearance::clear(jar), Redirect::to("/playground"))
}
