use arcalab_showcase::{Key, Topic, TopicContent, TopicSelection};
use axum::{
    extract::{Form, Query},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "products.html")]
pub struct ProductsTemplate {
    pub selection: TopicSelection,
    pub content: &'static TopicContent,
    pub tabs: [Topic; 4],
}

impl ProductsTemplate {
    fn new(selection: TopicSelection) -> Self {
        Self {
            selection,
            content: selection.active().content(),
            tabs: Topic::TABS,
        }
    }
}

#[derive(Deserialize, Default, Debug)]
pub struct PageQuery {
    pub topic: Option<String>,
    pub expanded: Option<String>,
    /// Deep link, same as the `giantcard=<slug>` fragment.
    pub card: Option<String>,
}

impl PageQuery {
    fn selection(&self) -> TopicSelection {
        if let Some(card) = self.card.as_deref() {
            return TopicSelection::from_fragment(&format!("giantcard={card}"));
        }

        let topic = self
            .topic
            .as_deref()
            .and_then(|topic| topic.parse::<Topic>().ok())
            .unwrap_or_default();

        TopicSelection::new(topic, self.expanded.as_deref() == Some("true"))
    }
}

#[tracing::instrument(skip_all, fields(query = ?query))]
pub async fn page(template: Template, Query(query): Query<PageQuery>) -> impl IntoResponse {
    template.render(ProductsTemplate::new(query.selection()))
}

#[derive(Deserialize, Debug)]
pub struct KeyInput {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub expanded: String,
    #[serde(default)]
    pub key: String,
}

#[tracing::instrument(skip_all, fields(key = %input.key))]
pub async fn key(template: Template, Form(input): Form<KeyInput>) -> impl IntoResponse {
    let mut selection = TopicSelection::new(
        input.topic.parse::<Topic>().unwrap_or_default(),
        input.expanded == "true",
    );

    match input.key.trim().parse::<Key>() {
        Ok(key) => {
            if !selection.handle_key(key) {
                tracing::debug!("key ignored while collapsed");
            }
        }
        Err(err) => tracing::debug!(error = %err, "unknown key"),
    }

    template.render(ProductsTemplate::new(selection))
}
