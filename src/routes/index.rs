use arcalab_blog::BlogPost;
use arcalab_showcase::{Carousel, SLIDES, Slide};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    routes::AppState,
    template::{Template, filters},
};

const LATEST_POSTS: usize = 3;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub carousel: Carousel<'a, Slide>,
    pub posts: &'a [BlogPost],
}

#[derive(Deserialize, Default)]
pub struct PageQuery {
    pub slide: Option<String>,
}

#[tracing::instrument(skip_all, fields(slide = ?query.slide))]
pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let mut carousel = crate::try_page_response!(sync: Carousel::new(&SLIDES), template);

    if let Some(slide) = query.slide.as_deref() {
        let jumped = slide
            .parse::<i64>()
            .map_err(|err| err.to_string())
            .and_then(|index| carousel.jump_to(index).map_err(|err| err.to_string()));

        if let Err(err) = jumped {
            tracing::debug!(error = %err, "slide ignored");
        }
    }

    template
        .render(IndexTemplate {
            carousel,
            posts: app.content.latest(LATEST_POSTS),
        })
        .into_response()
}
