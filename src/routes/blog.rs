use arcalab_blog::BlogPost;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    routes::AppState,
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "blog.html")]
pub struct BlogTemplate<'a> {
    pub posts: &'a [BlogPost],
}

#[derive(askama::Template)]
#[template(path = "post.html")]
pub struct PostTemplate<'a> {
    pub post: &'a BlogPost,
    pub related: Vec<&'a BlogPost>,
}

pub async fn index(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    template.render(BlogTemplate {
        posts: app.content.posts(),
    })
}

#[tracing::instrument(skip_all, fields(slug = %slug))]
pub async fn post(
    template: Template,
    State(app): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let post = crate::try_page_response!(opt: app.content.post(&slug), template);

    template
        .render(PostTemplate {
            post,
            related: app.content.related(post),
        })
        .into_response()
}
