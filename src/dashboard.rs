//! Landing page

use crate::AppState;
use crate::entities::RESOURCES;
use crate::error::Result;
use crate::store::count_rows;
use serde::Serialize;
use wastedash_core::{HttpRequest, HttpResponse};

pub const TITLE: &str = "Waste Management Dashboard";

#[derive(Debug, Clone, Serialize)]
pub struct IndexView {
    pub title: &'static str,
    pub sections: Vec<SectionView>,
}

/// One card per entity
#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub title: &'static str,
    pub description: &'static str,
    pub url: String,
    pub new_url: String,
    pub count: i64,
}

pub async fn index(state: AppState, _req: HttpRequest) -> Result<HttpResponse> {
    let mut sections = Vec::with_capacity(RESOURCES.len());
    for meta in RESOURCES {
        sections.push(SectionView {
            title: meta.title,
            description: meta.description,
            url: meta.list_url(),
            new_url: meta.new_url(),
            count: count_rows(&state.db, meta).await?,
        });
    }

    let view = IndexView {
        title: TITLE,
        sections,
    };
    Ok(state.views.render_response("index", &view).await?)
}
