//! Request handlers for the CRUD routes, generic over [`Resource`].

use crate::error::{DashboardError, Result};
use crate::resource::{FieldKind, Resource};
use crate::store::{Store, load_choices};
use crate::views::{ChoiceSets, DeleteView, FormView, ListView};
use crate::AppState;
use std::future::Future;
use wastedash_core::{HandlerFn, HttpRequest, HttpResponse, Router, handler};

/// Register the seven CRUD routes for `R`
pub fn mount<R: Resource>(router: &mut Router, state: &AppState) {
    let base = R::META.list_url();

    router
        .get(base.clone(), bind(state, list::<R>))
        .get(format!("{base}/new"), bind(state, new_form::<R>))
        .post(format!("{base}/new"), bind(state, create::<R>))
        .get(format!("{base}/:id/edit"), bind(state, edit_form::<R>))
        .post(format!("{base}/:id/edit"), bind(state, update::<R>))
        .get(format!("{base}/:id/delete"), bind(state, delete_form::<R>))
        .post(format!("{base}/:id/delete"), bind(state, destroy::<R>));
}

/// Adapt a stateful dashboard handler to the router's handler type
pub fn bind<F, Fut>(state: &AppState, f: F) -> HandlerFn
where
    F: Fn(AppState, HttpRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<HttpResponse>> + Send + 'static,
{
    let state = state.clone();
    handler(move |req: HttpRequest| {
        let fut = f(state.clone(), req);
        async move { fut.await.map_err(wastedash_core::Error::from) }
    })
}

pub async fn list<R: Resource>(state: AppState, _req: HttpRequest) -> Result<HttpResponse> {
    let rows = Store::<R>::new(&state.db).list().await?;
    let view = ListView::new(&R::META, &rows)?;
    Ok(state.views.render_response("list", &view).await?)
}

pub async fn new_form<R: Resource>(state: AppState, _req: HttpRequest) -> Result<HttpResponse> {
    let choices = reference_choices::<R>(&state).await?;
    let view = FormView::create(&R::META, &choices);
    Ok(state.views.render_response("form", &view).await?)
}

pub async fn create<R: Resource>(state: AppState, req: HttpRequest) -> Result<HttpResponse> {
    let form: R::Form = req.form()?;
    let id = Store::<R>::new(&state.db).create(form).await?;
    tracing::info!(resource = R::META.slug, id, "record created");
    Ok(HttpResponse::redirect(R::META.list_url()))
}

pub async fn edit_form<R: Resource>(state: AppState, req: HttpRequest) -> Result<HttpResponse> {
    let id = record_id::<R>(&req)?;
    let record = Store::<R>::new(&state.db)
        .find(id)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;

    let choices = reference_choices::<R>(&state).await?;
    let view = FormView::edit(&R::META, id, &serde_json::to_value(&record)?, &choices);
    Ok(state.views.render_response("form", &view).await?)
}

/// Overwrite by id. A missing row is not an error.
pub async fn update<R: Resource>(state: AppState, req: HttpRequest) -> Result<HttpResponse> {
    let id = record_id::<R>(&req)?;
    let form: R::Form = req.form()?;
    let rows = Store::<R>::new(&state.db).update(id, form).await?;
    tracing::info!(resource = R::META.slug, id, rows, "record updated");
    Ok(HttpResponse::redirect(R::META.list_url()))
}

pub async fn delete_form<R: Resource>(state: AppState, req: HttpRequest) -> Result<HttpResponse> {
    let id = record_id::<R>(&req)?;
    let summary = Store::<R>::new(&state.db)
        .find_summary(id)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;

    let view = DeleteView::new(&R::META, summary);
    Ok(state.views.render_response("delete", &view).await?)
}

pub async fn destroy<R: Resource>(state: AppState, req: HttpRequest) -> Result<HttpResponse> {
    let id = record_id::<R>(&req)?;
    let rows = Store::<R>::new(&state.db).delete(id).await?;
    tracing::info!(resource = R::META.slug, id, rows, "record deleted");
    Ok(HttpResponse::redirect(R::META.list_url()))
}

/// The `:id` segment. Anything but an integer cannot name a row.
fn record_id<R: Resource>(req: &HttpRequest) -> Result<i32> {
    let raw = req.param("id").map(String::as_str).unwrap_or_default();
    raw.trim().parse().map_err(|_| DashboardError::NotFound {
        resource: R::META.noun,
        id: raw.to_string(),
    })
}

fn not_found<R: Resource>(id: i32) -> DashboardError {
    DashboardError::NotFound {
        resource: R::META.noun,
        id: id.to_string(),
    }
}

async fn reference_choices<R: Resource>(state: &AppState) -> Result<ChoiceSets> {
    let mut choices = ChoiceSets::new();
    for field in R::META.fields {
        if let FieldKind::Reference { choices: sql, .. } = field.kind {
            choices.insert(field.name, load_choices(&state.db, sql).await?);
        }
    }
    Ok(choices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Routes;

    fn request_with_id(id: &str) -> HttpRequest {
        let mut req = HttpRequest::new("GET".into(), format!("/routes/{id}/edit"));
        req.path_params.insert("id".to_string(), id.to_string());
        req
    }

    #[test]
    fn test_record_id_parses_integers() {
        assert_eq!(record_id::<Routes>(&request_with_id("42")).unwrap(), 42);
    }

    #[test]
    fn test_record_id_rejects_garbage_as_not_found() {
        let err = record_id::<Routes>(&request_with_id("abc")).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::NotFound { resource: "route", ref id } if id == "abc"
        ));

        let err = record_id::<Routes>(&HttpRequest::new("GET".into(), "/".into())).unwrap_err();
        assert!(matches!(err, DashboardError::NotFound { .. }));
    }
}
