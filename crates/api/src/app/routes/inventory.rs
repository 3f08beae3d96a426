use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};

use pharmacy_core::MedicineId;
use pharmacy_inventory::{InventoryItem, ItemForm};

use crate::app::dto::{FlashQuery, SearchForm};
use crate::app::errors;
use crate::app::flash::{redirect_with, Flash};
use crate::app::services::AppServices;
use crate::app::views::{self, FormMode};

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", get(add_form).post(add_medicine))
        .route("/edit/:id", get(edit_form).post(edit_medicine))
        .route("/delete/:id", get(delete_medicine))
        .route("/search", get(search_redirect).post(search_medicine))
}

fn parse_id(raw: &str) -> Result<MedicineId, Response> {
    raw.parse().map_err(|e| {
        tracing::warn!(id = raw, error = %e, "unparsable medicine id");
        redirect_with("/", errors::not_found_flash())
    })
}

pub async fn index(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<FlashQuery>,
) -> Response {
    let mut flashes = query.into_flashes();

    let items = match services.store().list_all().await {
        Ok(items) => items,
        Err(e) => {
            flashes.push(errors::store_error_flash("fetching data", &e));
            Vec::new()
        }
    };

    Html(views::index_page(&items, &flashes, None)).into_response()
}

pub async fn add_form(Query(query): Query<FlashQuery>) -> Response {
    Html(views::item_form_page(
        FormMode::Add,
        &ItemForm::default(),
        &query.into_flashes(),
    ))
    .into_response()
}

pub async fn add_medicine(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<ItemForm>,
) -> Response {
    let fields = match form.validate() {
        Ok(f) => f,
        Err(e) => return redirect_with("/add", errors::domain_error_flash(&e)),
    };

    let item = InventoryItem::create(fields);
    match services.store().insert(&item).await {
        Ok(()) => {
            tracing::info!(id = %item.id(), name = item.name(), "medicine added");
            redirect_with(
                "/",
                Flash::success(format!("Medicine '{}' added successfully!", item.name())),
            )
        }
        Err(e) => redirect_with("/add", errors::store_error_flash("adding medicine", &e)),
    }
}

pub async fn edit_form(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Query(query): Query<FlashQuery>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(res) => return res,
    };

    match services.store().get_by_id(id).await {
        Ok(Some(item)) => Html(views::item_form_page(
            FormMode::Edit(id),
            &ItemForm::from(&item),
            &query.into_flashes(),
        ))
        .into_response(),
        Ok(None) => redirect_with("/", errors::not_found_flash()),
        Err(e) => redirect_with("/", errors::store_error_flash("loading medicine", &e)),
    }
}

pub async fn edit_medicine(
    Extension(services): Extension<Arc<AppServices>>,
    Path(raw_id): Path<String>,
    Form(form): Form<ItemForm>,
) -> Response {
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(res) => return res,
    };
    let back = format!("/edit/{id}");

    let fields = match form.validate() {
        Ok(f) => f,
        Err(e) => return redirect_with(&back, errors::domain_error_flash(&e)),
    };

    match services.store().update(id, &fields).await {
        Ok(true) => {
            tracing::info!(%id, name = fields.name.as_str(), "medicine updated");
            redirect_with(
                "/",
                Flash::success(format!("Medicine '{}' updated successfully!", fields.name)),
            )
        }
        Ok(false) => {
            tracing::warn!(%id, "update matched no medicine");
            redirect_with("/", errors::not_found_flash())
        }
        Err(e) => redirect_with(&back, errors::store_error_flash("updating medicine", &e)),
    }
}

pub async fn delete_medicine(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(res) => return res,
    };

    let flash = match services.store().delete_by_id(id).await {
        Ok(true) => {
            tracing::info!(%id, "medicine deleted");
            Flash::success("Medicine deleted successfully!")
        }
        Ok(false) => {
            tracing::warn!(%id, "delete matched no medicine");
            errors::not_found_flash()
        }
        Err(e) => errors::store_error_flash("deleting medicine", &e),
    };

    redirect_with("/", flash)
}

pub async fn search_medicine(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<SearchForm>,
) -> Response {
    let term = form.search_name.trim();
    if term.is_empty() {
        return redirect_with("/", Flash::danger("Please enter a medicine name to search."));
    }

    match services.store().search_by_name_substring(term).await {
        Ok(items) => Html(views::index_page(&items, &[], Some(term))).into_response(),
        Err(e) => redirect_with("/", errors::store_error_flash("searching medicines", &e)),
    }
}

pub async fn search_redirect() -> Redirect {
    Redirect::to("/")
}
