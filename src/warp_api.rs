use crate::api_model::ListQuery;
use crate::command_line_interface::CliOptions;
use crate::error::Error;
use crate::internal_api;
use crate::warp_endpoints;
use bytes::Bytes;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use warp::http::header::HeaderMap;
use warp::http::header::HeaderValue;
use warp::Filter;
use warp::Rejection;
use warp::Reply;

/// Start web framework with specified APIs.
pub async fn run_server(cli_options: CliOptions, database_path: Arc<PathBuf>) {
    let package_name = env!("CARGO_PKG_NAME").to_uppercase();
    info!("Starting {} HTTP server", package_name);

    warp::serve(api(database_path))
        .run(([0, 0, 0, 0], cli_options.port))
        .await;
}

/// All routes of the service. Split out of `run_server` so that
/// tests can exercise the filters without binding a port.
pub fn api(
    database_path: Arc<PathBuf>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let mut headers = HeaderMap::new();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    let headers = warp::reply::with::headers(headers);

    // Plain greeting, also doubles as a cheap liveness probe.
    let root = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::json(&serde_json::json!({ "message": "Welcome to the items service!" })));

    // Get version of the cargo project.
    let version = warp::path("version")
        .and(warp::path::end())
        .and(warp::get())
        .map(internal_api::get_project_version);

    // GET API for a window of items, ordered by insertion.
    // Parameters: skip (default 0), limit (default 10).
    let path = database_path.clone();
    let list_items = warp::path("items")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<ListQuery>())
        .map(move |query: ListQuery| {
            let result = warp_endpoints::list_items(&path, query);
            let boxed: Box<dyn Reply> = match result {
                Ok(result) => Box::new(warp::reply::json(&result)),
                Err(err) => Box::new(error_reply(err)),
            };
            boxed
        });

    // POST API for a single item.
    // Input: json with `name` and `description` within the body.
    // Return the created item including its assigned id.
    let path = database_path.clone();
    let create_item = warp::path("items")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::bytes())
        .map(move |body: Bytes| {
            let result = warp_endpoints::create_item(&path, body);
            let boxed: Box<dyn Reply> = match result {
                Ok(result) => Box::new(warp::reply::json(&result)),
                Err(err) => Box::new(error_reply(err)),
            };
            boxed
        });

    // GET API for a single item.
    // Parameter: id of the requested item, signed 8-byte (64bit) integer.
    // Return 404 if the item does not exist.
    let path = database_path.clone();
    let get_item = warp::path!("items" / i64)
        .and(warp::path::end())
        .and(warp::get())
        .map(move |id: i64| {
            let result = warp_endpoints::get_item(&path, id);
            let boxed: Box<dyn Reply> = match result {
                Ok(result) => Box::new(warp::reply::json(&result)),
                Err(err) => Box::new(error_reply(err)),
            };
            boxed
        });

    // PUT (update) a single item.
    // Input:
    //      - id of the item to be updated
    //      - json with the new `name` and `description` (full replace)
    let path = database_path.clone();
    let update_item = warp::path!("items" / i64)
        .and(warp::path::end())
        .and(warp::put())
        .and(warp::body::bytes())
        .map(move |id: i64, body: Bytes| {
            let result = warp_endpoints::update_item(&path, id, body);
            let boxed: Box<dyn Reply> = match result {
                Ok(result) => Box::new(warp::reply::json(&result)),
                Err(err) => Box::new(error_reply(err)),
            };
            boxed
        });

    // DELETE a single item. Returns a confirmation payload only.
    let path = database_path.clone();
    let delete_item = warp::path!("items" / i64)
        .and(warp::path::end())
        .and(warp::delete())
        .map(move |id: i64| {
            let result = warp_endpoints::delete_item(&path, id);
            let boxed: Box<dyn Reply> = match result {
                Ok(()) => Box::new(warp::reply::json(
                    &serde_json::json!({ "detail": "Item deleted" }),
                )),
                Err(err) => Box::new(error_reply(err)),
            };
            boxed
        });

    root.or(version)
        .or(list_items)
        .or(create_item)
        .or(get_item)
        .or(update_item)
        .or(delete_item)
        .with(headers)
}

/// Client-facing error body, e.g. `{"detail": "Item not found"}` with status 404.
fn error_reply(err: Error) -> impl Reply {
    warp::reply::with_status(
        warp::reply::json(&serde_json::json!({ "detail": err.msg })),
        err.code,
    )
}
