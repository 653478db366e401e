use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use bookrec_core::{engine, Catalog, Mode};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
struct BookRequest {
    book_name: String,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(catalog: Arc<Catalog>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(catalog.clone()))
                .configure(routes)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

/// Route table, shared with the tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/popular_df", web::get().to(popular_books))
        .route("/recommendations/book", web::post().to(recommend_book))
        .route("/recommendations/author", web::post().to(recommend_author))
        .route("/recommendations/genre", web::post().to(recommend_genre))
        .route("/", web::get().to(index));
}

async fn popular_books(catalog: web::Data<Arc<Catalog>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(catalog.popular()))
}

async fn recommend_book(
    catalog: web::Data<Arc<Catalog>>,
    req: web::Json<BookRequest>,
) -> ActixResult<HttpResponse> {
    respond(catalog.get_ref(), &req.book_name, Mode::Book)
}

async fn recommend_author(
    catalog: web::Data<Arc<Catalog>>,
    req: web::Json<BookRequest>,
) -> ActixResult<HttpResponse> {
    respond(catalog.get_ref(), &req.book_name, Mode::Author)
}

async fn recommend_genre(
    catalog: web::Data<Arc<Catalog>>,
    req: web::Json<BookRequest>,
) -> ActixResult<HttpResponse> {
    respond(catalog.get_ref(), &req.book_name, Mode::Genre)
}

/// Ranked and fallback results are both plain 200 arrays; an unmatched
/// query is never an error at this boundary.
fn respond(catalog: &Catalog, query: &str, mode: Mode) -> ActixResult<HttpResponse> {
    let recommendation = engine::recommend(catalog, query, mode);
    Ok(HttpResponse::Ok().json(recommendation.into_books()))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../static/index.html"))
}
