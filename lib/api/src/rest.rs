use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use textsim_compare::{
    compare, compare_full, compare_full_detailed, compare_tokenizations, exact_match,
    overlap_ratio,
};
use textsim_core::{cosine, DEFAULT_NGRAM_SIZE};
use textsim_semantic::SemanticSimilarity;
use tracing::info;

#[derive(Deserialize)]
struct PairRequest {
    a: String,
    b: String,
}

#[derive(Deserialize)]
struct TokenizationRequest {
    a: String,
    b: String,
    n: Option<usize>,
}

#[derive(Deserialize)]
struct ScoreRequest {
    expected: String,
    actual: String,
}

#[derive(Deserialize)]
struct CosineRequest {
    a: Vec<f32>,
    b: Vec<f32>,
}

#[derive(Serialize)]
struct ScoreResponse {
    score: f32,
}

#[derive(Serialize)]
struct CosineResponse {
    score: f32,
    zero_magnitude: bool,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(semantic: Arc<SemanticSimilarity>, port: u16) -> std::io::Result<()> {
        info!(port, model = %semantic.model(), "REST API listening");

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(semantic.clone()))
                .configure(Self::routes)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }

    /// Register every endpoint; expects `Arc<SemanticSimilarity>` app data
    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.route("/healthz", web::get().to(health))
            .route("/compare", web::post().to(compare_pair))
            .route("/compare/tokenizations", web::post().to(compare_tokenized))
            .route("/compare/full", web::post().to(compare_all))
            .route("/compare/full/detailed", web::post().to(compare_all_detailed))
            .route("/score/exact", web::post().to(score_exact))
            .route("/score/overlap", web::post().to(score_overlap))
            .route("/similarity/cosine", web::post().to(cosine_vectors));
    }
}

async fn health(semantic: web::Data<Arc<SemanticSimilarity>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "model": semantic.model(),
    })))
}

async fn compare_pair(req: web::Json<PairRequest>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(compare(&req.a, &req.b)))
}

async fn compare_tokenized(req: web::Json<TokenizationRequest>) -> ActixResult<HttpResponse> {
    let n = req.n.unwrap_or(DEFAULT_NGRAM_SIZE);
    match compare_tokenizations(&req.a, &req.b, n) {
        Ok(report) => Ok(HttpResponse::Ok().json(report)),
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

async fn compare_all(
    semantic: web::Data<Arc<SemanticSimilarity>>,
    req: web::Json<PairRequest>,
) -> ActixResult<HttpResponse> {
    let report = compare_full(semantic.get_ref(), &req.a, &req.b).await;
    Ok(HttpResponse::Ok().json(report))
}

async fn compare_all_detailed(
    semantic: web::Data<Arc<SemanticSimilarity>>,
    req: web::Json<PairRequest>,
) -> ActixResult<HttpResponse> {
    let report = compare_full_detailed(semantic.get_ref(), &req.a, &req.b).await;
    Ok(HttpResponse::Ok().json(report))
}

async fn score_exact(req: web::Json<ScoreRequest>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ScoreResponse {
        score: exact_match(&req.expected, &req.actual),
    }))
}

async fn score_overlap(req: web::Json<ScoreRequest>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ScoreResponse {
        score: overlap_ratio(&req.expected, &req.actual),
    }))
}

async fn cosine_vectors(req: web::Json<CosineRequest>) -> ActixResult<HttpResponse> {
    match cosine(&req.a, &req.b) {
        Ok(outcome) => Ok(HttpResponse::Ok().json(CosineResponse {
            score: outcome.value(),
            zero_magnitude: outcome.is_zero_magnitude(),
        })),
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}
