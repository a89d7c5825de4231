use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use std::collections::HashSet;
use tera::Context;

use crate::triage;
use crate::web::models::{
    AnswerResponse, ClinicFinderRequest, ClinicFinderResponse, HealthQueryRequest,
    SymptomCheckerRequest,
};
use crate::AppState;

// Liveness probe
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body("MedChat Backend Running")
}

// Chat page handler
pub async fn chat_page(data: web::Data<AppState>) -> impl Responder {
    let mut context = Context::new();
    context.insert("languages", &data.knowledge.language_codes());
    context.insert("symptoms", &triage::vocabulary());
    match data.tera.render("index.html", &context) {
        Ok(html) => HttpResponse::Ok().content_type("text/html").body(html),
        Err(e) => {
            error!("Template error: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

// Health query endpoint: exact-match phrase lookup
pub async fn health_query(
    data: web::Data<AppState>,
    req: web::Json<HealthQueryRequest>,
) -> impl Responder {
    info!("Health query ({}): {}", req.language, req.query);
    let answer = data.knowledge.resolve(&req.query, &req.language);
    HttpResponse::Ok().json(AnswerResponse { answer })
}

// Symptom checker endpoint: ordered rule chain over the reported set
pub async fn symptom_checker(req: web::Json<SymptomCheckerRequest>) -> impl Responder {
    info!("Symptom check: {:?}", req.symptoms);
    let symptoms: HashSet<String> = req.into_inner().symptoms.into_iter().collect();
    let answer = triage::advise(&symptoms);
    HttpResponse::Ok().json(AnswerResponse { answer })
}

// Clinic finder endpoint: case-insensitive city lookup
pub async fn clinic_finder(
    data: web::Data<AppState>,
    req: web::Json<ClinicFinderRequest>,
) -> impl Responder {
    info!("Clinic lookup: {}", req.city);
    let (clinics, message) = data.clinics.find(&req.city);
    HttpResponse::Ok().json(ClinicFinderResponse {
        clinics: clinics.to_vec(),
        message,
    })
}
