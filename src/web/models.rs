use crate::clinics::Clinic;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct HealthQueryRequest {
    pub query: String,
    pub language: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct SymptomCheckerRequest {
    pub symptoms: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClinicFinderRequest {
    pub city: String,
}

#[derive(Debug, Serialize)]
pub struct ClinicFinderResponse {
    pub clinics: Vec<Clinic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
