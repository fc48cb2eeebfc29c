pub mod assessments;
pub mod fraud_api;
