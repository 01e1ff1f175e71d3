pub mod api_client;
pub mod cep_service;

pub use api_client::ApiClient;
pub use cep_service::{lookup_cep, normalize_cep};
