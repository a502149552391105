pub mod get_by_id;
pub mod health_check;
pub mod routes;
