//! HTTP clients for the MindFit API.

mod http_auth_gateway;

pub use http_auth_gateway::{HttpAuthGateway, LOGIN_PATH};
