#![allow(dead_code)]

use actix_web::test::TestRequest;
use catalog_api::app::AppState;
use catalog_api::models::Role;
use catalog_api::services::TokenService;
use serde_json::Value;

pub const SECRET: &str = "integration-test-secret";

/// Bearer tokens for each kind of caller.
pub struct Callers {
    pub super_admin: String,
    pub admin: String,
    pub user: String,
}

pub fn setup() -> (AppState, Callers) {
    let tokens = TokenService::new(SECRET, 1);
    let callers = Callers {
        super_admin: tokens.issue("root", Role::SuperAdmin).unwrap(),
        admin: tokens.issue("alice", Role::Admin).unwrap(),
        user: tokens.issue("bob", Role::User).unwrap(),
    };
    (AppState::in_memory(tokens), callers)
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

pub fn get(uri: &str, token: &str) -> TestRequest {
    TestRequest::get().uri(uri).insert_header(bearer(token))
}

pub fn post(uri: &str, token: &str, body: Value) -> TestRequest {
    TestRequest::post()
        .uri(uri)
        .insert_header(bearer(token))
        .set_json(body)
}

pub fn put(uri: &str, token: &str, body: Value) -> TestRequest {
    TestRequest::put()
        .uri(uri)
        .insert_header(bearer(token))
        .set_json(body)
}

pub fn patch(uri: &str, token: &str, body: Value) -> TestRequest {
    TestRequest::patch()
        .uri(uri)
        .insert_header(bearer(token))
        .set_json(body)
}

pub fn delete(uri: &str, token: &str) -> TestRequest {
    TestRequest::delete().uri(uri).insert_header(bearer(token))
}
