//! Search integration tests: fetch adapter, query flow, and headless runtime.

#[path = "search/stub.rs"]
mod stub;

#[path = "search/fetch_http.rs"]
mod fetch_http;
#[path = "search/runtime_smoke.rs"]
mod runtime_smoke;
#[path = "search/search_flow.rs"]
mod search_flow;
#[path = "search/ui_render.rs"]
mod ui_render;
