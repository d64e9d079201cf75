//! Terminal client for the assessment recommendation service.
//!
//! Reads a free-text query and a result count, sends them to
//! `POST {API_BASE_URL}/recommend`, and shows the ranked assessments as
//! cards. The [`client::QueryClient`] drives a [`page::Page`], which any
//! [`page::Surface`] can display.
//!
//! ```no_run
//! use std::sync::Arc;
//! use assessment_finder::{
//!     api::HttpRecommendationApi, client::QueryClient, page::Page, render::TerminalSurface,
//! };
//!
//! # async fn run() {
//! let api = Arc::new(HttpRecommendationApi::new("http://localhost:8000"));
//! let client = QueryClient::new(api, Page::new(Arc::new(TerminalSurface::new())));
//! client.submit_query("Java developer test", 5).await;
//! # }
//! ```

pub mod api;
pub mod cards;
pub mod client;
pub mod cmd;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod page;
pub mod render;
pub mod request_id;
pub mod telemetry;
