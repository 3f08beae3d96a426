//! HTTP application: routing, form handling, flash messages and HTML pages.

pub mod app;
pub mod middleware;
