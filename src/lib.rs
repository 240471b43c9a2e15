//! Chartview - a desktop client for previewing rendered Helm charts.
//!
//! The binary wires an FLTK window to a remote chart templating service:
//! the user enters a chart URL and optional YAML values, the app POSTs them
//! to the service's `/template` endpoint and displays the rendered
//! manifests with YAML syntax highlighting.

pub mod app;
pub mod ui;
