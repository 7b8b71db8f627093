//! Plain-text reporting for assembled fair lending analyses.
//!
//! Rendering only: this crate consumes an [`fl_common::AnalysisResult`] and
//! formats it for humans. It performs no computation of its own.

pub mod summary;

pub use summary::render_summary;
