//! gh-merge-pr: merge a GitHub pull request through the REST API
//!
//! The library builds a single `PUT /repos/{owner}/{repo}/pulls/{number}/merge`
//! request from a [`config::MergeConfig`], sends it through a
//! [`platform::MergeTransport`], and classifies the response as a
//! [`types::MergeOutcome`].

pub mod auth;
pub mod config;
pub mod error;
pub mod merge;
pub mod platform;
pub mod types;
