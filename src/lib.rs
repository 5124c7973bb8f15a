//! catup - Gradle version catalog update checker library
//!
//! This library provides the core functionality for checking the libraries
//! declared in a Gradle version catalog (`libs.versions.toml`) against
//! Maven repositories:
//! - Catalog parsing with `version.ref` alias resolution
//! - Ordered repository fallback over `maven-metadata.xml`
//! - Qualifier-tolerant version ordering with pre-release channels
//! - A cancellable check pipeline with progress reporting

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
pub mod update;
