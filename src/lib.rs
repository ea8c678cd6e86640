//! Core library for aplayer-folder-sync
pub mod block;
pub mod config;
pub mod markers;
pub mod rewrite;
pub mod scan;
