// Easy Keywords: deterministic keyword suggestions for image titles.
//
// This is the library root. The generator lives in `keywords`; `web` is the
// JSON API around it and `config` reads its settings from the environment.

pub mod config;
pub mod keywords;
pub mod web;
