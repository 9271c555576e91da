//! Domain operations consumed by the presentation layer.

mod project;

#[cfg(test)]
mod project_test;

pub use project::ProjectService;
