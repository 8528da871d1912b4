#[macro_use]
extern crate log;

pub mod api;
pub mod categories;
pub mod config;
pub mod dashboard;
pub mod dialog;
pub mod error;
pub mod model;
pub mod quotes;
pub mod upload;

#[cfg(test)]
mod testing;

