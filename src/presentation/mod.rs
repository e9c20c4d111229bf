//! Askama views for the rail markup.

pub mod views;
