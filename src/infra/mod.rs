//! Infrastructure adapters: Postgres replica access and telemetry.

pub mod db;
pub mod telemetry;
