pub mod admin;
pub mod connection;
pub mod dashboard;
pub mod schedule;
