pub mod config;
pub mod dashboard;
pub mod db;
pub mod web;
