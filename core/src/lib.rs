//! Cohort economy simulator.
//!
//! A closed population in three cohorts (young, adult, old) shares a fixed
//! coin supply through adult salaries. Each simulated year the population
//! projector records births and ageing in the ledger, then the economy
//! advancer derives the next snapshot from it.

pub mod config;
pub mod economy;
pub mod engine;
pub mod error;
pub mod event;
pub mod ledger;
pub mod population;
pub mod report;
pub mod sweep;
pub mod types;
