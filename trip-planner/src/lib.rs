//! Trip planner server.
//!
//! Resolves two place names, measures the great-circle distance between
//! them and turns it into a duration, a cost, traffic notes, warnings and
//! a few alternative routes for the chosen transport mode. Also finds
//! restaurants, accommodation and sights around a place.

pub mod cache;
pub mod config;
pub mod domain;
pub mod estimate;
pub mod geo;
pub mod geocoding;
pub mod places;
pub mod planner;
pub mod weather;
pub mod web;
