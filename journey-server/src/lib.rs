//! JourneyJunction travel guide server.
//!
//! A web application for planning trips around Uttarakhand: straight-line
//! distances between places, a route map, and guides to destinations,
//! stays and food.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod domain;
pub mod expenses;
pub mod listings;
pub mod planner;
pub mod web;
