//! # meal-core
//!
//! Core types, ID prefixes, and error types for MealMax.
//!
//! This crate provides the foundational types shared across all MealMax crates:
//! - Entity structs for persisted meals, leaderboard rows, and battle outcomes
//! - Difficulty tiers, battle results, and leaderboard sort keys
//! - ID prefix constants
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
