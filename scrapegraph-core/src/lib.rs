//! ScrapeGraphAI Core
//!
//! Core types shared by the client and CLI crates.
//!
//! This crate contains:
//! - Job lifecycle types: status classification and result normalization
//! - The uniform success/error envelope returned by every client call
//! - DTOs: typed request parameters and response shapes per endpoint

pub mod dto;
pub mod envelope;
pub mod job;
