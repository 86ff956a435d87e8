//! Timeclock Reconstruction Engine for payroll preparation
//!
//! This crate ingests the semi-structured weekly export produced by a restaurant
//! time-tracking device and reconstructs well-formed work shifts (in/out pairs)
//! per employee per day, handling overnight shifts, missing punches, and
//! anomalous durations. The reconstructed, flagged dataset feeds downstream
//! paysheet generation (rate lookup, NIS deduction, net pay).

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod paysheet;
pub mod reconstruct;
