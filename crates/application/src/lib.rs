//! Flowgen Application - ICO Commerce suite definition
//!
//! The hard-coded data tables describing every folder, request, header
//! set, body payload, and response capture of the generated collection.

pub mod suite;
