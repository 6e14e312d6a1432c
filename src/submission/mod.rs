//! Transcript submission module
//!
//! This module provides the client side of the Buzz Drop wire protocol:
//! one POST of the captured transcript to the transcript-processing
//! service, plus the outcome reporting around it.

pub mod client;
pub mod outcome;
