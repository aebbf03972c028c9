//! Daylane Core Types and Definitions
//!
//! This crate provides the foundational types for laying out the events of a
//! single day. It includes:
//!
//! - **Intervals**: Validated half-open time spans ([`interval::Interval`])
//! - **Events**: Identified intervals and their layout records ([`event`] module)
//! - **Schedules**: Named entries read from schedule sources ([`schedule`] module)
//! - **Geometry**: Projection of layout records to render geometry ([`geometry`] module)
//! - **Time**: The minute offset unit and clock conversions ([`time`] module)

pub mod event;
pub mod geometry;
pub mod interval;
pub mod schedule;
pub mod time;
