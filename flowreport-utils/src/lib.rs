//! Utility library for the flowreport project: loading flow-monitor exports and persisting
//! rendered reports.

pub mod io;
pub mod other;
