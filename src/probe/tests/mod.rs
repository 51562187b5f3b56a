//! Test modules for the probe system
//!
//! This module organizes the probe test suites: version string encoding,
//! flag derivation, host detection, and the process-global service slot.

mod helpers;

mod capabilities;
