//! Step definitions for cucumber scenarios.

mod framing_steps;
