//! # Prompt Template Modules
//!
//! This module organizes all prompt templates used by the `brandcircle` library.

pub mod golden_circle;
