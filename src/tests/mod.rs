//! # Scenario tests driving the public surface end to end.
//!
//! Each module exercises one slice of behavior across the whole pipeline, from
//! construction through the decimal domain and back:
//!
//! * `scenarios`: concrete constructions, parses and conversions with pinned outcomes.
//! * `laws`: algebraic properties over ranges of small values.
