//! Scenario tests against the shipped enumerations.
