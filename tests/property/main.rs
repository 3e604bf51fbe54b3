//! Property-based tests

mod tags_proptest;
