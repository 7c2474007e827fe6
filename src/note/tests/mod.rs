//! Unit tests for the note module.
