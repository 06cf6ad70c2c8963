//! Unit tests for the server profile registry.
