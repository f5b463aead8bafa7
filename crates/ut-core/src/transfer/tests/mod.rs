//! Unit tests for the negotiation engine.

mod fixtures;
