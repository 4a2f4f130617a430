//! Provider chain tests
