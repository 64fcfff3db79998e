//! Workspace-level integration tests for fibseries live in `tests/`.
