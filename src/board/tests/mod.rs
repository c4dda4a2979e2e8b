//! Unit tests for the stage board.
