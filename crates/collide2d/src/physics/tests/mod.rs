//! Cross-shape tests that exercise the dispatch as a whole
