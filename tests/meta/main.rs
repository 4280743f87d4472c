//! Structural checks that keep the unit test tree in step with the source tree
