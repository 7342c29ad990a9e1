//! Domain constants
//!
//! Shared by the configuration text format and the declaration registry.

/// Separator between a key and its value in configuration text
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Lines starting with this character are comments
pub const COMMENT_PREFIX: char = '#';

/// Separator between elements of a set parameter's default literal
pub const SET_DEFAULT_SEPARATOR: char = ',';

/// Default bound on the depth of a single resolution chain
pub const DEFAULT_MAX_RESOLUTION_DEPTH: usize = 256;
