//! Constants for file classification during enumeration and analysis.
//!
//! Extensions are compared case-insensitively, so `Button.TSX` is treated
//! the same as `Button.tsx`.

/// Style-sheet extensions whose class selectors are indexed
pub const STYLESHEET_EXTENSIONS: &[&str] = &[
    "css",  // Plain CSS
    "scss", // Sass
];

/// Component extensions whose `className` attributes are scanned
pub const COMPONENT_EXTENSIONS: &[&str] = &[
    "tsx", // TypeScript with JSX
    "jsx", // JavaScript with JSX
];

/// Directory names pruned at any depth of the walk
pub const IGNORED_DIRS: &[&str] = &["node_modules", "coverage", "dist", ".git"];

/// File name suffixes marking component test files
pub const TEST_FILE_SUFFIXES: &[&str] = &["test.tsx", "test.jsx"];
