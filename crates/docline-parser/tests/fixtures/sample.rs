// Copyright notice that documents nothing.

//! Inner docs are plain line comments to the scanner.

/// Detached: a blank line follows.

/// Adds two numbers.
///
/// # Examples
///
///     assert_eq!(add(1, 2), 3);
pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

/**
 * A point in the plane.
 *
 * Coordinates are in pixels.
 */
pub struct Point;

impl Point {
    /**
       Creates the origin.
         Indented detail.
     */
    pub fn origin() -> Self {
        Self
    }

    /** Distance to another point. */
    pub fn distance(&self) -> f64 {
        0.0
    }
}

// Regular comments never attach.
pub fn undocumented() {}
