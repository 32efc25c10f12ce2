//! Marker types.

/// Marker type describing an entity submission.
#[derive(Clone, Copy, Debug)]
pub struct Submission;
