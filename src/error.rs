use thiserror::Error;

/// Errors surfaced by the trackbox library.
///
/// Building a corridor never fails once a [`crate::corridor::CorridorBuilder`]
/// exists; these cover invalid inputs and configuration only.
#[derive(Debug, Error)]
pub enum TrackboxError {
    #[error("corridor distance must be a positive number of kilometers, got {0}")]
    InvalidDistance(f64),

    #[error("invalid corridor config: {0}")]
    InvalidConfig(String),

    #[error("track point {index} is not a valid WGS84 coordinate ({latitude}, {longitude})")]
    InvalidPoint {
        index: usize,
        latitude: f64,
        longitude: f64,
    },

    #[error("failed to parse track JSON: {0}")]
    TrackParse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrackboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackboxError::InvalidPoint {
            index: 3,
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(err.to_string().contains("point 3"));
        assert!(err.to_string().contains("91"));

        let err = TrackboxError::InvalidDistance(-1.0);
        assert!(err.to_string().contains("-1"));
    }
}
