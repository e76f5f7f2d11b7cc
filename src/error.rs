//! Skill error handling.

use thiserror::Error;

/// Errors surfaced by the fractal skill.
///
/// An unparseable or out-of-range scale is not represented here: it is a
/// normal [`ScaleLookup::Unknown`](crate::fractals::scales::ScaleLookup)
/// value that gets phrased politely to the user.
#[derive(Error, Debug)]
pub enum SkillError {
    /// The Guild Wars 2 API could not be reached, returned a non-success
    /// status, timed out, or sent a payload of an unexpected shape.
    #[error("Guild Wars 2 API unavailable: {0}")]
    RemoteUnavailable(String),

    /// The voice platform sent an intent this skill does not handle.
    #[error("Unrecognized intent: {0}")]
    UnrecognizedIntent(String),

    /// A fractal scale table failed validation when loaded.
    #[error("Invalid fractal scale table: {0}")]
    InvalidScaleTable(String),
}

impl SkillError {
    /// Wraps an arbitrary upstream failure as [`SkillError::RemoteUnavailable`].
    ///
    /// Errors that already are a `SkillError` are passed through unchanged.
    pub fn remote(err: anyhow::Error) -> Self {
        match err.downcast::<Self>() {
            Ok(skill_err) => skill_err,
            Err(other) => Self::RemoteUnavailable(format!("{other:#}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_wraps_foreign_errors() {
        let err = SkillError::remote(anyhow::anyhow!("connection reset"));
        assert!(matches!(err, SkillError::RemoteUnavailable(ref msg) if msg == "connection reset"));
    }

    #[test]
    fn remote_passes_skill_errors_through() {
        let inner = SkillError::RemoteUnavailable("HTTP 502".to_string());
        let err = SkillError::remote(inner.into());
        assert_eq!(err.to_string(), "Guild Wars 2 API unavailable: HTTP 502");
    }
}
