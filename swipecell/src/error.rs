use thiserror::Error;

/// Contract violations caught when building a swipe cell.
///
/// These are construction-time failures, not runtime-recoverable errors:
/// the widget cannot exist without content to wrap or a press handler for
/// the revealed action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("swipe cell requires content to wrap")]
    MissingContent,
    #[error("swipe cell requires an action press handler")]
    MissingPressHandler,
}
