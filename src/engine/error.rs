/// Terminal outcomes for a non-seatable request. The engine never retries;
/// every non-success path is returned to the caller, which owns the
/// user-facing messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// No opening window for the requested date/service after schedule
    /// lookup and promotional clipping. Offer a different date or service.
    Closed,
    /// A window exists but no offerable slot survives (advance-notice floor,
    /// or the requested time is not an offered slot). Suggest the next day.
    NoSlots,
    /// No single table or allowed combination reaches this party size.
    Infeasible(u32),
    /// Malformed restaurant policy or out-of-limit snapshot. Not recoverable
    /// by the diner; fix the configuration.
    InvalidConfig(&'static str),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Closed => write!(f, "service closed for the requested date"),
            EngineError::NoSlots => write!(f, "no offerable slot for the requested time"),
            EngineError::Infeasible(guests) => {
                write!(f, "no table or combination seats {guests} guests")
            }
            EngineError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}
