//! Common module - vocabulary shared by every part of the model

/// Ticks per quarter note used when a document does not specify divisions
///
/// `3 * 4 * 5 * 7` divides evenly by every common tuplet denominator.
pub const DEFAULT_TICKS_PER_QUARTER: i32 = 3 * 4 * 5 * 7;

/// Sentinel tick time meaning "never ends"
pub const TICK_TIME_INFINITY: i32 = i32::MAX;

/// Tri-state flag
///
/// The interchange format distinguishes an attribute that was written as
/// `yes` or `no` from one that was never written at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bool {
    /// The attribute is absent
    #[default]
    Unspecified,

    /// Explicitly `yes`
    Yes,

    /// Explicitly `no`
    No,
}

impl Bool {
    /// Get the flag as an optional bool (`None` when unspecified)
    pub fn as_option(&self) -> Option<bool> {
        match self {
            Bool::Unspecified => None,
            Bool::Yes => Some(true),
            Bool::No => Some(false),
        }
    }

    /// Check whether the flag was written at all
    pub fn is_specified(&self) -> bool {
        *self != Bool::Unspecified
    }
}

impl From<bool> for Bool {
    fn from(value: bool) -> Self {
        if value {
            Bool::Yes
        } else {
            Bool::No
        }
    }
}

impl From<Option<bool>> for Bool {
    fn from(value: Option<bool>) -> Self {
        value.map(Bool::from).unwrap_or_default()
    }
}

/// Placement hint for notations, directions and lyrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// No placement given; the renderer decides
    #[default]
    Unspecified,

    /// Above the staff or note
    Above,

    /// Below the staff or note
    Below,
}

impl Placement {
    /// Get the interchange spelling (`None` when unspecified)
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Placement::Unspecified => None,
            Placement::Above => Some("above"),
            Placement::Below => Some("below"),
        }
    }

    /// Parse an interchange spelling
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "above" => Some(Placement::Above),
            "below" => Some(Placement::Below),
            _ => None,
        }
    }
}

impl std::str::FromStr for Placement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid placement: {}", s))
    }
}

crate::api_discrete!(Bool, Placement);
