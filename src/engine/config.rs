/// Options for configuring a [`Pathfinder`](crate::Pathfinder)
///
/// Default options:
/// ```
/// # use waypoint_search::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         expansion_limit: None,
///         size_hint: 64,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// The maximum number of Waypoints a single search may close (defaults to `None`).
    ///
    /// `None`: search until the goal is found or every reachable location is closed.
    ///
    /// `Some(n)`: give up with [`Error::ExpansionLimit`](crate::Error::ExpansionLimit) when
    /// the search would close Waypoint `n + 1`. Useful to bound the time spent on huge Maps.
    pub expansion_limit: Option<usize>,
    /// The number of Waypoints to reserve memory for when a new
    /// [`SearchState`](crate::SearchState) is created (defaults to `64`)
    pub size_hint: usize,
}

impl SearchConfig {
    /// a SearchConfig that never stops a search early
    ///
    /// Values:
    /// ```
    /// # use waypoint_search::SearchConfig;
    /// assert_eq!(
    ///     SearchConfig {
    ///         expansion_limit: None,
    ///         size_hint: 64,
    ///     },
    ///     SearchConfig::UNLIMITED
    /// );
    /// ```
    pub const UNLIMITED: SearchConfig = SearchConfig {
        expansion_limit: None,
        size_hint: 64,
    };

    /// Creates a SearchConfig that closes at most `limit` Waypoints per search
    pub fn with_expansion_limit(limit: usize) -> SearchConfig {
        SearchConfig {
            expansion_limit: Some(limit),
            ..Default::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::UNLIMITED
    }
}
