//! # Application Status
//!
//! Load status of an application screen, with a nested closed
//! classification for failures.
//!
//! ```text
//! AppStatus
//!  ├── Loading
//!  ├── Error { problem }
//!  │     └── ProblemCode: Network | Timeout | Unknown
//!  └── Ok { data }
//! ```
//!
//! Totality holds on both levels. [`AppHandler`] has [`ProblemHandler`]
//! as a supertrait, so anything able to handle an `AppStatus` has
//! necessarily handled all three problem codes. The registry flattens the
//! nested set into five leaves for registration-time checks.

use serde::{Deserialize, Deserializer, Serialize};

use statuskit_core::{ClosedSet, StatusKitError};

// ─── Problem Code ────────────────────────────────────────────────────

/// Why an application failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemCode {
    /// Connectivity failure.
    Network,
    /// The request did not complete in time.
    Timeout,
    /// Anything not classified above.
    Unknown,
}

impl ProblemCode {
    /// Every problem code, in declaration order.
    pub const ALL: [ProblemCode; 3] = [Self::Network, Self::Timeout, Self::Unknown];

    /// Canonical upper-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Network => "NETWORK",
            Self::Timeout => "TIMEOUT",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Invoke exactly one method of `handler`, chosen by this code.
    pub fn dispatch<H>(self, handler: &mut H) -> H::Output
    where
        H: ProblemHandler + ?Sized,
    {
        match self {
            Self::Network => handler.network(),
            Self::Timeout => handler.timeout(),
            Self::Unknown => handler.unknown(),
        }
    }
}

impl ClosedSet for ProblemCode {
    const SET: &'static str = "ProblemCode";
    const VARIANTS: &'static [&'static str] = &["Network", "Timeout", "Unknown"];

    fn variant(&self) -> &'static str {
        Self::VARIANTS[self.variant_index()]
    }

    fn variant_index(&self) -> usize {
        match self {
            Self::Network => 0,
            Self::Timeout => 1,
            Self::Unknown => 2,
        }
    }
}

impl std::fmt::Display for ProblemCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ProblemCode {
    type Err = StatusKitError;

    /// Parse a problem code, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "network" => Ok(Self::Network),
            "timeout" => Ok(Self::Timeout),
            "unknown" => Ok(Self::Unknown),
            _ => Err(StatusKitError::UnknownProblemCode(s.to_string())),
        }
    }
}

// ─── App Status ──────────────────────────────────────────────────────

/// Load status of an application screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AppStatus {
    /// Still fetching.
    Loading,
    /// Fetching failed.
    Error {
        /// Classified cause.
        problem: ProblemCode,
    },
    /// Data arrived.
    Ok {
        /// Received items, in arrival order.
        data: Vec<String>,
    },
}

/// Wire shape of [`AppStatus`]. `Loading` is an empty struct variant so
/// that extra keys next to its tag are rejected like any other variant's.
#[derive(Deserialize)]
#[serde(tag = "status", rename_all = "snake_case", deny_unknown_fields)]
enum AppStatusRepr {
    Loading {},
    Error { problem: ProblemCode },
    Ok { data: Vec<String> },
}

impl<'de> Deserialize<'de> for AppStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match AppStatusRepr::deserialize(deserializer)? {
            AppStatusRepr::Loading {} => Self::Loading,
            AppStatusRepr::Error { problem } => Self::Error { problem },
            AppStatusRepr::Ok { data } => Self::Ok { data },
        })
    }
}

impl AppStatus {
    /// Build an `Error` status.
    pub fn error(problem: ProblemCode) -> Self {
        Self::Error { problem }
    }

    /// Build an `Ok` status from any sequence of items.
    pub fn ok<I, S>(data: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Ok {
            data: data.into_iter().map(Into::into).collect(),
        }
    }

    /// Canonical upper-case outer name ("LOADING", "ERROR", "OK").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "LOADING",
            Self::Error { .. } => "ERROR",
            Self::Ok { .. } => "OK",
        }
    }

    /// Problem code of an `Error` status.
    pub fn problem(&self) -> Option<ProblemCode> {
        match self {
            Self::Error { problem } => Some(*problem),
            _ => None,
        }
    }

    /// Items of an `Ok` status.
    pub fn data(&self) -> Option<&[String]> {
        match self {
            Self::Ok { data } => Some(data.as_slice()),
            _ => None,
        }
    }

    /// Invoke exactly one method of `handler`, chosen by the active variant
    /// and, for `Error`, by its problem code.
    pub fn dispatch<H>(&self, handler: &mut H) -> H::Output
    where
        H: AppHandler + ?Sized,
    {
        match self {
            Self::Loading => handler.loading(),
            Self::Error { problem } => problem.dispatch(handler),
            Self::Ok { data } => handler.ok(data),
        }
    }

    /// Human-readable description of this status.
    pub fn classify(&self) -> String {
        self.dispatch(&mut Description)
    }
}

impl ClosedSet for AppStatus {
    const SET: &'static str = "AppStatus";
    const VARIANTS: &'static [&'static str] = &[
        "Loading",
        "Error::Network",
        "Error::Timeout",
        "Error::Unknown",
        "Ok",
    ];

    fn variant(&self) -> &'static str {
        Self::VARIANTS[self.variant_index()]
    }

    fn variant_index(&self) -> usize {
        match self {
            Self::Loading => 0,
            Self::Error { problem } => 1 + problem.variant_index(),
            Self::Ok { .. } => 1 + ProblemCode::VARIANTS.len(),
        }
    }
}

impl std::fmt::Display for AppStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.classify())
    }
}

// ─── Handlers ────────────────────────────────────────────────────────

/// One branch per [`ProblemCode`].
pub trait ProblemHandler {
    /// Value produced by every branch.
    type Output;

    /// Branch for `Network`.
    fn network(&mut self) -> Self::Output;

    /// Branch for `Timeout`.
    fn timeout(&mut self) -> Self::Output;

    /// Branch for `Unknown`.
    fn unknown(&mut self) -> Self::Output;
}

/// One branch per [`AppStatus`] leaf.
///
/// The `Error` branch is the [`ProblemHandler`] supertrait.
pub trait AppHandler: ProblemHandler {
    /// Branch for `Loading`.
    fn loading(&mut self) -> Self::Output;

    /// Branch for `Ok`.
    fn ok(&mut self, data: &[String]) -> Self::Output;
}

/// A [`ProblemHandler`] assembled from one closure per code.
pub struct ProblemHandlers<N, T, U> {
    network: N,
    timeout: T,
    unknown: U,
}

impl<N, T, U> ProblemHandlers<N, T, U> {
    /// Bundle one closure per problem code, in declaration order.
    pub fn new<R>(network: N, timeout: T, unknown: U) -> Self
    where
        N: FnMut() -> R,
        T: FnMut() -> R,
        U: FnMut() -> R,
    {
        Self {
            network,
            timeout,
            unknown,
        }
    }
}

impl<N, T, U, R> ProblemHandler for ProblemHandlers<N, T, U>
where
    N: FnMut() -> R,
    T: FnMut() -> R,
    U: FnMut() -> R,
{
    type Output = R;

    fn network(&mut self) -> R {
        (self.network)()
    }

    fn timeout(&mut self) -> R {
        (self.timeout)()
    }

    fn unknown(&mut self) -> R {
        (self.unknown)()
    }
}

/// An [`AppHandler`] assembled from closures, with the `Error` branch
/// given as a complete [`ProblemHandler`].
///
/// ```
/// use statuskit_state::{AppHandlers, AppStatus, ProblemCode, ProblemHandlers};
///
/// let mut retry = AppHandlers::new(
///     || false,
///     ProblemHandlers::new(|| true, || true, || false),
///     |_| false,
/// );
/// assert!(AppStatus::error(ProblemCode::Timeout).dispatch(&mut retry));
/// assert!(!AppStatus::ok(["Data1"]).dispatch(&mut retry));
/// ```
pub struct AppHandlers<L, E, O> {
    loading: L,
    error: E,
    ok: O,
}

impl<L, E, O> AppHandlers<L, E, O> {
    /// Bundle the `Loading` closure, the `Error` handler and the `Ok` closure.
    pub fn new(loading: L, error: E, ok: O) -> Self
    where
        E: ProblemHandler,
        L: FnMut() -> E::Output,
        O: FnMut(&[String]) -> E::Output,
    {
        Self { loading, error, ok }
    }
}

impl<L, E, O> ProblemHandler for AppHandlers<L, E, O>
where
    E: ProblemHandler,
{
    type Output = E::Output;

    fn network(&mut self) -> Self::Output {
        self.error.network()
    }

    fn timeout(&mut self) -> Self::Output {
        self.error.timeout()
    }

    fn unknown(&mut self) -> Self::Output {
        self.error.unknown()
    }
}

impl<L, E, O> AppHandler for AppHandlers<L, E, O>
where
    E: ProblemHandler,
    L: FnMut() -> E::Output,
    O: FnMut(&[String]) -> E::Output,
{
    fn loading(&mut self) -> Self::Output {
        (self.loading)()
    }

    fn ok(&mut self, data: &[String]) -> Self::Output {
        (self.ok)(data)
    }
}

/// Dispatch `status` to `handler`.
pub fn dispatch_app<H>(status: &AppStatus, handler: &mut H) -> H::Output
where
    H: AppHandler + ?Sized,
{
    status.dispatch(handler)
}

/// Human-readable description of an application status.
pub fn classify_app(status: &AppStatus) -> String {
    status.classify()
}

struct Description;

impl ProblemHandler for Description {
    type Output = String;

    fn network(&mut self) -> String {
        "Network issue".to_string()
    }

    fn timeout(&mut self) -> String {
        "Request timed out".to_string()
    }

    fn unknown(&mut self) -> String {
        "Unknown error occurred".to_string()
    }
}

impl AppHandler for Description {
    fn loading(&mut self) -> String {
        "Loading...".to_string()
    }

    fn ok(&mut self, data: &[String]) -> String {
        format!("Data received: [{}]", data.join(", "))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
