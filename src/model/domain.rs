//! Exercise domains: the scripted curricula a run can follow.

use std::fmt;

/// Which scripted curriculum is active.
///
/// Fixed for the lifetime of a run; changing domain means aborting first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExerciseDomain {
    /// Container tooling (`docker`).
    Docker,

    /// Orchestration (`kubectl`).
    Kubernetes,

    /// Relational queries (`psql` and SQL).
    PostgreSql,

    /// Version control (`git`).
    Git,

    /// Core OS commands.
    Linux,
}

impl ExerciseDomain {
    /// Every domain, in selector order.
    pub const ALL: [Self; 5] = [
        Self::Docker,
        Self::Kubernetes,
        Self::PostgreSql,
        Self::Git,
        Self::Linux,
    ];

    /// Upper-case tag used in briefings (`MISSION: DOCKER PROTOCOLS`).
    pub fn tag(self) -> &'static str {
        match self {
            Self::Docker => "DOCKER",
            Self::Kubernetes => "KUBERNETES",
            Self::PostgreSql => "POSTGRESQL",
            Self::Git => "GIT",
            Self::Linux => "LINUX",
        }
    }

    /// File-name and table-key slug.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Docker => "docker",
            Self::Kubernetes => "kubernetes",
            Self::PostgreSql => "postgresql",
            Self::Git => "git",
            Self::Linux => "linux",
        }
    }

    /// Inverse of [`slug`](Self::slug).
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.slug() == slug)
    }

    /// Selector heading.
    pub fn label(self) -> &'static str {
        match self {
            Self::Docker => "CONTAINER PROTOCOLS",
            Self::Kubernetes => "ORCHESTRATION",
            Self::PostgreSql => "DATA ARCHIVES",
            Self::Git => "VERSION CONTROL",
            Self::Linux => "CORE KERNEL",
        }
    }

    /// Selector subheading.
    pub fn description(self) -> &'static str {
        match self {
            Self::Docker => "ISOLATION MODULES",
            Self::Kubernetes => "CLUSTER MANAGEMENT",
            Self::PostgreSql => "QUERY LANGUAGE",
            Self::Git => "TIMELINE MANIPULATION",
            Self::Linux => "SYSTEM OPERATIONS",
        }
    }
}

impl fmt::Display for ExerciseDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
