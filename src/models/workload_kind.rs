//! Workload controller kind definitions
//!
//! Centralizes the controller kinds that generate Pods from a template, so the
//! graph builder never matches on raw strings.

use std::fmt;
use std::str::FromStr;

/// Kind string of the worker objects controllers generate
pub const POD_KIND: &str = "Pod";

/// Controllers whose children are Pods built entirely from `spec.template`
///
/// CronJob is deliberately absent: its children are Jobs, not Pods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerKind {
    Deployment,
    StatefulSet,
    ReplicaSet,
    DaemonSet,
    Job,
}

impl ControllerKind {
    /// Get the manifest `kind` string
    pub fn as_str(&self) -> &'static str {
        match self {
            ControllerKind::Deployment => "Deployment",
            ControllerKind::StatefulSet => "StatefulSet",
            ControllerKind::ReplicaSet => "ReplicaSet",
            ControllerKind::DaemonSet => "DaemonSet",
            ControllerKind::Job => "Job",
        }
    }

    /// Try to parse a manifest kind, returning None for non-controller kinds
    pub fn parse_optional(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Get all controller kinds
    pub fn all() -> &'static [Self] {
        &[
            ControllerKind::Deployment,
            ControllerKind::StatefulSet,
            ControllerKind::ReplicaSet,
            ControllerKind::DaemonSet,
            ControllerKind::Job,
        ]
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ControllerKind> for String {
    fn from(kind: ControllerKind) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for ControllerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Deployment" => Ok(ControllerKind::Deployment),
            "StatefulSet" => Ok(ControllerKind::StatefulSet),
            "ReplicaSet" => Ok(ControllerKind::ReplicaSet),
            "DaemonSet" => Ok(ControllerKind::DaemonSet),
            "Job" => Ok(ControllerKind::Job),
            _ => Err(format!("Not a pod controller kind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional() {
        assert_eq!(
            ControllerKind::parse_optional("Deployment"),
            Some(ControllerKind::Deployment)
        );
        assert_eq!(ControllerKind::parse_optional("Job"), Some(ControllerKind::Job));
        assert_eq!(ControllerKind::parse_optional("CronJob"), None);
        assert_eq!(ControllerKind::parse_optional("Pod"), None);
        // Kinds are case-sensitive in manifests
        assert_eq!(ControllerKind::parse_optional("deployment"), None);
    }

    #[test]
    fn test_all_round_trip_through_as_str() {
        assert_eq!(ControllerKind::all().len(), 5);
        for kind in ControllerKind::all() {
            assert_eq!(ControllerKind::parse_optional(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ControllerKind::StatefulSet), "StatefulSet");
        let s: String = ControllerKind::DaemonSet.into();
        assert_eq!(s, "DaemonSet");
    }
}
