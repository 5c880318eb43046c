// Domain value objects representing core business concepts

use std::fmt;

use serde::{Deserialize, Serialize};

/// Production priority tier of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Whether a piece of this priority may be cut from a plate of the
    /// given quality. High-priority pieces only ever go on premium plates;
    /// every other priority is compatible with every quality.
    pub fn compatible_with(self, quality: QualityLevel) -> bool {
        match self {
            Priority::High => quality == QualityLevel::Premium,
            Priority::Medium | Priority::Low => true,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Quality tier of a raw plate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Premium,
    Standard,
    Economy,
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityLevel::Premium => write!(f, "premium"),
            QualityLevel::Standard => write!(f, "standard"),
            QualityLevel::Economy => write!(f, "economy"),
        }
    }
}

/// Comparison sense of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintSense {
    /// Less than or equal (≤)
    LessOrEqual,
    /// Equal (=)
    Equal,
    /// Greater than or equal (≥)
    GreaterOrEqual,
}

impl fmt::Display for ConstraintSense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintSense::LessOrEqual => write!(f, "<="),
            ConstraintSense::Equal => write!(f, "="),
            ConstraintSense::GreaterOrEqual => write!(f, ">="),
        }
    }
}

/// Status of a solve attempt as reported by a MILP backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolveStatus {
    /// Proven optimal assignment
    Optimal,
    /// Best assignment found within the time limit, not proven optimal
    Feasible,
    /// No assignment satisfies the constraints
    Infeasible,
    /// Time limit reached with no incumbent at all
    Timeout,
}

impl SolveStatus {
    /// True when the status carries a usable variable assignment.
    pub fn has_incumbent(self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "optimal"),
            SolveStatus::Feasible => write!(f, "feasible"),
            SolveStatus::Infeasible => write!(f, "infeasible"),
            SolveStatus::Timeout => write!(f, "timeout"),
        }
    }
}

/// Solver backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverBackend {
    /// Automatically select a backend
    Auto,
    /// COIN-OR CBC solver
    CoinCbc,
    /// HiGHS solver
    Highs,
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverBackend::Auto => write!(f, "auto"),
            SolverBackend::CoinCbc => write!(f, "COIN-OR CBC"),
            SolverBackend::Highs => write!(f, "HiGHS"),
        }
    }
}
