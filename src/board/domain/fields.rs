//! Enumerated task field values: priority and assignee roles.

use super::{ParsePriorityError, ParseRoleError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task importance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Default priority for new tasks.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Fixed roster of roles a task can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Frontend Developer.
    FrontendDeveloper,
    /// Backend Developer.
    BackendDeveloper,
    /// UI/UX Designer.
    UiUxDesigner,
    /// Product Manager.
    ProductManager,
    /// Product Owner.
    ProductOwner,
    /// QA Engineer.
    QaEngineer,
    /// `DevOps` Engineer.
    #[serde(rename = "devops-engineer")]
    DevOpsEngineer,
}

impl Role {
    /// Every role in roster order.
    pub const ALL: [Self; 7] = [
        Self::FrontendDeveloper,
        Self::BackendDeveloper,
        Self::UiUxDesigner,
        Self::ProductManager,
        Self::ProductOwner,
        Self::QaEngineer,
        Self::DevOpsEngineer,
    ];

    /// Returns the kebab-case slug.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FrontendDeveloper => "frontend-developer",
            Self::BackendDeveloper => "backend-developer",
            Self::UiUxDesigner => "ui-ux-designer",
            Self::ProductManager => "product-manager",
            Self::ProductOwner => "product-owner",
            Self::QaEngineer => "qa-engineer",
            Self::DevOpsEngineer => "devops-engineer",
        }
    }

    /// Returns the human-readable role name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FrontendDeveloper => "Frontend Developer",
            Self::BackendDeveloper => "Backend Developer",
            Self::UiUxDesigner => "UI/UX Designer",
            Self::ProductManager => "Product Manager",
            Self::ProductOwner => "Product Owner",
            Self::QaEngineer => "QA Engineer",
            Self::DevOpsEngineer => "DevOps Engineer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    /// Accepts either the slug or the display name, ignoring case.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|role| {
                role.as_str().eq_ignore_ascii_case(trimmed)
                    || role.display_name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ParseRoleError(value.to_owned()))
    }
}
