/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

use super::types::Cli;

/// Who may call a public operation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessPolicy {
    /// No authorization at all.
    #[default]
    AllowAny,
    /// Operation switched off.
    Deny,
}

impl AccessPolicy {
    pub fn permits(self) -> bool {
        matches!(self, AccessPolicy::AllowAny)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    AnchorSettings,
    AnchorProjects,
    ProjectAnchor,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::AnchorSettings => "anchor_settings",
            Operation::AnchorProjects => "anchor_projects",
            Operation::ProjectAnchor => "project_anchor",
        };

        f.write_str(name)
    }
}

impl Cli {
    pub fn access_policy(&self, operation: Operation) -> AccessPolicy {
        match operation {
            Operation::AnchorSettings => self.anchor_settings_access,
            Operation::AnchorProjects => self.anchor_projects_access,
            Operation::ProjectAnchor => self.project_anchor_access,
        }
    }
}
