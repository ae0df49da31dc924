/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;
use std::time::Duration;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

/// Rows fetched by lookups that must match exactly one record. A second row
/// is enough to detect a broken uniqueness invariant.
pub const UNIQUE_LOOKUP_LIMIT: u64 = 2;

pub const DATABASE_MIN_CONNECTIONS: u32 = 5;
pub const DATABASE_TIMEOUT: Duration = Duration::from_secs(8);
