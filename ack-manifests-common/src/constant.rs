// SPDX-FileCopyrightText: 2025 Timothy Pogue
//
// SPDX-License-Identifier: ISC

/// Prefix for environment variables overriding configuration values,
/// joined to keys with `__` (e.g. `ACK_MANIFESTS__RENDER__DEFAULT_NAMESPACE`).
pub static ENV_PREFIX: &str = "ACK_MANIFESTS";
