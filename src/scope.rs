/*
 * ==========================================================================
 * MAPPING-DSL - Type mapping expressions for API code generators
 * ==========================================================================
 *
 * File:      scope.rs
 * Purpose:   Where a mapping applies, as supplied by the caller.
 *
 * Author:    Sam Wilcox
 * Email:     sam@pawx-lang.com
 * GitHub:    https://github.com/samwilcox/mapping-dsl
 *
 * License:
 * This file is part of the MAPPING-DSL project.
 *
 * MAPPING-DSL is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mapping::Mapping;

/// The applicability context of a mapping.
///
/// The parser never looks at the scope; it is carried alongside the
/// resulting [`Mapping`] so the registry that indexes mappings can file it
/// under the right key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "kebab-case")]
pub enum Scope {
    #[default]
    Global,

    /// All endpoints of one path, e.g. `/pets/{id}`.
    Path { path: String },

    /// One HTTP method of one path.
    PathMethod { path: String, method: String },

    /// Parameters with the given name.
    Parameter { name: String },
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => f.write_str("global"),
            Scope::Path { path } => write!(f, "path {}", path),
            Scope::PathMethod { path, method } => write!(f, "path {} {}", path, method),
            Scope::Parameter { name } => write!(f, "parameter {}", name),
        }
    }
}

/// A parsed mapping together with the scope it was declared in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopedMapping {
    pub scope: Scope,
    pub mapping: Mapping,
}
