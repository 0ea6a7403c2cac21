/*
 * ==========================================================================
 * MAPPING-DSL - Type mapping expressions for API code generators
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   Character positions attached to tokens and errors.
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

use serde::{Deserialize, Serialize};

/// A region of a mapping expression.
///
/// Offsets count **characters**, not bytes, so a caret rendered under the
/// expression lines up even when it contains non-ASCII text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Zero-based character offset of the first character.
    pub offset: usize,

    /// Number of characters covered (0 for the end-of-input marker).
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Zero-length span used for the `EOF` token.
    pub fn point(offset: usize) -> Self {
        Self { offset, len: 0 }
    }

    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}
