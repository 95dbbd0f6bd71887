// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query modules, one per durable record collection.

pub mod configs;
pub mod sessions;
pub mod status;
