// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform Support
//!
//! This module provides:
//! - The two block kinds (follow links and share links)
//! - The fixed, ordered registry of platforms each block kind offers

mod registry;

pub use registry::{BlockKind, Platform, PlatformRegistry, UnknownBlockKind};
