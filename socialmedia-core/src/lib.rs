// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Socialmedia Core Library
//!
//! Configurable "follow us" and "share this page" link blocks for a
//! content management host. The host owns persistence, page resolution
//! and markup; this crate owns the platform registry, per-platform
//! settings, ordering and share URLs.

pub mod block;
pub mod configurator;
pub mod form;
pub mod i18n;
pub mod order;
pub mod platform;
pub mod render;
pub mod settings;
pub mod share;
pub mod store;

pub use block::{Block, BlockSetting, FollowBlock, SharingBlock};
pub use configurator::{
    EditSubmission, FollowConfigurator, LinkListConfigurator, PlatformEdit, ShareConfigurator,
};
pub use form::{EditForm, EditRow, FormElement, FormField};
pub use i18n::{Catalog, Locale, Translator};
pub use order::{sort_by_weight, sort_by_weight_with, Weighted};
pub use platform::{BlockKind, Platform, PlatformRegistry, UnknownBlockKind};
pub use render::{BlockOutput, CurrentPage, PageUrl, RenderEntry};
pub use settings::{FollowSetting, PlatformSetting, ShareSetting};
pub use share::{share_prefix, share_url};
pub use store::{ConfigStore, FileStore, MemoryStore, StoreError};
