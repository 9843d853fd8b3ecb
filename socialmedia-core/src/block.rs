// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Social Media Blocks
//!
//! The host-facing lifecycle of both blocks: default configuration, the
//! edit form, form submission, and the final build.
//!
//! ```
//! use socialmedia_core::{Catalog, EditSubmission, FollowBlock, FollowSetting};
//!
//! let mut block = FollowBlock::new(Catalog::default());
//! let unchanged = block.block_form().submission::<FollowSetting>();
//! block.block_submit(&unchanged);
//! assert!(block.build().entries.is_empty());
//!
//! let edits = EditSubmission::new().with("facebook", "https://facebook.com/acme".to_string(), 0);
//! block.block_submit(&edits);
//! assert_eq!(block.build().entries.len(), 1);
//! ```

use tracing::debug;

use crate::configurator::{EditSubmission, LinkListConfigurator};
use crate::form::{EditForm, FormField};
use crate::i18n::{Catalog, Translator};
use crate::platform::{BlockKind, PlatformRegistry};
use crate::render::{render_follow, render_share, BlockOutput, CurrentPage};
use crate::settings::{FollowSetting, ShareSetting};
use crate::store::{ConfigStore, StoreError};

/// A configurable link-list block.
#[derive(Debug, Clone)]
pub struct Block<S: FormField, T: Translator = Catalog> {
    configurator: LinkListConfigurator<S>,
    translator: T,
}

/// The "follow us" block.
pub type FollowBlock<T = Catalog> = Block<FollowSetting, T>;

/// The "share this page" block.
pub type SharingBlock<T = Catalog> = Block<ShareSetting, T>;

/// Block kinds known to the setting types.
pub trait BlockSetting: FormField {
    const KIND: BlockKind;
    const ADMIN_LABEL: &'static str;
}

impl BlockSetting for FollowSetting {
    const KIND: BlockKind = BlockKind::Follow;
    const ADMIN_LABEL: &'static str = "Social media block";
}

impl BlockSetting for ShareSetting {
    const KIND: BlockKind = BlockKind::Share;
    const ADMIN_LABEL: &'static str = "Social media sharing block";
}

impl<S: BlockSetting, T: Translator> Block<S, T> {
    /// Creates a block with the default configuration.
    pub fn new(translator: T) -> Self {
        Self {
            configurator: Self::default_configuration(),
            translator,
        }
    }

    /// Creates a block from an existing configuration.
    pub fn with_configuration(translator: T, configurator: LinkListConfigurator<S>) -> Self {
        Self {
            configurator,
            translator,
        }
    }

    /// Loads a block instance from a store, or defaults if never saved.
    pub fn load(
        store: &dyn ConfigStore,
        block_id: &str,
        translator: T,
    ) -> Result<Self, StoreError> {
        let registry = PlatformRegistry::for_kind(S::KIND);
        let configurator = match store.load(S::KIND, block_id)? {
            Some(record) => LinkListConfigurator::from_record(registry, &record),
            None => {
                debug!(kind = %S::KIND, block = block_id, "no saved configuration");
                LinkListConfigurator::defaults(registry)
            }
        };
        Ok(Self::with_configuration(translator, configurator))
    }

    /// Persists the block instance's configuration.
    pub fn save(&self, store: &dyn ConfigStore, block_id: &str) -> Result<(), StoreError> {
        store.save(S::KIND, block_id, &self.configurator.to_record())
    }

    /// Every platform disabled at weight 0.
    pub fn default_configuration() -> LinkListConfigurator<S> {
        LinkListConfigurator::defaults(PlatformRegistry::for_kind(S::KIND))
    }

    /// Returns the block kind.
    pub fn kind(&self) -> BlockKind {
        S::KIND
    }

    /// Returns the translated administrative label.
    pub fn admin_label(&self) -> String {
        self.translator.translate(S::ADMIN_LABEL, &[])
    }

    /// Returns the current configuration.
    pub fn configuration(&self) -> &LinkListConfigurator<S> {
        &self.configurator
    }

    /// Builds the configuration table.
    pub fn block_form(&self) -> EditForm {
        EditForm::build(&self.configurator, &self.translator)
    }

    /// Applies submitted form values.
    pub fn block_submit(&mut self, edits: &EditSubmission<S::Value>) {
        self.configurator.apply_edits(edits);
    }
}

impl<T: Translator> Block<FollowSetting, T> {
    /// Builds the ordered follow links.
    pub fn build(&self) -> BlockOutput {
        render_follow(&self.configurator, &self.translator)
    }
}

impl<T: Translator> Block<ShareSetting, T> {
    /// Builds the ordered share links for the current page.
    pub fn build(&self, page: &dyn CurrentPage) -> BlockOutput {
        render_share(&self.configurator, &self.translator, page)
    }
}
