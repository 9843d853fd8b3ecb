//! Block Commands
//!
//! Act as the host for one block instance: show the configuration table,
//! apply an edit, render, reset.

use anyhow::{anyhow, bail, Context, Result};
use socialmedia_core::{
    Block, BlockKind, BlockSetting, Catalog, ConfigStore, FollowBlock, FollowSetting,
    FormElement, PageUrl, SharingBlock, ShareSetting,
};
use tracing::info;

use crate::config::CliConfig;
use crate::display;

/// A requested change to one platform.
#[derive(Debug, Clone, Default)]
pub struct PlatformChange {
    pub link: Option<String>,
    pub enabled: Option<bool>,
    pub weight: Option<i32>,
}

fn load<S: BlockSetting>(config: &CliConfig) -> Result<Block<S, Catalog>> {
    Block::load(&config.store(), &config.block_id, config.catalog()).with_context(|| {
        format!(
            "Failed to load {} block '{}'",
            S::KIND,
            config.block_id
        )
    })
}

fn save<S: BlockSetting>(config: &CliConfig, block: &Block<S, Catalog>) -> Result<()> {
    block
        .save(&config.store(), &config.block_id)
        .with_context(|| format!("Failed to save {} block '{}'", S::KIND, config.block_id))
}

/// Shows the configuration table.
pub fn form(config: &CliConfig, kind: BlockKind) -> Result<()> {
    let form = match kind {
        BlockKind::Follow => load::<FollowSetting>(config)?.block_form(),
        BlockKind::Share => load::<ShareSetting>(config)?.block_form(),
    };

    println!("Block: {} ({})", config.block_id, kind);
    println!();
    display::display_form(&form);
    Ok(())
}

/// Changes one platform and saves the block.
pub fn set(config: &CliConfig, kind: BlockKind, platform: &str, change: &PlatformChange) -> Result<()> {
    match kind {
        BlockKind::Follow => {
            if change.enabled.is_some() {
                bail!("--enabled applies to share blocks; use --link for follow blocks");
            }
            let mut block: FollowBlock = load(config)?;
            edit(&mut block, platform, change, |element| {
                if let (FormElement::TextField { value, .. }, Some(link)) = (element, &change.link) {
                    *value = link.clone();
                }
            })?;
            save(config, &block)?;
        }
        BlockKind::Share => {
            if change.link.is_some() {
                bail!("--link applies to follow blocks; use --enabled for share blocks");
            }
            let mut block: SharingBlock = load(config)?;
            edit(&mut block, platform, change, |element| {
                if let (FormElement::Checkbox { value }, Some(enabled)) = (element, change.enabled) {
                    *value = enabled;
                }
            })?;
            save(config, &block)?;
        }
    }

    info!(kind = %kind, platform, block = %config.block_id, "platform updated");
    display::success(&format!("Updated {} in {} block '{}'", platform, kind, config.block_id));
    Ok(())
}

/// Edits one row of the block's form and submits the whole form back, the
/// way a host round-trips a table form.
fn edit<S, F>(
    block: &mut Block<S, Catalog>,
    platform: &str,
    change: &PlatformChange,
    set_value: F,
) -> Result<()>
where
    S: BlockSetting,
    F: FnOnce(&mut FormElement),
{
    let mut form = block.block_form();
    let row = form.row_mut(platform).ok_or_else(|| {
        anyhow!(
            "Unknown {} platform: {} (see 'socialmedia platforms {}')",
            S::KIND,
            platform,
            S::KIND
        )
    })?;

    if let Some(weight) = change.weight {
        row.weight = weight;
    }
    set_value(&mut row.element);

    block.block_submit(&form.submission::<S>());
    Ok(())
}

/// Renders the block and prints the output as JSON.
pub fn render(config: &CliConfig, kind: BlockKind, page_url: Option<&str>) -> Result<()> {
    let output = match kind {
        BlockKind::Follow => load::<FollowSetting>(config)?.build(),
        BlockKind::Share => {
            let page_url =
                page_url.ok_or_else(|| anyhow!("--page-url is required to render a share block"))?;
            load::<ShareSetting>(config)?.build(&PageUrl::new(page_url))
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Deletes the saved configuration, restoring defaults.
pub fn reset(config: &CliConfig, kind: BlockKind) -> Result<()> {
    config
        .store()
        .delete(kind, &config.block_id)
        .with_context(|| format!("Failed to reset {} block '{}'", kind, config.block_id))?;

    display::success(&format!("Reset {} block '{}' to defaults", kind, config.block_id));
    Ok(())
}
