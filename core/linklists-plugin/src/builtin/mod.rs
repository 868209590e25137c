//! Plugins shipped with the crate.

mod displays;
mod manual_links;
mod more_links;
mod no_results;

pub use displays::{TeaserDisplay, TitleDisplay};
pub use manual_links::{CACHE_TAG as MANUAL_LINKS_CACHE_TAG, ManualLink, ManualLinksSource};
pub use more_links::{CustomLink, SourceOverviewLink};
pub use no_results::{HideList, TextMessage};

use crate::error::PluginResult;
use crate::registry::PluginRegistry;

pub(crate) fn register_all(registry: &mut PluginRegistry) -> PluginResult<()> {
    registry.sources_mut().register(ManualLinksSource::definition())?;

    registry.displays_mut().register(TitleDisplay::definition())?;
    registry.displays_mut().register(TeaserDisplay::definition())?;

    registry
        .no_results_behaviours_mut()
        .register(TextMessage::definition())?;
    registry
        .no_results_behaviours_mut()
        .register(HideList::definition())?;

    registry.more_links_mut().register(CustomLink::definition())?;
    registry
        .more_links_mut()
        .register(SourceOverviewLink::definition())?;
    Ok(())
}
