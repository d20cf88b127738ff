use helix_core::model::{Category, TopicId, catalog};

use super::service::SessionService;
use crate::progression::Progression;

/// Presentation-agnostic menu entry for one catalog topic.
///
/// The UI decides how a locked tile looks; no strings are pre-formatted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicTile {
    pub id: TopicId,
    pub title: &'static str,
    pub category: Category,
    pub position: usize,
    pub locked: bool,
}

/// Catalog order, with lock state taken from `progression`.
#[must_use]
pub fn menu_tiles(progression: &Progression) -> Vec<TopicTile> {
    catalog()
        .iter()
        .map(|topic| TopicTile {
            id: topic.id().clone(),
            title: topic.title(),
            category: topic.category(),
            position: topic.position(),
            locked: !progression.is_unlocked(topic.position()),
        })
        .collect()
}

impl SessionService {
    #[must_use]
    pub fn menu_tiles(&self) -> Vec<TopicTile> {
        menu_tiles(self.progression())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_follow_catalog_order() {
        let tiles = menu_tiles(&Progression::new(catalog().len()));
        assert_eq!(tiles.len(), catalog().len());
        assert_eq!(tiles[0].id.as_str(), "expand_brackets");
        assert_eq!(tiles[14].id.as_str(), "averages_mean");
        assert!(tiles.iter().enumerate().all(|(idx, tile)| tile.position == idx));
    }

    #[test]
    fn only_watermark_and_below_are_open() {
        let tiles = menu_tiles(&Progression::with_unlocked(catalog().len(), 2));
        let open: Vec<_> = tiles.iter().filter(|tile| !tile.locked).collect();
        assert_eq!(open.len(), 3);
        assert!(tiles[3].locked);
    }
}
