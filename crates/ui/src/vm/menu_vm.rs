use services::TopicTile;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuTileVm {
    pub id: String,
    pub title: &'static str,
    pub category: &'static str,
    pub locked: bool,
}

impl From<&TopicTile> for MenuTileVm {
    fn from(tile: &TopicTile) -> Self {
        Self {
            id: tile.id.as_str().to_string(),
            title: tile.title,
            category: tile.category.label(),
            locked: tile.locked,
        }
    }
}

#[must_use]
pub fn map_menu_tiles(tiles: &[TopicTile]) -> Vec<MenuTileVm> {
    tiles.iter().map(MenuTileVm::from).collect()
}
