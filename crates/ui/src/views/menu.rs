use dioxus::prelude::*;
use tracing::warn;

use helix_core::model::TopicId;

use crate::views::shell::use_session;
use crate::vm::{MenuTileVm, map_menu_tiles};

#[component]
pub fn MenuView() -> Element {
    let session = use_session();
    let tiles = map_menu_tiles(&session.read().menu_tiles());
    let xp = session.read().xp();

    rsx! {
        div { class: "page menu",
            header { class: "menu-header",
                h1 { "HELIX" }
                p { class: "tagline", "Master the pattern. Unlock the universe." }
                p { class: "xp-badge", "XP: {xp}" }
            }
            div { class: "topic-grid",
                for tile in tiles {
                    TopicTileButton { key: "{tile.id}", tile }
                }
            }
        }
    }
}

#[component]
fn TopicTileButton(tile: MenuTileVm) -> Element {
    let mut session = use_session();
    let topic_id = tile.id.clone();
    let class = if tile.locked {
        "topic-tile topic-tile--locked"
    } else {
        "topic-tile"
    };
    let lock_label = if tile.locked { "Locked" } else { "Open" };

    rsx! {
        button {
            class,
            r#type: "button",
            disabled: tile.locked,
            onclick: move |_| {
                let id = TopicId::new(topic_id.clone());
                if let Err(err) = session.write().open_topic(&id) {
                    warn!(error = %err, "topic not opened");
                }
            },
            div { class: "topic-tile-meta",
                span { class: "topic-category", "{tile.category}" }
                span { class: "topic-lock", "{lock_label}" }
            }
            h3 { "{tile.title}" }
        }
    }
}
