mod complete_vm;
mod menu_vm;
mod practice_vm;
mod time_fmt;

pub use complete_vm::{CompleteVm, map_complete};
pub use menu_vm::{MenuTileVm, map_menu_tiles};
pub use practice_vm::{BookworkVm, PracticeVm, map_practice};
pub use time_fmt::format_elapsed;
