// Components module - reusable UI building blocks
//
// Shell components are rendered on every frame:
// - Title bar: app name, loading spinner
// - Search bar: name filter input
// - Card grid: the filtered view
// - Pager bar: prev / page counter / next
// - Status bar: fetch state, key hints
//
// The detail panel renders inside the detail modal; the logs panel is
// optional (`L`).

pub mod card_grid;
pub mod detail_panel;
pub mod formatters;
pub mod logs_panel;
pub mod pager_bar;
pub mod scrollbar;
pub mod search_bar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use card_grid::CardGrid;
pub use detail_panel::DetailPanel;
pub use logs_panel::LogsPanel;
pub use toast::Toast;

pub use formatters::format_number;
