//! Product detail overlay.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::{detail_layout, render_detail_dialog, DetailLayout};
pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::DetailDialogState;
