mod apply;
mod list;
mod preview;
mod status;

pub use apply::run_apply;
pub use list::run_list;
pub use preview::run_preview;
pub use status::run_status;
