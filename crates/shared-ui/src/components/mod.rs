// Standalone components (no external primitives)
pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod search_bar;

// Navigation & layout (depends on button styling conventions)
pub mod navbar;
pub mod sidebar;

// Re-exports for convenience
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form_select::*;
pub use input::*;
pub use navbar::*;
pub use page_header::*;
pub use search_bar::*;
pub use sidebar::*;
