// UI components for the single screen
//
// Each component renders into the Rect it is given. Overlays (disclosure
// panel, toast) clear their area first so they sit on top of the content.

pub mod disclosure;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
