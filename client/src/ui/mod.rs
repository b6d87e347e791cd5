pub mod context;
pub mod layout;
pub mod screens;
pub mod style;
pub mod widget;

pub use context::{DrawCmd, UiContext};
pub use layout::VBox;
pub use widget::{Button, Label, UiResponse, Widget};
pub use screens::{FpsMeter, hud, main_menu, pause_menu};
