pub mod badge;
pub mod button;
pub mod calendar;
pub mod card;
pub mod divider;
pub mod glare_hover;
pub mod input;
pub mod progress;
pub mod skeleton;

pub use badge::*;
pub use button::*;
pub use calendar::*;
pub use card::*;
pub use divider::*;
pub use glare_hover::*;
pub use input::*;
pub use progress::*;
pub use skeleton::*;
