mod encode;
mod events;
mod timeline;

pub use self::encode::{encode, Message};
pub use self::events::Event;
pub use self::timeline::Timeline;
