pub mod element;
pub mod event;
pub mod index;
pub mod render;

pub use element::{find_element, find_element_mut, Content, Element};
pub use event::{Event, MouseButton};
pub use index::{index_subtree, SubElementMap};
pub use render::render_to_string;
