//! Beam entities: nodes, fixities, section properties and the elements between nodes

mod element;
mod fixity;
mod node;
mod section;

pub use element::Element;
pub use fixity::{Fixity, FixityInput, DOF_PER_NODE};
pub use node::Node;
pub use section::SectionProperties;
