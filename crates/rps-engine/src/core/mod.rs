pub use self::{hand::*, round::*};

pub(crate) mod hand;
pub(crate) mod round;
