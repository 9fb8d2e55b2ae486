pub mod formset_state;

pub use formset_state::*;
