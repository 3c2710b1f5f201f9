pub mod dedup;
pub mod mutations;
pub mod optimistic;

pub use dedup::{dedup_key, InFlight, MutationDeduper};
pub use mutations::{CartLineInput, CartLineMutation, CartMutationRequest};
pub use optimistic::CartView;
