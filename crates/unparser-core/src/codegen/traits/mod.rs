pub mod emit;

pub use emit::{emit_list, emit_wrapped, Emit, MaybeEmit};
