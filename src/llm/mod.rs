pub mod interface;
pub mod openai_compatible;
pub mod factory;

pub use interface::{Message, StatelessLlm};
pub use factory::create_llm;
