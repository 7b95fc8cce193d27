pub mod source;
pub mod data_processor;
pub mod membership;
pub mod presentation;
