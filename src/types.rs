pub mod annotation;
pub mod annotation_kind;
pub mod document;
pub mod span;
pub mod text_match;
