mod bundle;
mod locales;
mod render;

pub use bundle::{current_lang, set_lang};
pub use locales::{LocaleMeta, locales};
pub use render::{attribute_label, t, tc, tr, value_text};
