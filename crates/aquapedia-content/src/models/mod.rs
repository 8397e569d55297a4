pub mod locale;
pub mod translation;

pub use locale::{Locale, UnknownLocale};
pub use translation::{Translation, for_locale};
