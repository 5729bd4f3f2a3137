pub mod catalog;
pub mod constants;
pub mod i18n;
pub mod selector;
pub mod session;
pub mod validation;
