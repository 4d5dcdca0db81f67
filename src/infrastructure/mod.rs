pub mod form_errors;
pub mod navigation;

pub use form_errors::FormErrorsStore;
pub use navigation::ChannelNavigator;
