pub mod editor;
pub mod error;
pub mod preview;
pub mod route;
pub mod selection;
pub mod session;
pub mod shared_session;
pub mod solution;
pub mod validator;

#[cfg(test)]
pub(crate) mod test_utils;
