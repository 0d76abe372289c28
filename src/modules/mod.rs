pub mod identity;
pub mod provider;
pub mod selection;
pub mod session;
pub mod store;
