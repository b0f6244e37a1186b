pub mod deeplink;
pub mod environment;
pub mod merchant;
pub mod order;
pub mod ports;
pub mod reference;
pub mod status;
