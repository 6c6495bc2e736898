pub mod batch;
pub mod consts;
pub mod encode;
pub mod error;
pub mod inspect;
pub mod io;
pub mod layout;
pub mod locate;
pub mod mutate;
