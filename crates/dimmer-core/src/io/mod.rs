pub mod profile_io;
