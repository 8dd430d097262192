pub mod team_directory;

pub use team_directory::TeamDirectory;
