pub mod artists;
pub mod db;
pub mod defaults;
pub mod error;
pub mod generator;
pub mod shows;
pub mod sources;
pub mod template;
pub mod venues;

pub use generator::Dataset;
pub use generator::Generator;
