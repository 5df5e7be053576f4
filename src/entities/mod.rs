pub mod command;

pub use command::Entity as Command;
