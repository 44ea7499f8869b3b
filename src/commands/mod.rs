pub mod collect;
pub mod config;
pub mod drivers;
pub mod facts;

pub use collect::handle_collect_command;
pub use config::handle_config_command;
pub use drivers::handle_drivers_command;
pub use facts::handle_facts_command;
