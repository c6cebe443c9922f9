pub mod clients;
pub mod orders;
pub mod settings;

pub use clients::{ClientCommands, ClientCreateArgs};
pub use orders::{OrderCommands, OrderCreateArgs};
pub use settings::{CompanyArgs, PasswordArgs, ProfileArgs, SettingsCommands};
