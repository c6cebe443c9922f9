use clap::{Args, Subcommand};

/// Client commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ClientCommands {
    /// List clients.
    List {
        /// Match business or contact name (case-insensitive) or mobile number.
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Register a client.
    Create(ClientCreateArgs),
    /// Delete a client by ID.
    Delete { id: u64 },
}

/// Values left out keep the form default; required ones are checked on submit.
#[derive(Clone, Debug, Args)]
pub struct ClientCreateArgs {
    #[arg(long)]
    pub business_name: Option<String>,
    #[arg(long)]
    pub tax_id: Option<String>,
    #[arg(long)]
    pub contact_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub mobile: Option<String>,
    #[arg(long)]
    pub landline: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub postal_code: Option<String>,
}

impl ClientCreateArgs {
    /// Form field names paired with the values given on the command line.
    pub fn fields(&self) -> [(&'static str, Option<&str>); 9] {
        [
            ("business_name", self.business_name.as_deref()),
            ("tax_id", self.tax_id.as_deref()),
            ("contact_name", self.contact_name.as_deref()),
            ("email", self.email.as_deref()),
            ("mobile", self.mobile.as_deref()),
            ("landline", self.landline.as_deref()),
            ("address", self.address.as_deref()),
            ("city", self.city.as_deref()),
            ("postal_code", self.postal_code.as_deref()),
        ]
    }
}
