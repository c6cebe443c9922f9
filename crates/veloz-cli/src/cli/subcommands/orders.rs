use clap::{Args, Subcommand};

/// Transport order commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OrderCommands {
    /// List orders visible to the logged-in identity.
    List {
        /// Match sender, recipient, origin, destination, or status.
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Create an order.
    Create(OrderCreateArgs),
    /// Delete an order by ID.
    Delete { id: u64 },
    /// Show the row actions offered on an order.
    Actions { id: u64 },
}

#[derive(Clone, Debug, Args)]
pub struct OrderCreateArgs {
    #[arg(long)]
    pub sender_tax_id: Option<String>,
    #[arg(long)]
    pub sender_name: Option<String>,
    #[arg(long)]
    pub sender_phone: Option<String>,
    #[arg(long)]
    pub recipient_tax_id: Option<String>,
    #[arg(long)]
    pub recipient_name: Option<String>,
    #[arg(long)]
    pub recipient_phone: Option<String>,
    #[arg(long)]
    pub origin: Option<String>,
    #[arg(long)]
    pub destination: Option<String>,
    #[arg(long)]
    pub cargo_detail: Option<String>,
    /// Efectivo, Transferencia, Cheque, Tarjeta, or Credito.
    #[arg(long)]
    pub payment_method: Option<String>,
    #[arg(long)]
    pub total_amount: Option<String>,
    /// Assign to a worker (requires orders.assign_worker).
    #[arg(long)]
    pub worker_id: Option<String>,
}

impl OrderCreateArgs {
    /// Form field names paired with the values given on the command line.
    pub fn fields(&self) -> [(&'static str, Option<&str>); 12] {
        [
            ("sender_tax_id", self.sender_tax_id.as_deref()),
            ("sender_name", self.sender_name.as_deref()),
            ("sender_phone", self.sender_phone.as_deref()),
            ("recipient_tax_id", self.recipient_tax_id.as_deref()),
            ("recipient_name", self.recipient_name.as_deref()),
            ("recipient_phone", self.recipient_phone.as_deref()),
            ("origin", self.origin.as_deref()),
            ("destination", self.destination.as_deref()),
            ("cargo_detail", self.cargo_detail.as_deref()),
            ("payment_method", self.payment_method.as_deref()),
            ("total_amount", self.total_amount.as_deref()),
            ("assigned_worker_id", self.worker_id.as_deref()),
        ]
    }
}
