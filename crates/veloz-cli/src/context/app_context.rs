use anyhow::Context;
use veloz_api::{ApiClient, ApiError, HttpAuthenticator, MemoryStore, SettingsStore};
use veloz_auth::{Authenticator, SessionStore, StaticDirectory};
use veloz_config::{ApiMode, AuthSource, VelozConfig};
use veloz_core::entities::{Client, NewClient, NewOrder, Order};
use veloz_core::store::RecordStore;

pub type OrderStore = dyn RecordStore<Order, Draft = NewOrder, Error = ApiError>;
pub type ClientStore = dyn RecordStore<Client, Draft = NewClient, Error = ApiError>;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: VelozConfig,
    pub sessions: SessionStore,
    pub settings: SettingsStore,
    pub orders: Box<OrderStore>,
    pub clients: Box<ClientStore>,
}

impl AppContext {
    /// Open the session and settings files and pick the record stores for
    /// the configured API mode.
    pub fn init(config: VelozConfig) -> anyhow::Result<Self> {
        let session_dir = config
            .session
            .resolve_dir()
            .context("failed to resolve session directory")?;
        let sessions = SessionStore::new(&session_dir, config.session.storage_key.as_str());
        let settings = SettingsStore::new(&session_dir);

        let (orders, clients): (Box<OrderStore>, Box<ClientStore>) = match config.api.mode {
            ApiMode::Remote => {
                let client = ApiClient::new(&config.api).context("failed to build HTTP client")?;
                tracing::debug!(base_url = client.base_url(), "using backend API");
                (Box::new(client.clone()), Box::new(client))
            }
            ApiMode::Demo => {
                tracing::debug!("using in-memory demo records");
                (
                    Box::new(MemoryStore::<Order>::demo()),
                    Box::new(MemoryStore::<Client>::demo()),
                )
            }
        };

        Ok(Self {
            config,
            sessions,
            settings,
            orders,
            clients,
        })
    }

    /// Login source selected by `auth.source`.
    pub fn authenticator(&self) -> anyhow::Result<Box<dyn Authenticator>> {
        match self.config.auth.source {
            AuthSource::Static => Ok(Box::new(StaticDirectory::new(
                self.config.auth.users.clone(),
            ))),
            AuthSource::Api => {
                let client =
                    ApiClient::new(&self.config.api).context("failed to build HTTP client")?;
                Ok(Box::new(HttpAuthenticator::new(client)))
            }
        }
    }

    #[must_use]
    pub const fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use veloz_auth::Session;
    use veloz_config::StaticUser;
    use veloz_core::enums::Role;
    use veloz_core::{Permission, PermissionSet};
    use veloz_view::OrdersView;

    use super::*;

    fn demo_config(dir: &std::path::Path) -> VelozConfig {
        let mut config = VelozConfig::default();
        config.api.mode = ApiMode::Demo;
        config.session.dir = dir.display().to_string();
        config.auth.source = AuthSource::Static;
        config.auth.users = vec![StaticUser {
            username: "karen".into(),
            password: "secret".into(),
            id: 2,
            display_name: "Karen".into(),
            role: Role::Worker,
            permissions: [Permission::OrdersViewAssigned, Permission::OrdersUpdateStatus]
                .into_iter()
                .collect::<PermissionSet>(),
        }];
        config
    }

    #[tokio::test]
    async fn demo_login_scopes_orders_to_the_worker() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ctx = AppContext::init(demo_config(dir.path())).expect("context");

        let authenticator = ctx.authenticator().expect("authenticator");
        veloz_auth::login(authenticator.as_ref(), &ctx.sessions, " karen ", "secret")
            .await
            .expect("login");

        let session = Session::restore(&ctx.sessions).expect("session");
        let records = ctx.orders.list().await.expect("orders");
        let ids: Vec<u64> = OrdersView::new()
            .rows(session.identity(), &records)
            .iter()
            .map(|row| row.id)
            .collect();
        assert_eq!(ids, vec![1001, 1003]);
    }

    #[tokio::test]
    async fn wrong_password_leaves_no_session() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ctx = AppContext::init(demo_config(dir.path())).expect("context");

        let authenticator = ctx.authenticator().expect("authenticator");
        let result = veloz_auth::login(authenticator.as_ref(), &ctx.sessions, "karen", "nope").await;

        assert!(result.is_err());
        assert!(Session::restore(&ctx.sessions).is_err());
    }

    #[test]
    fn settings_live_next_to_the_session_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ctx = AppContext::init(demo_config(dir.path())).expect("context");
        let identity = veloz_core::Identity::new(2, "Karen", Role::Worker, PermissionSet::new());

        assert_eq!(ctx.sessions.path(), dir.path().join("mveloz_user.json"));
        assert_eq!(ctx.settings.path_for(&identity), dir.path().join("settings-2.json"));
        assert_eq!(ctx.settings.company_path(), dir.path().join("company.json"));
    }
}
