use crate::config::MongoConfig;
use crate::error::AppError;
use mongodb::{
    bson::{doc, Document},
    options::{ClientOptions, Credential, ServerApi, ServerApiVersion},
    Client as MongoClient, Collection, Database,
};

/// Shared MongoDB handle. One client for the whole process, cloned into
/// every handler; the driver pools connections internally. There is no
/// teardown path: the client lives until the process exits.
#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(config: &MongoConfig) -> Result<Self, AppError> {
        tracing::info!(uri = %config.uri, "Connecting to MongoDB");

        let mut options = ClientOptions::parse(&config.uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB URI {}: {}", config.uri, e);
            AppError::from(e)
        })?;

        // Stable API v1, strict mode, as the deployment has always run.
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            options.credential = Some(
                Credential::builder()
                    .username(username.clone())
                    .password(password.clone())
                    .build(),
            );
        }

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to build MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(&config.database);

        tracing::info!(database = %config.database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    // All five collections are schema-less: records hold exactly the
    // fields the client submitted (plus whatever the handler stamped).

    pub fn properties(&self) -> Collection<Document> {
        self.db.collection("properties")
    }

    pub fn agents(&self) -> Collection<Document> {
        self.db.collection("agents")
    }

    pub fn users(&self) -> Collection<Document> {
        self.db.collection("users")
    }

    pub fn contacts(&self) -> Collection<Document> {
        self.db.collection("contacts")
    }

    pub fn blogs(&self) -> Collection<Document> {
        self.db.collection("blogs")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
