use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use super::entity::post::PostDocument;

/// Collection holding post documents.
pub const POSTS_COLLECTION: &str = "posts";

/// Database used when neither the config nor the URI names one.
const FALLBACK_DATABASE: &str = "test";

/// Configuration for the document store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    /// Overrides the default database carried by the URI.
    pub database_name: Option<String>,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout: Duration,
}

/// Handle to the document store.
///
/// The driver pools connections internally, so one handle is built at
/// startup and shared (by clone) with every repository.
///
/// # Example
/// ```ignore
/// let conn = DatabaseConnection::init(&config).await?;
/// let repo = MongoPostRepository::new(&conn);
/// ```
#[derive(Clone, Debug)]
pub struct DatabaseConnection {
    pub client: Client,
    pub db: Database,
}

impl DatabaseConnection {
    /// Connect to the store and verify it answers before returning.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        tracing::info!("Connecting to document store...");

        let mut options = ClientOptions::parse(&config.uri).await?;
        options.max_pool_size = Some(config.max_pool_size);
        options.min_pool_size = Some(config.min_pool_size);
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let uri_database = options.default_database.clone();
        let client = Client::with_options(options)?;

        let name = resolve_database_name(config.database_name.as_deref(), uri_database.as_deref());
        let db = client.database(name);

        // Client construction is lazy; ping so an unreachable store fails here.
        db.run_command(doc! { "ping": 1 }).await?;

        tracing::info!(
            database = %name,
            "Document store connected (pool: {})",
            config.max_pool_size
        );

        Ok(Self { client, db })
    }

    /// Typed handle to the `posts` collection.
    pub fn posts(&self) -> Collection<PostDocument> {
        self.db.collection(POSTS_COLLECTION)
    }
}

fn resolve_database_name<'a>(explicit: Option<&'a str>, from_uri: Option<&'a str>) -> &'a str {
    explicit
        .filter(|name| !name.is_empty())
        .or(from_uri)
        .unwrap_or(FALLBACK_DATABASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_database_wins() {
        assert_eq!(resolve_database_name(Some("blog"), Some("uri_db")), "blog");
    }

    #[test]
    fn uri_database_is_next() {
        assert_eq!(resolve_database_name(None, Some("uri_db")), "uri_db");
        assert_eq!(resolve_database_name(Some(""), Some("uri_db")), "uri_db");
    }

    #[test]
    fn falls_back_to_test() {
        assert_eq!(resolve_database_name(None, None), "test");
    }
}
