use mongodb::{Client, ClientSession, Database};
use once_cell::sync::OnceCell;

use crate::config;

static CLIENT: OnceCell<Client> = OnceCell::new();

pub struct MongoDB;

impl MongoDB {
    /// Connects the global client. Called once from main before the server
    /// starts accepting requests.
    pub async fn init(&self) -> mongodb::error::Result<()> {
        let client = Client::with_uri_str(config::mongo_uri()).await?;
        CLIENT.set(client).ok();
        Ok(())
    }

    pub fn connect(&self) -> Database {
        CLIENT
            .get()
            .expect("mongo client not initialized")
            .database(&config::database_name())
    }

    /* DATABASE ACID SESSION */
    pub async fn connect_acid(&self) -> mongodb::error::Result<(Database, ClientSession)> {
        let client = CLIENT.get().expect("mongo client not initialized");
        let session = client.start_session().await?;
        Ok((client.database(&config::database_name()), session))
    }
}
