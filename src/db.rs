use mongodb::{
    bson::{doc, Document},
    options::ClientOptions,
    Client, Collection,
};

use crate::config::Config;

pub async fn get_collection(config: &Config) -> mongodb::error::Result<Collection<Document>> {
    let mut client_options = ClientOptions::parse(&config.uri).await?;

    client_options.app_name = Some("histdump".to_string());

    // Get a handle to the cluster
    let client = Client::with_options(client_options)?;

    // Ping the server to see if you can connect to the cluster
    client
        .database(&config.db_name)
        .run_command(doc! {"ping": 1})
        .await?;
    let db = client.database(&config.db_name);

    let collection = db.collection::<Document>(&config.collection);
    Ok(collection)
}
