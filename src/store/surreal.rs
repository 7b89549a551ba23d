use async_trait::async_trait;
use serde_json::{Map, Value};
use surrealdb::{
    Surreal,
    engine::remote::ws::{Client, Ws},
    opt::auth::Root,
};
use tracing::info;

use crate::{
    config::SurrealConfig,
    errors::{Error, Result},
    store::{Collection, OrderBy, RecordStore},
};

#[derive(Debug, Clone)]
pub struct SurrealStore {
    pub sdb: Surreal<Client>,
}

impl SurrealStore {
    pub async fn connect(config: &SurrealConfig) -> Result<Self> {
        let sdb = Surreal::new::<Ws>(config.url.as_str()).await?;
        sdb.signin(Root {
            username: &config.username,
            password: &config.password,
        })
        .await?;
        sdb.use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await?;

        info!(
            "Connected to SurrealDB at {} ({}/{})",
            config.url, config.namespace, config.database
        );
        Ok(Self { sdb })
    }
}

fn select_all_sql(order: OrderBy) -> String {
    // ! field names are compile time constants, never user input
    let direction = if order.descending { "DESC" } else { "ASC" };
    format!(
        "SELECT *, type::string(record::id(id)) AS id FROM type::table($table) ORDER BY {} {};",
        order.field, direction
    )
}

#[async_trait]
impl RecordStore for SurrealStore {
    async fn fetch_all(&self, collection: Collection, order: OrderBy) -> Result<Vec<Value>> {
        let rows = self
            .sdb
            .query(select_all_sql(order))
            .bind(("table", collection.table()))
            .await?
            .take::<Vec<Value>>(0)?;
        Ok(rows)
    }

    async fn insert(&self, collection: Collection, record: Value) -> Result<()> {
        let mut record = record;
        // ? the store assigns record ids
        if let Value::Object(fields) = &mut record {
            fields.remove("id");
        }
        self.sdb
            .query("CREATE type::table($table) CONTENT $content;")
            .bind(("table", collection.table()))
            .bind(("content", record))
            .await?
            .check()?;
        Ok(())
    }

    async fn update_field(
        &self,
        collection: Collection,
        id: &str,
        field: &str,
        value: Value,
    ) -> Result<()> {
        let mut patch = Map::new();
        patch.insert(field.to_string(), value);

        let updated = self
            .sdb
            .query("UPDATE type::thing($table, $id) MERGE $patch RETURN AFTER;")
            .bind(("table", collection.table()))
            .bind(("id", id.to_string()))
            .bind(("patch", Value::Object(patch)))
            .await?
            .take::<Vec<Value>>(0)?;

        if updated.is_empty() {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<()> {
        let deleted = self
            .sdb
            .query("DELETE type::thing($table, $id) RETURN BEFORE;")
            .bind(("table", collection.table()))
            .bind(("id", id.to_string()))
            .await?
            .take::<Vec<Value>>(0)?;

        if deleted.is_empty() {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}
