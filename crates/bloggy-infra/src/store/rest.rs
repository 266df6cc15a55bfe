//! Post store speaking the PostgREST dialect of a hosted Supabase project.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use bloggy_core::domain::{Post, PostChanges, PostFields};
use bloggy_core::error::StoreError;
use bloggy_core::ports::{ListQuery, Order, PostStore};

/// Connection settings for the hosted table.
#[derive(Debug, Clone)]
pub struct RestStoreConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`.
    pub base_url: String,
    /// Publishable (anon) key, sent as `apikey` and as a bearer token.
    pub api_key: String,
    pub table: String,
}

/// Remote store client. One HTTP round trip per call, no retries.
pub struct RestPostStore {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl RestPostStore {
    pub fn new(config: RestStoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .user_agent(concat!("bloggy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let endpoint = format!(
            "{}/rest/v1/{}",
            config.base_url.trim_end_matches('/'),
            config.table
        );
        tracing::info!(endpoint = %endpoint, "REST post store configured");

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key,
        })
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, &self.endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    fn by_id(builder: RequestBuilder, id: Uuid) -> RequestBuilder {
        builder.query(&[("id", format!("eq.{id}"))])
    }

    async fn send(builder: RequestBuilder) -> Result<Response, StoreError> {
        let resp = builder
            .send()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        Ok(resp)
    }

    async fn rows<T: DeserializeOwned>(builder: RequestBuilder) -> Result<Vec<T>, StoreError> {
        let bytes = Self::send(builder)
            .await?
            .bytes()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn single(builder: RequestBuilder) -> Result<Post, StoreError> {
        Self::rows(builder)
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound)
    }

    fn returning<B: Serialize>(builder: RequestBuilder, body: &B) -> RequestBuilder {
        builder
            .header("prefer", "return=representation")
            .query(&[("select", "*")])
            .json(body)
    }
}

fn order_param(order: Order) -> &'static str {
    match order {
        Order::NewestFirst => "created_at.desc",
        Order::OldestFirst => "created_at.asc",
    }
}

#[async_trait]
impl PostStore for RestPostStore {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Post>, StoreError> {
        let mut params = vec![
            ("select", "*".to_string()),
            ("order", order_param(query.order).to_string()),
        ];
        if let Some(filter) = &query.category {
            params.push(("category", format!("ilike.*{}*", filter.like_escaped())));
        }

        Self::rows(self.request(Method::GET).query(&params)).await
    }

    async fn get(&self, id: Uuid) -> Result<Post, StoreError> {
        let builder = self
            .request(Method::GET)
            .query(&[("select", "*")]);
        Self::single(Self::by_id(builder, id)).await
    }

    async fn create(&self, fields: PostFields) -> Result<Post, StoreError> {
        let builder = Self::returning(self.request(Method::POST), &fields);
        Self::rows(builder)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode("insert returned no row".to_string()))
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, StoreError> {
        let builder = Self::returning(self.request(Method::PATCH), &changes);
        Self::single(Self::by_id(builder, id)).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        Self::send(Self::by_id(self.request(Method::DELETE), id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use serde_json::json;

    const KEY: &str = "anon-key";

    fn store(server: &MockServer) -> RestPostStore {
        RestPostStore::new(RestStoreConfig {
            base_url: server.base_url(),
            api_key: KEY.to_string(),
            table: "blogs".to_string(),
        })
        .unwrap()
    }

    fn row(id: Uuid, title: &str) -> serde_json::Value {
        json!({
            "id": id,
            "created_at": "2024-05-01T10:00:00+00:00",
            "title": title,
            "content": "<p>body</p>",
            "cover_image": "https://img.example/c.png",
            "category": "AI",
            "author": "Ada"
        })
    }

    #[tokio::test]
    async fn test_list_sends_order_and_credentials() {
        let server = MockServer::start_async().await;
        let id = Uuid::new_v4();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/rest/v1/blogs")
                    .query_param("select", "*")
                    .query_param("order", "created_at.desc")
                    .header("apikey", KEY)
                    .header("authorization", format!("Bearer {KEY}"));
                then.status(200).json_body(json!([row(id, "first")]));
            })
            .await;

        let posts = store(&server)
            .list(&ListQuery::newest_first())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, id);
        assert_eq!(posts[0].title, "first");
    }

    #[tokio::test]
    async fn test_category_filter_uses_ilike() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/rest/v1/blogs")
                    .query_param("category", "ilike.*science*");
                then.status(200).json_body(json!([]));
            })
            .await;

        let posts = store(&server)
            .list(&ListQuery::in_category("science"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_category_filter_escapes_like_wildcards() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/rest/v1/blogs")
                    .query_param("category", r"ilike.*50\%\_off*");
                then.status(200).json_body(json!([]));
            })
            .await;

        store(&server)
            .list(&ListQuery::in_category("50%_off"))
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_empty_result_is_not_found() {
        let server = MockServer::start_async().await;
        let id = Uuid::new_v4();
        server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/rest/v1/blogs")
                    .query_param("id", format!("eq.{id}"));
                then.status(200).json_body(json!([]));
            })
            .await;

        assert_eq!(store(&server).get(id).await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_create_asks_for_representation() {
        let server = MockServer::start_async().await;
        let id = Uuid::new_v4();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/rest/v1/blogs")
                    .header("prefer", "return=representation")
                    .json_body(json!({
                        "title": "new",
                        "content": "<p>body</p>",
                        "cover_image": "https://img.example/c.png",
                        "category": "AI",
                        "author": "Ada"
                    }));
                then.status(201).json_body(json!([row(id, "new")]));
            })
            .await;

        let created = store(&server)
            .create(PostFields {
                title: "new".to_string(),
                content: "<p>body</p>".to_string(),
                cover_image: "https://img.example/c.png".to_string(),
                category: "AI".to_string(),
                author: "Ada".to_string(),
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(created.id, id);
    }

    #[tokio::test]
    async fn test_update_sends_only_present_fields() {
        let server = MockServer::start_async().await;
        let id = Uuid::new_v4();
        let mock = server
            .mock_async(|when, then| {
                when.method("PATCH")
                    .path("/rest/v1/blogs")
                    .query_param("id", format!("eq.{id}"))
                    .json_body(json!({ "title": "renamed" }));
                then.status(200).json_body(json!([row(id, "renamed")]));
            })
            .await;

        let updated = store(&server)
            .update(
                id,
                PostChanges {
                    title: Some("renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(updated.title, "renamed");
    }

    #[tokio::test]
    async fn test_delete_targets_row() {
        let server = MockServer::start_async().await;
        let id = Uuid::new_v4();
        let mock = server
            .mock_async(|when, then| {
                when.method("DELETE")
                    .path("/rest/v1/blogs")
                    .query_param("id", format!("eq.{id}"));
                then.status(204);
            })
            .await;

        store(&server).delete(id).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/rest/v1/blogs");
                then.status(401).body("Invalid API key");
            })
            .await;

        let err = store(&server)
            .list(&ListQuery::newest_first())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::Rejected {
                status: 401,
                message: "Invalid API key".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/rest/v1/blogs");
                then.status(200).body("not json");
            })
            .await;

        let err = store(&server)
            .list(&ListQuery::newest_first())
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connection_error() {
        let store = RestPostStore::new(RestStoreConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            api_key: KEY.to_string(),
            table: "blogs".to_string(),
        })
        .unwrap();

        let err = store.list(&ListQuery::newest_first()).await.unwrap_err();
        assert!(matches!(err, StoreError::Connection(_)));
    }
}
