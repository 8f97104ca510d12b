//! HTTP Collection Client
//!
//! JSON over reqwest; works natively and in the browser.

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::{ApiError, ApiResult, TodoApi};
use crate::config::ApiConfig;
use crate::domain::{NewTodo, Todo, TodoPatch};

#[derive(Clone, Debug)]
pub struct HttpTodoApi {
    client: Client,
    base_url: String,
}

impl HttpTodoApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn non-2xx answers into `ApiError::Status`
fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self, user_id: u32) -> ApiResult<Vec<Todo>> {
        let response = self
            .client
            .get(self.url("/todos"))
            .query(&[("userId", user_id)])
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo> {
        let response = self.client.post(self.url("/todos")).json(todo).send().await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn update(&self, id: u32, patch: &TodoPatch) -> ApiResult<TodoPatch> {
        let response = self
            .client
            .patch(self.url(&format!("/todos/{}", id)))
            .json(patch)
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/todos/{}", id)))
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }
}
