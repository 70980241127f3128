//! Article operations.

use crate::client::{ClientError, HttpClient};
use loregraph_core::primitives::UPLOAD_FIELD;
use loregraph_core::{AnalyzeRequest, ArticleId, Endpoint, upload_content_type};
use serde_json::Value;

/// Calls under `/article/`.
#[derive(Debug, Clone)]
pub struct ArticleService {
    client: HttpClient,
}

impl ArticleService {
    #[must_use]
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// GET /article/list/ → articles grouped by work.
    pub async fn get_article_list(&self) -> Result<Value, ClientError> {
        self.client.call(&Endpoint::ArticleList).await
    }

    /// GET /article/{id}/
    pub async fn get_article_detail(&self, id: ArticleId) -> Result<Value, ClientError> {
        self.client.call(&Endpoint::ArticleDetail(id)).await
    }

    /// POST /article/analyze/ with `{"title", "content"}`.
    pub async fn analyze_article(&self, title: &str, content: &str) -> Result<Value, ClientError> {
        let body = AnalyzeRequest::new(title, content);
        self.client
            .call_with_body(&Endpoint::AnalyzeArticle, &body)
            .await
    }

    /// POST /article/upload/ → `{"data": {"content": ..}}` with the text the
    /// backend extracted from a `.txt`, `.docx` or `.pdf` document.
    ///
    /// The content type is chosen from the file name's extension.
    pub async fn upload_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Value, ClientError> {
        self.client
            .call_multipart(
                &Endpoint::UploadArticle,
                UPLOAD_FIELD,
                file_name,
                upload_content_type(file_name),
                bytes,
            )
            .await
    }

    /// GET /article/{id}/analysis/ → stored analysis of one article.
    pub async fn get_article_analysis(&self, id: ArticleId) -> Result<Value, ClientError> {
        self.client.call(&Endpoint::ArticleAnalysis(id)).await
    }

    /// GET /article/{id}/graph/ → graph restricted to one article.
    pub async fn get_article_graph(&self, id: ArticleId) -> Result<Value, ClientError> {
        self.client.call(&Endpoint::ArticleGraph(id)).await
    }

    /// DELETE /article/{id}/delete/
    pub async fn delete_article(&self, id: ArticleId) -> Result<Value, ClientError> {
        self.client.call(&Endpoint::DeleteArticle(id)).await
    }
}
