//! # Endpoint Catalogue
//!
//! Every backend call the client can make, as data.
//!
//! Paths are relative to the configured base URL and always start and end
//! with `/`, matching the backend's URL patterns.

use crate::types::{ArticleId, NodeId, WorkId, WorkRef};
use std::fmt;

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single backend operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /article/list/`
    ArticleList,
    /// `GET /article/{id}/`
    ArticleDetail(ArticleId),
    /// `POST /article/analyze/`
    AnalyzeArticle,
    /// `GET /article/{id}/analysis/`
    ArticleAnalysis(ArticleId),
    /// `GET /article/{id}/graph/`
    ArticleGraph(ArticleId),
    /// `DELETE /article/{id}/delete/`
    DeleteArticle(ArticleId),
    /// `GET /graph/` or `GET /graph/{work}/`
    Graph(Option<WorkRef>),
    /// `GET /works/`
    Works,
    /// `GET /node/{id}/`
    NodeDetails(NodeId),
    /// `GET /relationships/{id}/`
    Relationships(NodeId),
    /// `GET /events/` or `GET /events/{work_id}/`
    Events(Option<WorkId>),
    /// `GET /character-details/`
    CharacterDetails,
    /// `POST /article/upload/` (multipart `file`)
    UploadArticle,
    /// `GET /work/{id}/graph/`
    WorkGraph(WorkId),
}

impl Endpoint {
    #[must_use]
    pub const fn method(&self) -> Method {
        match self {
            Self::AnalyzeArticle | Self::UploadArticle => Method::Post,
            Self::DeleteArticle(_) => Method::Delete,
            _ => Method::Get,
        }
    }

    /// Path relative to the base URL.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::ArticleList => "/article/list/".to_string(),
            Self::ArticleDetail(id) => format!("/article/{id}/"),
            Self::AnalyzeArticle => "/article/analyze/".to_string(),
            Self::ArticleAnalysis(id) => format!("/article/{id}/analysis/"),
            Self::ArticleGraph(id) => format!("/article/{id}/graph/"),
            Self::DeleteArticle(id) => format!("/article/{id}/delete/"),
            Self::Graph(Some(work)) if !work.is_empty() => format!("/graph/{work}/"),
            Self::Graph(_) => "/graph/".to_string(),
            Self::Works => "/works/".to_string(),
            Self::NodeDetails(id) => format!("/node/{id}/"),
            Self::Relationships(id) => format!("/relationships/{id}/"),
            Self::Events(None) => "/events/".to_string(),
            Self::Events(Some(work)) => format!("/events/{work}/"),
            Self::CharacterDetails => "/character-details/".to_string(),
            Self::UploadArticle => "/article/upload/".to_string(),
            Self::WorkGraph(id) => format!("/work/{id}/graph/"),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_endpoints() {
        assert_eq!(Endpoint::ArticleList.path(), "/article/list/");
        assert_eq!(Endpoint::ArticleDetail(ArticleId(9)).path(), "/article/9/");
        assert_eq!(Endpoint::AnalyzeArticle.path(), "/article/analyze/");
        assert_eq!(Endpoint::AnalyzeArticle.method(), Method::Post);
        assert_eq!(
            Endpoint::DeleteArticle(ArticleId(2)).to_string(),
            "DELETE /article/2/delete/"
        );
    }

    #[test]
    fn graph_endpoint_with_and_without_work() {
        assert_eq!(Endpoint::Graph(None).path(), "/graph/");
        assert_eq!(
            Endpoint::Graph(Some(WorkRef::Id(WorkId(4)))).path(),
            "/graph/4/"
        );
        assert_eq!(
            Endpoint::Graph(Some(WorkRef::Name("水浒传".into()))).path(),
            "/graph/水浒传/"
        );
    }

    #[test]
    fn empty_work_name_falls_back_to_all_works() {
        assert_eq!(
            Endpoint::Graph(Some(WorkRef::Name(String::new()))).path(),
            "/graph/"
        );
    }

    #[test]
    fn upload_and_work_graph_endpoints() {
        assert_eq!(Endpoint::UploadArticle.method(), Method::Post);
        assert_eq!(Endpoint::UploadArticle.path(), "/article/upload/");
        assert_eq!(
            Endpoint::WorkGraph(WorkId(6)).to_string(),
            "GET /work/6/graph/"
        );
    }

    #[test]
    fn node_endpoints_use_node_id() {
        assert_eq!(Endpoint::NodeDetails(NodeId(11)).path(), "/node/11/");
        assert_eq!(
            Endpoint::Relationships(NodeId(11)).path(),
            "/relationships/11/"
        );
        assert_eq!(Endpoint::Works.method(), Method::Get);
    }

    #[test]
    fn every_path_is_slash_delimited() {
        let all = [
            Endpoint::ArticleList,
            Endpoint::ArticleDetail(ArticleId(1)),
            Endpoint::AnalyzeArticle,
            Endpoint::ArticleAnalysis(ArticleId(1)),
            Endpoint::ArticleGraph(ArticleId(1)),
            Endpoint::DeleteArticle(ArticleId(1)),
            Endpoint::Graph(None),
            Endpoint::Works,
            Endpoint::NodeDetails(NodeId(1)),
            Endpoint::Relationships(NodeId(1)),
            Endpoint::Events(Some(WorkId(1))),
            Endpoint::CharacterDetails,
            Endpoint::UploadArticle,
            Endpoint::WorkGraph(WorkId(1)),
        ];
        for endpoint in all {
            let path = endpoint.path();
            assert!(path.starts_with('/') && path.ends_with('/'), "{path}");
        }
    }
}
