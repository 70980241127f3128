//! Knowledge-graph operations.

use crate::client::{ClientError, HttpClient};
use loregraph_core::{CharacterQuery, Endpoint, NodeId, WorkId, WorkRef};
use serde_json::Value;

/// Calls for graph data, works, nodes and their neighbourhoods.
#[derive(Debug, Clone)]
pub struct GraphService {
    client: HttpClient,
}

impl GraphService {
    #[must_use]
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// GET /graph/ for everything, or GET /graph/{work}/ for one work.
    pub async fn get_graph_data(&self, work: Option<WorkRef>) -> Result<Value, ClientError> {
        self.client.call(&Endpoint::Graph(work)).await
    }

    /// GET /work/{id}/graph/ → graph of one work, addressed by id only.
    pub async fn get_work_graph(&self, id: WorkId) -> Result<Value, ClientError> {
        self.client.call(&Endpoint::WorkGraph(id)).await
    }

    /// GET /works/
    pub async fn get_works(&self) -> Result<Value, ClientError> {
        self.client.call(&Endpoint::Works).await
    }

    /// GET /node/{id}/
    pub async fn get_node_details(&self, id: NodeId) -> Result<Value, ClientError> {
        self.client.call(&Endpoint::NodeDetails(id)).await
    }

    /// GET /relationships/{id}/
    pub async fn get_relationships(&self, id: NodeId) -> Result<Value, ClientError> {
        self.client.call(&Endpoint::Relationships(id)).await
    }

    /// GET /events/ or GET /events/{work_id}/
    pub async fn get_events(&self, work: Option<WorkId>) -> Result<Value, ClientError> {
        self.client.call(&Endpoint::Events(work)).await
    }

    /// GET /character-details/?work_id=..&character_name=..
    pub async fn get_character_details(
        &self,
        query: &CharacterQuery,
    ) -> Result<Value, ClientError> {
        let path = Endpoint::CharacterDetails.path();
        self.client.get_with_query(&path, &query.to_pairs()).await
    }
}
