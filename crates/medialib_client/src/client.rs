//! The asset service client proper.

use crate::error::ClientError;
use medialib_core::models::{
    Asset, CustomFields, FieldKey, Folder, LabelsResponse, RocketiumAsset, SearchHit,
    UpdateCustomFieldRequest,
};
use reqwest::blocking::{multipart, Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the asset backend.
///
/// Cheap to clone is not a goal; one instance lives on the backend worker
/// thread and owns a pooled `reqwest` client.
pub struct AssetClient {
    http: Client,
    base: Url,
}

impl AssetClient {
    /// Build a client against a backend base URL.
    ///
    /// # Errors
    /// `Validation` when the URL does not parse or cannot carry path segments.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base_url)
            .map_err(|err| ClientError::Validation(format!("invalid base URL '{base_url}': {err}")))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::Validation(format!(
                "base URL '{base_url}' cannot carry API paths"
            )));
        }
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, base })
    }

    /// List folders at one tree level. `None` means root.
    pub fn list_folders(&self, parent_id: Option<&str>) -> Result<Vec<Folder>, ClientError> {
        let mut segments = vec!["api", "folders"];
        if let Some(parent) = parent_id {
            segments.push(parent);
        }
        self.get_json("list folders", self.endpoint(&segments, &[]))
    }

    /// List assets at one tree level. `None` means root.
    pub fn list_assets(&self, parent_id: Option<&str>) -> Result<Vec<Asset>, ClientError> {
        let mut segments = vec!["api", "assets"];
        if let Some(parent) = parent_id {
            segments.push(parent);
        }
        self.get_json("list assets", self.endpoint(&segments, &[]))
    }

    /// As-you-type suggestion query. An empty result array is a valid answer.
    pub fn autocomplete(&self, term: &str) -> Result<Vec<SearchHit>, ClientError> {
        let url = self.endpoint(
            &["api", "assets", "autocomplete"],
            &[("searchString", term)],
        );
        self.get_json("autocomplete", url)
    }

    /// Explicit search submission.
    pub fn search(&self, term: &str) -> Result<Vec<SearchHit>, ClientError> {
        let url = self.endpoint(&["api", "assets", "search"], &[("searchString", term)]);
        self.get_json("search", url)
    }

    /// Upload one file as a multipart request. The backend creates the asset
    /// and returns it.
    ///
    /// # Errors
    /// `Validation` when the file name is empty.
    pub fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<Asset, ClientError> {
        if file_name.trim().is_empty() {
            return Err(ClientError::Validation(
                "upload requires a file name".to_string(),
            ));
        }
        let form = multipart::Form::new().part(
            "file",
            multipart::Part::bytes(bytes).file_name(file_name.to_string()),
        );
        let url = self.endpoint(&["api", "assets", "upload"], &[]);
        debug!(%url, file_name, "uploading asset");
        let response = self.http.post(url).multipart(form).send()?;
        Self::decode("upload", response)
    }

    /// Trigger backend auto-tagging and return the labeled custom fields.
    ///
    /// # Errors
    /// `Validation` when id or name is empty; the caller's fetch guard should
    /// already prevent that.
    pub fn fetch_labels(
        &self,
        asset_id: &str,
        asset_name: &str,
    ) -> Result<CustomFields, ClientError> {
        if asset_id.is_empty() || asset_name.is_empty() {
            return Err(ClientError::Validation(
                "label fetch requires asset id and name".to_string(),
            ));
        }
        let url = self.endpoint(
            &["api", "assets", "labels"],
            &[("imageId", asset_id), ("imageName", asset_name)],
        );
        let response: LabelsResponse = self.get_json("fetch labels", url)?;
        Ok(response.custom_fields)
    }

    /// Replace one custom-field dimension with a full joined value. Returns
    /// the authoritative post-update asset so the caller reconciles rather
    /// than assumes success.
    pub fn update_custom_field(
        &self,
        asset_id: &str,
        key: FieldKey,
        value: &str,
    ) -> Result<Asset, ClientError> {
        let request = UpdateCustomFieldRequest {
            image_id: asset_id.to_string(),
            key,
            value: value.to_string(),
        };
        let url = self.endpoint(&["api", "assets", "custom-fields"], &[]);
        let response = self.http.patch(url).json(&request).send()?;
        Self::decode("update custom field", response)
    }

    /// Autocomplete against the Rocketium catalog.
    pub fn rocketium_autocomplete(&self, term: &str) -> Result<Vec<RocketiumAsset>, ClientError> {
        let url = self.endpoint(
            &["api", "rocketium", "assets", "autocomplete"],
            &[("searchString", term)],
        );
        self.get_json("rocketium autocomplete", url)
    }

    /// Paged search against the Rocketium catalog.
    pub fn rocketium_search(
        &self,
        term: &str,
        page: u32,
    ) -> Result<Vec<RocketiumAsset>, ClientError> {
        let page = page.to_string();
        let url = self.endpoint(
            &["api", "rocketium", "assets", "search"],
            &[("searchString", term), ("page", page.as_str())],
        );
        self.get_json("rocketium search", url)
    }

    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Url {
        let mut url = self.base.clone();
        {
            // Guarded in `new`: the base URL always accepts path segments.
            let mut path = url
                .path_segments_mut()
                .expect("base URL accepts path segments");
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: Url,
    ) -> Result<T, ClientError> {
        debug!(%url, operation, "backend request");
        let response = self.http.get(url).send()?;
        Self::decode(operation, response)
    }

    fn decode<T: DeserializeOwned>(
        operation: &'static str,
        response: Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                operation,
                status: status.as_u16(),
            });
        }
        let body = response.text()?;
        serde_json::from_str(&body).map_err(|source| ClientError::Decode { operation, source })
    }
}
