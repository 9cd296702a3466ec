use crate::filters::BiomodelQueryRequest;
use biocat_model::canonical;

/// Lowercased copy of a request used for identity, never for the wire.
#[must_use]
pub fn normalize_request(request: &BiomodelQueryRequest) -> BiomodelQueryRequest {
    let mut normalized = request.clone();
    normalized.bm_name = normalized.bm_name.map(|t| t.to_lowercase());
    normalized.owner = normalized.owner.map(|t| t.to_lowercase());
    normalized
}

/// Stable fingerprint of the normalized request, for log correlation.
pub fn request_fingerprint(request: &BiomodelQueryRequest) -> Result<String, String> {
    let normalized = normalize_request(request);
    let bytes = canonical::stable_json_bytes(&normalized).map_err(|e| e.to_string())?;
    Ok(canonical::stable_hash_hex(&bytes))
}
