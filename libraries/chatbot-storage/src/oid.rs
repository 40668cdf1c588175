/// Identifier helpers.
///
/// Documents are addressed by object ids persisted as lowercase hex strings
/// under `_id`. Ids are assigned here, driver-side, at insert time.
use mongodb::bson::oid::ObjectId;

/// Mint a fresh identifier.
pub fn generate() -> String {
    ObjectId::new().to_hex()
}

/// Validate `id` as a well-formed object id and normalize it to the
/// canonical lowercase hex form.
///
/// Returns `None` for anything that does not parse; callers translate that
/// into their not-found outcome instead of querying the store.
pub fn normalize(id: &str) -> Option<String> {
    ObjectId::parse_str(id).ok().map(|oid| oid.to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_valid() {
        let id = generate();
        assert_eq!(id.len(), 24);
        assert_eq!(normalize(&id), Some(id));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("no-es-un-id"), None);
        assert_eq!(normalize("64b5f0a1c2d3e4f5a6b7c8"), None); // too short
        assert_eq!(normalize("zzb5f0a1c2d3e4f5a6b7c8d9"), None); // not hex
    }

    #[test]
    fn normalizes_case_variants() {
        assert_eq!(
            normalize("64B5F0A1C2D3E4F5A6B7C8D9"),
            Some("64b5f0a1c2d3e4f5a6b7c8d9".to_string())
        );
    }
}
