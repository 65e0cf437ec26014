use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Turn a schema key into an API Gateway model name by dropping every
/// character that is not an ASCII letter or digit.
///
/// Examples:
/// - `My Model!` → `MyModel`
/// - `pet_store.Pet` → `petstorePet`
/// - `Café` → `Caf`
pub fn normalize_model_name(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Both directions of the schema renaming performed by one extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModelNameMap {
    /// Original schema key → normalized model name.
    pub old_to_new: IndexMap<String, String>,
    /// Normalized model name → original schema key.
    pub new_to_old: IndexMap<String, String>,
}

impl ModelNameMap {
    pub fn new_name(&self, old: &str) -> Option<&str> {
        self.old_to_new.get(old).map(String::as_str)
    }

    pub fn old_name(&self, new: &str) -> Option<&str> {
        self.new_to_old.get(new).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.old_to_new.is_empty()
    }

    fn record(&mut self, old: &str, new: &str) {
        self.old_to_new.insert(old.to_string(), new.to_string());
        self.new_to_old.insert(new.to_string(), old.to_string());
    }
}

/// Re-key `schemas` under normalized names, recording each rename in `names`.
///
/// Entries are visited from a snapshot taken up front, so rewriting the live
/// map never disturbs the iteration. A renamed key is moved to the end of
/// the map; when it lands on a name that already exists it takes over that
/// slot, and a later visit of the occupant copies the live value onto
/// itself. So in `{"a-b": A, "ab": B}` the map ends up as `{"ab": A}`.
///
/// Returns `(new_name, schema)` for every original entry in declaration
/// order, each carrying the schema it had before any rewrite.
pub fn rename_schemas(
    schemas: &mut IndexMap<String, Value>,
    names: &mut ModelNameMap,
) -> Vec<(String, Value)> {
    let snapshot = schemas.clone();
    let mut models = Vec::with_capacity(snapshot.len());

    for (old, schema) in snapshot {
        let new = normalize_model_name(&old);
        if let Some(previous) = names.old_name(&new).filter(|prev| *prev != old) {
            log::warn!("schemas `{previous}` and `{old}` both normalize to `{new}`");
        }
        names.record(&old, &new);

        let live = schemas.get(&old).cloned().unwrap_or_else(|| schema.clone());
        schemas.insert(new.clone(), live);
        if new != old {
            log::debug!("renaming schema `{old}` to `{new}`");
            schemas.shift_remove(&old);
        }
        models.push((new, schema));
    }

    models
}
