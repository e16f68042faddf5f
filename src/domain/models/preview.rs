use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, PoisonError, RwLock},
};

use tracing::debug;
use uuid::Uuid;

pub const OBJECT_ROUTE_PREFIX: &str = "/objects";

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub content: Arc<[u8]>,
    pub mime_type: String,
}

/// In-memory store behind preview URLs. A URL resolves for exactly as long as the
/// [`PreviewHandle`] that created it is alive.
#[derive(Clone, Default)]
pub struct ObjectUrlRegistry {
    objects: Arc<RwLock<HashMap<Uuid, StoredObject>>>,
}

impl ObjectUrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, content: impl Into<Arc<[u8]>>, mime_type: &str) -> PreviewHandle {
        let id = Uuid::new_v4();
        let object = StoredObject {
            content: content.into(),
            mime_type: mime_type.to_string(),
        };

        debug!(
            "Creating object URL {} ({} bytes, {})",
            id,
            object.content.len(),
            mime_type
        );

        self.objects
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, object);

        PreviewHandle {
            id,
            registry: self.clone(),
        }
    }

    pub fn resolve(&self, id: &Uuid) -> Option<StoredObject> {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn revoke(&self, id: &Uuid) {
        let removed = self
            .objects
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);

        if removed.is_some() {
            debug!("Revoked object URL {}", id);
        }
    }
}

/// Owned reference to an object in the registry. Dropping it revokes the URL.
pub struct PreviewHandle {
    id: Uuid,
    registry: ObjectUrlRegistry,
}

impl PreviewHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn url(&self) -> String {
        format!("{}/{}", OBJECT_ROUTE_PREFIX, self.id)
    }

    pub fn object(&self) -> Option<StoredObject> {
        self.registry.resolve(&self.id)
    }
}

impl fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewHandle").field("id", &self.id).finish()
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.registry.revoke(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_resolves_until_dropped() {
        let registry = ObjectUrlRegistry::new();
        let handle = registry.create(vec![1u8, 2, 3], "font/ttf");
        let id = handle.id();

        let object = registry.resolve(&id).expect("live handle resolves");
        assert_eq!(&*object.content, &[1, 2, 3]);
        assert_eq!(object.mime_type, "font/ttf");
        assert_eq!(handle.url(), format!("/objects/{}", id));

        drop(handle);
        assert!(registry.resolve(&id).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn replacing_a_handle_revokes_the_old_one() {
        let registry = ObjectUrlRegistry::new();
        let mut slot = Some(registry.create(vec![1u8], "font/otf"));
        let first = slot.as_ref().map(PreviewHandle::id).unwrap();

        slot = Some(registry.create(vec![2u8], "font/otf"));

        assert!(registry.resolve(&first).is_none());
        assert_eq!(registry.len(), 1);
        assert!(slot.unwrap().object().is_some());
    }

    #[test]
    fn handles_get_distinct_urls() {
        let registry = ObjectUrlRegistry::new();
        let a = registry.create(vec![0u8], "font/otf");
        let b = registry.create(vec![0u8], "font/ttf");

        assert_ne!(a.url(), b.url());
        assert_eq!(registry.len(), 2);
    }
}
