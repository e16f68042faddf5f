use axum::extract::FromRef;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    application::{services::ConversionService, session::ConverterSession},
    domain::models::preview::ObjectUrlRegistry,
};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub session: Arc<Mutex<ConverterSession>>,
    pub registry: ObjectUrlRegistry,
    pub conversion_service: Arc<dyn ConversionService>,
}

impl AppState {
    pub fn new(conversion_service: Arc<dyn ConversionService>) -> Self {
        let registry = ObjectUrlRegistry::new();
        Self {
            session: Arc::new(Mutex::new(ConverterSession::new(registry.clone()))),
            registry,
            conversion_service,
        }
    }

    /// Never hold the guard across an `.await`.
    pub fn session(&self) -> MutexGuard<'_, ConverterSession> {
        lock_session(&self.session)
    }
}

pub fn lock_session(session: &Mutex<ConverterSession>) -> MutexGuard<'_, ConverterSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}
