use crate::adapters::http::HttpTransport;
use crate::app::services::{BreweryService, UserService};
use crate::config::ClientConfig;
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::sync::Arc;

/// Entry point to the API. Cheap to clone; clones share one transport.
pub struct Client<T: Transport = HttpTransport> {
    transport: Arc<T>,
}

impl<T: Transport> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl Client<HttpTransport> {
    /// Validates `config` and builds a client over HTTP.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self::from_shared(Arc::new(transport))
    }

    pub fn from_shared(transport: Arc<T>) -> Self {
        Self { transport }
    }

    pub fn brewery(&self) -> BreweryService<T> {
        BreweryService::new(Arc::clone(&self.transport))
    }

    pub fn user(&self) -> UserService<T> {
        UserService::new(Arc::clone(&self.transport))
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
