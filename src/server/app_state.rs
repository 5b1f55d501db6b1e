use std::sync::Arc;

use crate::{
    config::config::DatabaseConfig,
    time_check::{
        db::{Connector, MySqlConnector},
        models::Timeouts,
    },
};

pub struct AppState<C = MySqlConnector> {
    connector: C,
    timeouts: Timeouts,
}

impl AppState {
    pub fn from_config(config: &DatabaseConfig) -> Arc<Self> {
        let connector = MySqlConnector::from_config(config);
        let timeouts = Timeouts::from_config(config);

        Self::new(connector, timeouts)
    }
}

impl<C: Connector> AppState<C> {
    pub fn new(connector: C, timeouts: Timeouts) -> Arc<Self> {
        Arc::new(Self {
            connector,
            timeouts,
        })
    }

    pub fn get_connector(&self) -> &C {
        &self.connector
    }

    pub fn get_timeouts(&self) -> &Timeouts {
        &self.timeouts
    }
}
