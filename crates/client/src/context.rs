use std::sync::Arc;

use crate::gateway::Gateway;
use crate::notify::{Confirm, Notifier};

/// What every admin workflow needs: the API and a way to talk to the
/// operator.
#[derive(Clone)]
pub struct AdminContext {
    pub gateway: Gateway,
    pub notifier: Arc<dyn Notifier>,
    pub confirm: Arc<dyn Confirm>,
}

impl AdminContext {
    pub fn new(gateway: Gateway, notifier: Arc<dyn Notifier>, confirm: Arc<dyn Confirm>) -> Self {
        Self {
            gateway,
            notifier,
            confirm,
        }
    }
}
