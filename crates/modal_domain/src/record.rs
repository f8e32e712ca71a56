use serde::{Deserialize, Serialize};

use crate::{DialogRequest, DialogResponse};

/// A completed interaction: what was asked and what came back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogRecord {
    pub request: DialogRequest,
    pub response: DialogResponse,
}

impl DialogRecord {
    pub fn new(request: DialogRequest, response: DialogResponse) -> Self {
        Self { request, response }
    }
}
