use serde::{Deserialize, Serialize};

// ! managed outside the tracker, read only here
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SalesRep {
    pub id: String,
    pub name: String,
}
