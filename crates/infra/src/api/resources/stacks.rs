use cfkit_domain::Stack;
use serde::Deserialize;

use super::Resource;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StackEntity {
    pub name: String,
    pub description: String,
}

impl Resource<StackEntity> {
    pub fn to_model(&self) -> Stack {
        Stack {
            guid: self.metadata.guid.clone(),
            name: self.entity.name.clone(),
            description: self.entity.description.clone(),
        }
    }
}
